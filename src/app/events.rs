use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Focus};

impl App {
    /// Poll for events and update application state.
    ///
    /// The timeout keeps the loop ticking so debounced lookups dispatch and
    /// worker responses drain even while no keys arrive.
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        // Not a global key, delegate to the focused field
        match self.focus {
            Focus::TitleInput => self.handle_title_key(key),
            Focus::AppIdInput => self.handle_app_id_key(key),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: exit without printing anything
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Esc: dismiss the popup first, quit when it's already gone
        if key.code == KeyCode::Esc {
            if self.lookup.suggestions.is_empty() {
                self.should_quit = true;
            } else {
                self.lookup.clear_suggestions();
            }
            return true;
        }

        // Tab: switch focus between the two input fields
        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                Focus::TitleInput => Focus::AppIdInput,
                Focus::AppIdInput => Focus::TitleInput,
            };
            self.update_focus_styles();
            return true;
        }

        false
    }

    /// Keys for the title input: navigation steers the popup, anything that
    /// edits the text re-runs the suggestion handler
    fn handle_title_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => {
                self.lookup
                    .selection
                    .navigate_next(self.lookup.suggestions.len());
            }
            KeyCode::Up => {
                self.lookup
                    .selection
                    .navigate_previous(self.lookup.suggestions.len());
            }
            KeyCode::Enter => {
                if self.apply_selected_suggestion() {
                    self.focus = Focus::AppIdInput;
                    self.update_focus_styles();
                }
            }
            _ => {
                if self.title_input.input(key) {
                    let query = self.query().to_string();
                    self.lookup.on_query_changed(&query);
                }
            }
        }
    }

    /// Keys for the app id field: Enter confirms and exits
    fn handle_app_id_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let app_id = self.app_id().trim().to_string();
                if !app_id.is_empty() {
                    self.output = Some(app_id);
                }
                self.should_quit = true;
            }
            _ => {
                self.app_id_input.input(key);
            }
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;

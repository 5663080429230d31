use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::lookup::LookupState;

/// Which input field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TitleInput,
    AppIdInput,
}

/// Application state
pub struct App {
    pub title_input: TextArea<'static>,
    pub app_id_input: TextArea<'static>,
    pub focus: Focus,
    pub lookup: LookupState,
    pub should_quit: bool,
    /// App id printed to stdout after the terminal is restored
    pub output: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &Config) -> Self {
        let mut title_input = TextArea::default();
        title_input.set_cursor_line_style(Style::default());

        let mut app_id_input = TextArea::default();
        app_id_input.set_cursor_line_style(Style::default());

        let mut app = Self {
            title_input,
            app_id_input,
            focus: Focus::TitleInput, // Start with the title input focused
            lookup: LookupState::new(config.min_query_len, config.debounce_ms),
            should_quit: false,
            output: None,
        };
        app.update_focus_styles();
        app
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current title query text
    pub fn query(&self) -> &str {
        self.title_input.lines()[0].as_ref()
    }

    /// Get the current contents of the app id field
    pub fn app_id(&self) -> &str {
        self.app_id_input.lines()[0].as_ref()
    }

    /// Write the highlighted suggestion's app id into the app id field and
    /// drop the suggestion popup. Returns false when nothing is highlighted.
    pub fn apply_selected_suggestion(&mut self) -> bool {
        let Some(suggestion) = self.lookup.apply_selected() else {
            return false;
        };
        set_single_line(&mut self.app_id_input, &suggestion.app_id.to_string());
        true
    }

    /// Refresh input borders so the focused field stands out
    pub fn update_focus_styles(&mut self) {
        let (title_color, app_id_color) = match self.focus {
            Focus::TitleInput => (Color::Cyan, Color::DarkGray),
            Focus::AppIdInput => (Color::DarkGray, Color::Cyan),
        };

        self.title_input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Game Title ")
                .border_style(Style::default().fg(title_color)),
        );
        self.app_id_input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" App ID ")
                .border_style(Style::default().fg(app_id_color)),
        );
    }
}

/// Replace a single-line textarea's contents, leaving the cursor at the end
fn set_single_line(textarea: &mut TextArea<'static>, text: &str) {
    textarea.move_cursor(tui_textarea::CursorMove::End);
    while !textarea.lines()[0].is_empty() {
        textarea.delete_char();
    }
    textarea.insert_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Suggestion;

    fn test_app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_app_initialization() {
        let app = test_app();

        assert_eq!(app.focus, Focus::TitleInput);
        assert!(!app.should_quit);
        assert_eq!(app.query(), "");
        assert_eq!(app.app_id(), "");
        assert!(app.lookup.suggestions.is_empty());
        assert!(app.output.is_none());
    }

    #[test]
    fn test_apply_selected_suggestion_sets_field_and_clears_list() {
        let mut app = test_app();
        app.lookup.suggestions = vec![Suggestion {
            name: "Half-Life".to_string(),
            app_id: 70,
        }];
        app.lookup.selection.navigate_next(1);

        assert!(app.apply_selected_suggestion());
        assert_eq!(app.app_id(), "70");
        assert!(app.lookup.suggestions.is_empty());
        assert_eq!(app.lookup.selection.selected(), None);
    }

    #[test]
    fn test_apply_selected_suggestion_without_selection() {
        let mut app = test_app();
        app.lookup.suggestions = vec![Suggestion {
            name: "Portal".to_string(),
            app_id: 400,
        }];

        // No row highlighted: nothing happens
        assert!(!app.apply_selected_suggestion());
        assert_eq!(app.app_id(), "");
        assert_eq!(app.lookup.suggestions.len(), 1);
    }

    #[test]
    fn test_apply_overwrites_previous_app_id() {
        let mut app = test_app();

        app.lookup.suggestions = vec![Suggestion {
            name: "Half-Life".to_string(),
            app_id: 70,
        }];
        app.lookup.selection.navigate_next(1);
        assert!(app.apply_selected_suggestion());
        assert_eq!(app.app_id(), "70");

        app.lookup.suggestions = vec![Suggestion {
            name: "Portal 2".to_string(),
            app_id: 620,
        }];
        app.lookup.selection.navigate_next(1);
        assert!(app.apply_selected_suggestion());
        assert_eq!(app.app_id(), "620");
    }

    #[test]
    fn test_set_single_line_replaces_contents() {
        let mut textarea = TextArea::default();
        textarea.insert_str("stale text");

        set_single_line(&mut textarea, "440");
        assert_eq!(textarea.lines()[0], "440");
    }
}

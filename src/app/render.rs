//! UI layout and suggestion popup rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::App;
use crate::widgets::popup;

// Suggestion popup display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(1),    // headroom so the popup has space to draw
            Constraint::Length(3), // title input
            Constraint::Length(3), // app id field
            Constraint::Length(1), // key hint line
        ])
        .split(frame.area());

        let title_area = layout[1];
        let app_id_area = layout[2];
        let hint_area = layout[3];

        frame.render_widget(&self.title_input, title_area);
        frame.render_widget(&self.app_id_input, app_id_area);
        self.render_hint_line(frame, hint_area);

        // Popup last so it draws over everything else
        self.render_suggestion_popup(frame, title_area);
    }

    fn render_hint_line(&self, frame: &mut Frame, area: Rect) {
        let hint = Paragraph::new(" type a title | Up/Down select | Enter apply | Tab switch | Esc quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
    }

    /// Render the suggestion popup above the title input
    fn render_suggestion_popup(&self, frame: &mut Frame, input_area: Rect) {
        let suggestions = &self.lookup.suggestions;
        if suggestions.is_empty() {
            return;
        }

        // Calculate popup dimensions from the visible labels
        let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
        let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

        let max_label_width = suggestions
            .iter()
            .take(MAX_VISIBLE_SUGGESTIONS)
            .map(|s| s.label().width())
            .max()
            .unwrap_or(20)
            .min(MAX_POPUP_WIDTH);
        let popup_width = (max_label_width as u16) + POPUP_PADDING;

        let popup_area =
            popup::popup_above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);

        // Create list items with the highlighted row inverted
        let items: Vec<ListItem> = suggestions
            .iter()
            .take(MAX_VISIBLE_SUGGESTIONS)
            .enumerate()
            .map(|(i, suggestion)| {
                let label = suggestion.label();
                let line = if Some(i) == self.lookup.selection.selected() {
                    Line::from(Span::styled(
                        format!("> {label}"),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {label}"),
                        Style::default().fg(Color::White).bg(Color::Black),
                    ))
                };
                ListItem::new(line)
            })
            .collect();

        // Clear the background area to prevent transparency
        popup::clear_area(frame, popup_area);

        let title = if self.lookup.is_loading() {
            " Suggestions (fetching) "
        } else {
            " Suggestions "
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(list, popup_area);
    }
}

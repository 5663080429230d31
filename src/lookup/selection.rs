//! Selection state for the suggestion popup
//!
//! Tracks which suggestion row is highlighted, if any.

/// Selection state for suggestion navigation
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Currently highlighted row (None = no selection)
    selected_index: Option<usize>,
}

impl SelectionState {
    /// Create a new SelectionState with no selection
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Clear the current selection
    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    /// Get the currently highlighted row
    pub fn selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Move the highlight down one row, wrapping to the first row at the end
    pub fn navigate_next(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }

        self.selected_index = Some(match self.selected_index {
            Some(current) => (current + 1) % suggestion_count,
            None => 0,
        });
    }

    /// Move the highlight up one row, wrapping to the last row at the start
    pub fn navigate_previous(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }

        self.selected_index = Some(match self.selected_index {
            Some(0) | None => suggestion_count - 1,
            Some(current) => current - 1,
        });
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;

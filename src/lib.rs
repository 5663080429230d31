//! titlepick - interactive game title lookup with live suggestions
//!
//! Type a partial game title, pick a match from the live suggestion popup,
//! and the matching app id lands in the App ID field (and on stdout when you
//! confirm). Suggestions come from a title lookup endpoint that answers
//! `GET ?title=<partial>` with a JSON array of `{name, app_id}` records.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

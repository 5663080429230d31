use serde::Deserialize;

/// A single candidate match returned by the title lookup endpoint.
///
/// The endpoint may attach more fields per record; only `name` and `app_id`
/// matter here, so deserialization ignores the rest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    /// Display name of the game
    pub name: String,
    /// Steam-style application identifier
    pub app_id: u64,
}

impl Suggestion {
    /// Display label shown in the suggestion popup
    pub fn label(&self) -> String {
        format!("{} (App ID: {})", self.name, self.app_id)
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;

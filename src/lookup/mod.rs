//! Suggestion query handling
//!
//! Everything between a keystroke in the title input and the suggestion
//! popup: debouncing, the HTTP client for the title lookup endpoint, the
//! background worker thread, and the state that sequences requests so late
//! responses never clobber newer ones.

pub mod client;
pub mod debounce;
pub mod selection;
pub mod state;
pub mod suggestion;
pub mod worker;

// Re-export the main types
pub use client::{LookupError, TitleClient};
pub use selection::SelectionState;
pub use state::LookupState;
pub use suggestion::Suggestion;
pub use worker::{LookupRequest, LookupResponse};

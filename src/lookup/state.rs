//! Suggestion query handler state
//!
//! Owns the suggestion list, the debounce stage, and the request-id
//! sequencing that keeps late responses from clobbering newer ones. The
//! displayed list is always either empty or the full result set of the most
//! recently completed successful lookup: replacements are wholesale, never
//! incremental.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use super::client::TitleClient;
use super::debounce::Debouncer;
use super::selection::SelectionState;
use super::suggestion::Suggestion;
use super::worker::{self, LookupRequest, LookupResponse};

/// Suggestion query handler state
pub struct LookupState {
    /// Suggestions currently on display
    pub suggestions: Vec<Suggestion>,
    /// Which suggestion row is highlighted
    pub selection: SelectionState,
    /// Queries shorter than this clear the list and skip the network.
    /// Short prefixes match too many titles to be useful.
    pub min_query_len: usize,
    /// Debounce stage ahead of dispatch
    pub debouncer: Debouncer,
    /// Last query text seen, to skip no-op updates
    pub last_query: Option<String>,
    /// Current request ID, incremented for each dispatched request.
    /// Responses carrying any other ID are stale and dropped.
    pub request_id: u64,
    /// ID of the currently in-flight request, if any, for cancellation
    pub in_flight_request_id: Option<u64>,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<LookupRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<LookupResponse>>,
}

impl LookupState {
    /// Create a new LookupState with no worker attached
    pub fn new(min_query_len: usize, debounce_ms: u64) -> Self {
        Self {
            suggestions: Vec::new(),
            selection: SelectionState::new(),
            min_query_len,
            debouncer: Debouncer::new(debounce_ms),
            last_query: None,
            request_id: 0,
            in_flight_request_id: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Spawn the lookup worker thread and wire up the channels
    pub fn start_worker(&mut self, client: TitleClient) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();

        worker::spawn_worker(client, request_rx, response_tx);

        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// React to a change of the title input.
    ///
    /// Queries below the minimum length clear the list immediately and make
    /// no network call; everything else is handed to the debounce stage.
    pub fn on_query_changed(&mut self, query: &str) {
        if self.last_query.as_deref() == Some(query) {
            return;
        }
        self.last_query = Some(query.to_string());

        if query.chars().count() < self.min_query_len {
            self.debouncer.clear();
            self.cancel_in_flight();
            self.clear_suggestions();
            return;
        }

        self.debouncer.schedule(query.to_string());
    }

    /// Dispatch the debounced query once its quiet period has elapsed.
    ///
    /// Cancels the previous in-flight request and bumps the request ID so
    /// any late response from it is recognized as stale.
    pub fn dispatch_ready(&mut self, now: Instant) {
        let Some(title) = self.debouncer.take_ready(now) else {
            return;
        };

        self.cancel_in_flight();
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);

        if let Some(tx) = &self.request_tx {
            if tx
                .send(LookupRequest::Query {
                    title,
                    request_id: self.request_id,
                })
                .is_err()
            {
                log::error!("Lookup worker is gone; dropping request {}", self.request_id);
                self.in_flight_request_id = None;
            }
        }
    }

    /// Time until the next scheduled dispatch, to size event-loop timeouts
    pub fn time_until_dispatch(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_ready(now)
    }

    /// Drain worker responses and fold them into the displayed state
    pub fn drain_responses(&mut self) {
        let mut responses = Vec::new();
        if let Some(rx) = &self.response_rx {
            while let Ok(response) = rx.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.apply_response(response);
        }
    }

    /// Fold a single worker response into the displayed state.
    ///
    /// Results replace the list wholesale, in endpoint order. Failures leave
    /// the list exactly as it was and emit one diagnostic log entry - there
    /// is no user-visible error surface. Anything carrying a superseded
    /// request ID is dropped.
    pub fn apply_response(&mut self, response: LookupResponse) {
        match response {
            LookupResponse::Results {
                suggestions,
                request_id,
            } => {
                if self.in_flight_request_id != Some(request_id) {
                    log::debug!("Dropping stale result set for request {}", request_id);
                    return;
                }
                self.in_flight_request_id = None;
                self.suggestions = suggestions;
                self.selection.clear();
            }
            LookupResponse::Failed { error, request_id } => {
                if self.in_flight_request_id != Some(request_id) {
                    log::debug!("Dropping stale failure for request {}", request_id);
                    return;
                }
                self.in_flight_request_id = None;
                log::error!("Error fetching game titles: {}", error);
            }
            LookupResponse::Cancelled { request_id } => {
                log::debug!("Request {} cancelled", request_id);
            }
        }
    }

    /// Take the highlighted suggestion and clear the list.
    ///
    /// Returns None when nothing is highlighted.
    pub fn apply_selected(&mut self) -> Option<Suggestion> {
        let index = self.selection.selected()?;
        let suggestion = self.suggestions.get(index)?.clone();
        self.clear_suggestions();
        Some(suggestion)
    }

    /// Empty the suggestion list and drop the highlight
    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.selection.clear();
    }

    /// Send a Cancel for the in-flight request, if there is one
    fn cancel_in_flight(&mut self) {
        let Some(request_id) = self.in_flight_request_id.take() else {
            return;
        };
        if let Some(tx) = &self.request_tx {
            let _ = tx.send(LookupRequest::Cancel { request_id });
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

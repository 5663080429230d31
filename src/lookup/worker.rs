//! Lookup Worker Thread
//!
//! Runs title lookups on a background thread so typing never blocks on the
//! network. Receives requests via channel, calls the title lookup endpoint,
//! and sends the full result set (or the failure) back to the UI thread.

use std::sync::mpsc::{Receiver, Sender};

use super::client::{LookupError, TitleClient};
use super::suggestion::Suggestion;

/// Request messages sent to the lookup worker thread
#[derive(Debug)]
pub enum LookupRequest {
    /// Fetch suggestions for the given partial title
    Query {
        title: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel {
        /// ID of the request to cancel
        request_id: u64,
    },
}

/// Response messages received from the lookup worker thread
#[derive(Debug)]
pub enum LookupResponse {
    /// The endpoint answered with a full result set
    Results {
        suggestions: Vec<Suggestion>,
        /// Request ID this result set belongs to
        request_id: u64,
    },
    /// The request failed; the UI keeps whatever it was showing
    Failed {
        error: LookupError,
        /// Request ID this failure belongs to
        request_id: u64,
    },
    /// The request was cancelled before execution
    Cancelled {
        /// Request ID that was cancelled
        request_id: u64,
    },
}

/// Spawn the lookup worker thread
///
/// Creates a background thread that:
/// 1. Listens for requests on the request channel
/// 2. Calls the title lookup endpoint
/// 3. Sends results back via the response channel
pub fn spawn_worker(
    client: TitleClient,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: TitleClient,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            LookupRequest::Query { title, request_id } => {
                handle_query(&client, &title, request_id, &request_rx, &response_tx);
            }
            LookupRequest::Cancel { request_id } => {
                // Cancel received when no request is in-flight - just acknowledge
                let _ = response_tx.send(LookupResponse::Cancelled { request_id });
                log::debug!("Cancelled request {} (no active request)", request_id);
            }
        }
    }

    log::debug!("Lookup worker thread shutting down");
}

/// Handle a query request
///
/// A newer query may already be queued behind this one (the UI sends a
/// Cancel for the previous id before each new Query), so check for
/// cancellation first and skip the network call entirely when superseded.
fn handle_query(
    client: &TitleClient,
    title: &str,
    request_id: u64,
    request_rx: &Receiver<LookupRequest>,
    response_tx: &Sender<LookupResponse>,
) {
    if check_for_cancellation(request_rx, request_id, response_tx) {
        return;
    }

    match client.search(title) {
        Ok(suggestions) => {
            let _ = response_tx.send(LookupResponse::Results {
                suggestions,
                request_id,
            });
        }
        Err(error) => {
            let _ = response_tx.send(LookupResponse::Failed { error, request_id });
        }
    }
}

/// Check for cancellation requests queued ahead of a lookup
///
/// Uses try_recv() to non-blocking check for Cancel messages.
/// Returns true if the current request should be skipped.
fn check_for_cancellation(
    request_rx: &Receiver<LookupRequest>,
    current_request_id: u64,
    response_tx: &Sender<LookupResponse>,
) -> bool {
    use std::sync::mpsc::TryRecvError;

    loop {
        match request_rx.try_recv() {
            Ok(LookupRequest::Cancel { request_id }) => {
                if request_id == current_request_id {
                    // Cancel matches current request - skip it
                    let _ = response_tx.send(LookupResponse::Cancelled { request_id });
                    log::debug!("Cancelled request {} before execution", request_id);
                    return true;
                }
                // Cancel for a different request - ignore and continue
                log::debug!(
                    "Ignoring cancel for request {} (current: {})",
                    request_id,
                    current_request_id
                );
            }
            Ok(LookupRequest::Query { request_id, .. }) => {
                // The UI pairs every Query with a preceding Cancel, so a
                // Query here means the protocol was broken somewhere
                log::warn!("Request {} queued out of order - dropping it", request_id);
            }
            Err(TryRecvError::Empty) => {
                // No messages waiting - run the lookup
                return false;
            }
            Err(TryRecvError::Disconnected) => {
                // Channel closed - nothing to answer to
                return true;
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

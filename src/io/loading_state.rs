//! Shared in-progress flag for background loads.

/// Holds the state of a background loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
/// Wrapped in an `Arc<Mutex<>>` so the worker thread can clear it.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// True while the worker thread is running
    pub in_progress: bool,
}

impl LoadingState {
    /// Creates an idle loading state
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}

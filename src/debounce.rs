//! Debounced evaluation for search inputs

use gloo_timers::callback::Timeout;

/// Holds at most one pending evaluation. Scheduling a new one drops the
/// previous `Timeout`, which cancels it.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, pending: None }
    }

    pub fn schedule(&mut self, f: impl FnOnce() + 'static) {
        self.pending = Some(Timeout::new(self.delay_ms, f));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Live search only kicks in once the query is long enough
pub fn should_live_search(query: &str, min_chars: usize) -> bool {
    query.trim().chars().count() >= min_chars
}

//! Component state for the requests card.
//!
//! Rendering is a pure function of the props, so the only runtime data kept
//! here is how many approve/deny flows are still waiting on the backend.

/// Main state container for the `RequestsCard`.
pub struct RequestsCard {
    /// Dispatches started and not yet settled. Reflected as `aria-busy`;
    /// it does not block further clicks.
    pub pending_actions: usize,
}

impl RequestsCard {
    pub fn new() -> Self {
        Self { pending_actions: 0 }
    }
}

impl Default for RequestsCard {
    fn default() -> Self {
        Self::new()
    }
}

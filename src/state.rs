//! Responsibility
//! - shared context attached to the Router (AppState)
//! - Clone-able by design (fields, when they appear, are Arc/cheap-Clone)
//!
//! The demo handlers touch no shared state today; this is the seam where
//! process-level dependencies would be injected.

#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}

//! Shared application state for axum handlers.

use std::sync::Arc;

use roster_app::registry::Registry;

/// Application state shared across all axum handlers.
///
/// Cloning is cheap: only the inner [`Arc`] is cloned, never the registry
/// itself.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The in-memory device registry.
    pub registry: Arc<Registry>,
}

impl AppState {
    /// Create state owning a fresh, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state around an existing registry.
    ///
    /// The composition root constructs the registry first and hands it
    /// over here when assembling the router.
    #[must_use]
    pub fn from_registry(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

//! Application state for the web server.

use std::sync::Arc;

use bikeshare::Dashboard;

/// Shared application state.
///
/// The dashboard is immutable after loading, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    /// Create new application state.
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}

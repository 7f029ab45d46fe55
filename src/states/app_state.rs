use std::sync::Arc;

use crate::catalog::Catalog;

/// Read-only state shared by every connection. Sessions are not stored here;
/// each socket owns its own.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub event_buffer: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, event_buffer: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            event_buffer,
        }
    }
}

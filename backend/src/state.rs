//! Application state shared by every worker of the HTTP server.
//!
//! `AppState` is created once in `main.rs` and injected as `web::Data`. It
//! holds the two collaborators of the resource controller behind trait
//! objects, so tests can swap in an in-memory store or another generator.

use crate::generator::GeneratorService;
use crate::repository::DataPoolRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn DataPoolRepository>,
    pub generator: Arc<dyn GeneratorService>,
    /// Largest row count accepted by the generate endpoint.
    pub max_rows: usize,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn DataPoolRepository>,
        generator: Arc<dyn GeneratorService>,
        max_rows: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_rows,
        }
    }
}

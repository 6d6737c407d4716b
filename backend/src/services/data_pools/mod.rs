//! # DataPool Resource
//!
//! REST controller for managing data pools. Every handler delegates to the
//! `DataPoolRepository` and `GeneratorService` held in `AppState`.
//!
//! ## Sub-modules:
//! - `mapper`: Converts the generation request DTO into a `DataPoolRequest`.
//! - `generate`: Generates a pool from a request and stores it.
//! - `create`: Stores a new pool supplied by the client.
//! - `update`: Replaces an existing pool, or creates it when it has no id.
//! - `list`, `get`, `delete`: Read and remove pools by id.
//! - `download`: Serves a pool as a CSV file.

mod create;
mod delete;
mod download;
mod generate;
mod get;
mod list;
mod mapper;
mod update;


use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all data pool API endpoints.
pub const API_PATH: &str = "/api/data-pools";

/// Configures and returns the Actix `Scope` for all data pool routes.
///
/// # Registered Routes:
///
/// *   **`POST /generate`**: `generate::process`. Generates a pool from a
///     `DataPoolRequestDto` and stores it. `201 Created`.
/// *   **`POST /`**: `create::process`. Stores a new pool; `400` if it already has an id.
/// *   **`PUT /`**: `update::process`. Replaces a stored pool; falls back to create without id.
/// *   **`GET /`**: `list::process`. All stored pools.
/// *   **`GET /{id}`**: `get::process`. One pool, or `404`.
/// *   **`DELETE /{id}`**: `delete::process`. Always `200`, missing ids included.
/// *   **`GET /{id}/csv`**: `download::process`. The pool as a CSV attachment.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/generate", post().to(generate::process))
        .route("", post().to(create::process))
        .route("", put().to(update::process))
        .route("", get().to(list::process))
        .route("/{id}/csv", get().to(download::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", delete().to(delete::process))
}

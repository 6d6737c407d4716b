use crate::error::DataPoolError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::debug;

/// Actix web handler for `GET /api/data-pools/{id}`.
///
/// # Returns
/// - `200 OK` with the `DataPool` as JSON.
/// - `404 Not Found` when no pool has that id.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, DataPoolError> {
    let id = id.into_inner();
    debug!("REST request to get DataPool : {}", id);

    match state.repository.find_one(&id)? {
        Some(data_pool) => Ok(HttpResponse::Ok().json(data_pool)),
        None => Err(DataPoolError::NotFound(id)),
    }
}

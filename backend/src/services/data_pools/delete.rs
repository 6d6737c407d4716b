use crate::alerts::Alert;
use crate::error::DataPoolError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::debug;

/// Actix web handler for `DELETE /api/data-pools/{id}`.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, DataPoolError> {
    let id = id.into_inner();
    debug!("REST request to delete DataPool : {}", id);

    state.repository.delete(&id)?;

    let mut response = HttpResponse::Ok();
    Alert::deleted(&id).apply(&mut response);
    Ok(response.finish())
}

use crate::error::DataPoolError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::debug;

/// Actix web handler for `GET /api/data-pools`.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, DataPoolError> {
    debug!("REST request to get all DataPools");
    let data_pools = state.repository.find_all()?;
    Ok(HttpResponse::Ok().json(data_pools))
}

use crate::alerts::Alert;
use crate::error::DataPoolError;
use crate::services::data_pools::create::create_data_pool;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::data_pool::DataPool;
use log::debug;

/// Actix web handler for `PUT /api/data-pools`.
///
/// Replaces the stored pool with the payload. A payload without id is
/// handled exactly like `POST /api/data-pools`.
pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<DataPool>,
) -> Result<HttpResponse, DataPoolError> {
    let mut data_pool = payload.into_inner();
    debug!("REST request to update DataPool : {:?}", data_pool.id);

    if !data_pool.has_id() {
        data_pool.id = None;
        return create_data_pool(&state, data_pool);
    }
    let id = data_pool.id.clone().unwrap_or_default();

    let result = state.repository.save(data_pool)?;

    let mut response = HttpResponse::Ok();
    Alert::updated(&id).apply(&mut response);
    Ok(response.json(result))
}

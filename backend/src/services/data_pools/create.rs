use crate::alerts::Alert;
use crate::error::DataPoolError;
use crate::services::data_pools::API_PATH;
use crate::state::AppState;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use common::model::data_pool::DataPool;
use log::debug;

/// Actix web handler for `POST /api/data-pools`.
pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<DataPool>,
) -> Result<HttpResponse, DataPoolError> {
    let data_pool = payload.into_inner();
    debug!("REST request to save DataPool : {}", data_pool.name);
    create_data_pool(&state, data_pool)
}

/// Store a pool that has no id yet and answer `201 Created` with its location.
///
/// Shared by the create, generate and update (fallback) handlers.
pub fn create_data_pool(
    state: &AppState,
    mut data_pool: DataPool,
) -> Result<HttpResponse, DataPoolError> {
    if data_pool.has_id() {
        return Err(DataPoolError::invalid(
            "idexists",
            "A new dataPool cannot already have an ID",
        ));
    }
    data_pool.id = None;

    let result = state.repository.save(data_pool)?;
    let id = result
        .id
        .clone()
        .ok_or_else(|| DataPoolError::Internal("stored dataPool has no id".to_string()))?;

    let mut response = HttpResponse::Created();
    Alert::created(&id).apply(&mut response);
    Ok(response
        .insert_header((header::LOCATION, format!("{}/{}", API_PATH, id)))
        .json(result))
}

//! # DataPool Generation
//!
//! Backend logic for `POST /api/data-pools/generate`.
//!
//! 1.  **Mapping**: the `DataPoolRequestDto` payload is validated and turned
//!     into a `DataPoolRequest` by `mapper::to_request`.
//! 2.  **Generation**: the request runs through the shared `GeneratorService`
//!     on the blocking pool, since large requests are CPU bound.
//! 3.  **Persistence**: the resulting pool goes through the same path as a
//!     client-supplied pool (`create::create_data_pool`).

use crate::error::DataPoolError;
use crate::generator::generate_pool;
use crate::services::data_pools::create::create_data_pool;
use crate::services::data_pools::mapper;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::DataPoolRequestDto;
use log::debug;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<DataPoolRequestDto>,
) -> Result<HttpResponse, DataPoolError> {
    let dto = payload.into_inner();
    debug!("REST request to generate DataPool : {:?}", dto);

    let request = mapper::to_request(dto, state.max_rows)?;
    let generator = state.generator.clone();
    let data_pool = web::block(move || generate_pool(generator.as_ref(), request)).await??;

    create_data_pool(&state, data_pool)
}

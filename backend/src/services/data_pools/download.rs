use crate::error::DataPoolError;
use crate::state::AppState;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use common::model::data_pool::DataPool;
use log::debug;

/// Actix web handler for `GET /api/data-pools/{id}/csv`.
///
/// Serves the pool as `text/csv`: a header line with the column titles
/// followed by one record per row.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, DataPoolError> {
    let id = id.into_inner();
    debug!("REST request to download DataPool : {}", id);

    let data_pool = state
        .repository
        .find_one(&id)?
        .ok_or_else(|| DataPoolError::NotFound(id.clone()))?;

    let body = to_csv(&data_pool)?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file_name(&data_pool, &id))],
        })
        .body(body))
}

pub(crate) fn to_csv(data_pool: &DataPool) -> Result<Vec<u8>, DataPoolError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(data_pool.data_types.is_empty())
        .from_writer(Vec::new());

    if !data_pool.data_types.is_empty() {
        writer.write_record(data_pool.headers())?;
    }
    for row in &data_pool.rows {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| DataPoolError::Internal(e.to_string()))
}

/// Pool name reduced to a safe file name, falling back to the id.
fn file_name(data_pool: &DataPool, id: &str) -> String {
    let stem: String = data_pool
        .name
        .trim()
        .chars()
        .map(|ch| if ch.is_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
        .collect();
    if stem.trim_matches('_').is_empty() {
        format!("{}.csv", id)
    } else {
        format!("{}.csv", stem)
    }
}

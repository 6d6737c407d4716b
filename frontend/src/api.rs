//! Thin client for the backend REST API.
//!
//! Every call resolves to `Result<T, String>`; the error string is the
//! server's `message` field when the response carries one.

use common::model::data_pool::DataPool;
use common::model::data_type::DataTypeInfo;
use common::requests::DataPoolRequestDto;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const DATA_POOLS_PATH: &str = "/api/data-pools";
const DATA_TYPES_PATH: &str = "/api/data-types";

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub fn csv_url(id: &str) -> String {
    format!("{}/{}/csv", DATA_POOLS_PATH, id)
}

pub async fn fetch_pools() -> Result<Vec<DataPool>, String> {
    let response = Request::get(DATA_POOLS_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn fetch_pool(id: &str) -> Result<DataPool, String> {
    let response = Request::get(&format!("{}/{}", DATA_POOLS_PATH, id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn fetch_catalogue() -> Result<Vec<DataTypeInfo>, String> {
    let response = Request::get(DATA_TYPES_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn generate(request: &DataPoolRequestDto) -> Result<DataPool, String> {
    let response = Request::post(&format!("{}/generate", DATA_POOLS_PATH))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn delete(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/{}", DATA_POOLS_PATH, id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_message(response).await)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("Request failed with status {}", status),
    }
}

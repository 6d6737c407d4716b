use crate::model::data_type::DataType;
use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/data-pools/generate`.
///
/// `count` is signed so that zero and negative counts can be rejected with a
/// proper message instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoolRequestDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data_types: Vec<DataType>,
    pub count: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

//! # Generator Service
//!
//! Produces synthetic string values from `DataType` descriptors.
//!
//! `GeneratorService` is the seam the resource controller depends on; the
//! shipped strategy is [`faker::FakerGenerator`]. Kinds, their aliases and
//! parameters live in [`kind`].

pub mod dictionary;
pub mod error;
pub mod faker;
pub mod kind;
mod pattern;

use common::model::data_pool::DataPool;
use common::model::data_type::DataType;
pub use error::GeneratorError;

/// Contract for synthetic value generation.
///
/// Only [`GeneratorService::generate_rows_seeded`] is required; the other
/// operations are expressed through it so that every implementation keeps the
/// same shaping guarantees.
pub trait GeneratorService: Send + Sync {
    /// Generate `n` rows, each aligned with `data_types`, using `seed` as the
    /// source of randomness. The same seed and descriptors yield the same table.
    fn generate_rows_seeded(
        &self,
        data_types: &[DataType],
        n: usize,
        seed: u64,
    ) -> Result<Vec<Vec<String>>, GeneratorError>;

    /// Generate one value for `data_type`.
    fn generate_value(&self, data_type: &DataType) -> Result<String, GeneratorError> {
        let mut values = self.generate_values(data_type, 1)?;
        values.pop().ok_or_else(|| {
            GeneratorError::invalid(&data_type.kind, "count", "generator returned no value")
        })
    }

    /// Generate exactly `n` independent values for `data_type`.
    fn generate_values(&self, data_type: &DataType, n: usize) -> Result<Vec<String>, GeneratorError> {
        let rows = self.generate_rows(std::slice::from_ref(data_type), n)?;
        Ok(rows.into_iter().flatten().collect())
    }

    /// Generate `n` rows of `data_types.len()` values, column order preserved.
    fn generate_rows(
        &self,
        data_types: &[DataType],
        n: usize,
    ) -> Result<Vec<Vec<String>>, GeneratorError> {
        self.generate_rows_seeded(data_types, n, rand::random())
    }
}

/// The domain form of a generation request, produced by the request mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoolRequest {
    pub name: String,
    pub data_types: Vec<DataType>,
    pub count: usize,
    pub seed: Option<u64>,
}

/// Run a request through `generator` and shape the result as an unsaved pool.
pub fn generate_pool(
    generator: &dyn GeneratorService,
    request: DataPoolRequest,
) -> Result<DataPool, GeneratorError> {
    let rows = match request.seed {
        Some(seed) => generator.generate_rows_seeded(&request.data_types, request.count, seed)?,
        None => generator.generate_rows(&request.data_types, request.count)?,
    };

    Ok(DataPool {
        id: None,
        name: request.name,
        data_types: request.data_types,
        rows,
    })
}

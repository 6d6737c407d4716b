//! # DataPool Store
//!
//! Persistence seam of the resource controller. The controller only needs the
//! four capabilities below, so it stays independent of the storage engine.

mod sqlite;

pub use sqlite::SqliteDataPoolRepository;

use crate::error::DataPoolError;
use common::model::data_pool::DataPool;

pub trait DataPoolRepository: Send + Sync {
    /// Insert or replace `pool`. A pool without an id receives a fresh one.
    /// Returns the stored pool, id included.
    fn save(&self, pool: DataPool) -> Result<DataPool, DataPoolError>;

    /// Every stored pool, oldest first.
    fn find_all(&self) -> Result<Vec<DataPool>, DataPoolError>;

    fn find_one(&self, id: &str) -> Result<Option<DataPool>, DataPoolError>;

    /// Remove the pool with `id`. Deleting a missing id is not an error.
    fn delete(&self, id: &str) -> Result<(), DataPoolError>;
}

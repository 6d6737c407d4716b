//! SQLite implementation of `DataPoolRepository`.
//!
//! One table, `data_pools`. Column descriptors and rows are stored as JSON
//! text; the pool is always read and written as a whole, matching the
//! full-replacement update semantics of the resource.

use crate::error::DataPoolError;
use crate::repository::DataPoolRepository;
use common::model::data_pool::DataPool;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS data_pools (
    id           TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    data_types   TEXT NOT NULL,
    rows_json    TEXT NOT NULL,
    created_at   INTEGER NOT NULL,
    updated_at   INTEGER NOT NULL
);";

/// `rusqlite::Connection` is not `Sync`; the mutex serialises access so one
/// connection can be shared by all server workers.
pub struct SqliteDataPoolRepository {
    conn: Mutex<Connection>,
}

type RawPool = (String, String, String, String);

impl SqliteDataPoolRepository {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DataPoolError> {
        let path = path.as_ref();
        debug!("Opening data pool store at {}", path.display());
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, DataPoolError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, DataPoolError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DataPoolError> {
        self.conn
            .lock()
            .map_err(|_| DataPoolError::Internal("data pool store lock poisoned".to_string()))
    }

    fn decode((id, name, data_types, rows): RawPool) -> Result<DataPool, DataPoolError> {
        Ok(DataPool {
            id: Some(id),
            name,
            data_types: serde_json::from_str(&data_types)?,
            rows: serde_json::from_str(&rows)?,
        })
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

impl DataPoolRepository for SqliteDataPoolRepository {
    fn save(&self, mut pool: DataPool) -> Result<DataPool, DataPoolError> {
        if let Some(row) = pool.first_misaligned_row() {
            return Err(DataPoolError::invalid(
                "misaligned",
                format!(
                    "Row {} does not have {} values",
                    row,
                    pool.data_types.len()
                ),
            ));
        }

        let id = match &pool.id {
            Some(id) if pool.has_id() => id.clone(),
            _ => Uuid::new_v4().to_string(),
        };
        let data_types = serde_json::to_string(&pool.data_types)?;
        let rows = serde_json::to_string(&pool.rows)?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO data_pools (id, name, data_types, rows_json, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                data_types = excluded.data_types,
                rows_json = excluded.rows_json,
                updated_at = excluded.updated_at",
            params![&id, &pool.name, &data_types, &rows, now_millis()],
        )?;

        pool.id = Some(id);
        Ok(pool)
    }

    fn find_all(&self) -> Result<Vec<DataPool>, DataPoolError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, data_types, rows_json FROM data_pools ORDER BY created_at, id",
        )?;
        let raw = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)))?
            .collect::<Result<Vec<RawPool>, _>>()?;

        raw.into_iter().map(Self::decode).collect()
    }

    fn find_one(&self, id: &str) -> Result<Option<DataPool>, DataPoolError> {
        let conn = self.lock()?;
        let raw: Option<RawPool> = conn
            .query_row(
                "SELECT id, name, data_types, rows_json FROM data_pools WHERE id = ?1",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()?;

        raw.map(Self::decode).transpose()
    }

    fn delete(&self, id: &str) -> Result<(), DataPoolError> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM data_pools WHERE id = ?1", params![id])?;
        if removed == 0 {
            debug!("Delete of unknown DataPool {} ignored", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::data_type::DataType;

    fn sample_pool() -> DataPool {
        DataPool {
            id: None,
            name: "customers".to_string(),
            data_types: vec![DataType::new("first_name"), DataType::new("city").named("home")],
            rows: vec![
                vec!["Ana".to_string(), "Lima".to_string()],
                vec!["Luis".to_string(), "Madrid".to_string()],
            ],
        }
    }

    #[test]
    fn save_assigns_id_and_round_trips() {
        let repository = SqliteDataPoolRepository::open_in_memory().unwrap();

        let saved = repository.save(sample_pool()).unwrap();
        let id = saved.id.clone().unwrap();
        assert!(Uuid::parse_str(&id).is_ok());

        let found = repository.find_one(&id).unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.data_types[1].title(), "home");
    }

    #[test]
    fn save_with_id_replaces_whole_pool() {
        let repository = SqliteDataPoolRepository::open_in_memory().unwrap();
        let mut saved = repository.save(sample_pool()).unwrap();

        saved.name = "renamed".to_string();
        saved.rows.truncate(1);
        let updated = repository.save(saved.clone()).unwrap();
        assert_eq!(updated, saved);

        let all = repository.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "renamed");
        assert_eq!(all[0].rows.len(), 1);
    }

    #[test]
    fn save_with_unknown_id_inserts() {
        let repository = SqliteDataPoolRepository::open_in_memory().unwrap();
        let mut pool = sample_pool();
        pool.id = Some("fixed-id".to_string());

        repository.save(pool).unwrap();
        assert!(repository.find_one("fixed-id").unwrap().is_some());
    }

    #[test]
    fn find_all_keeps_insertion_order() {
        let repository = SqliteDataPoolRepository::open_in_memory().unwrap();
        let first = repository.save(sample_pool()).unwrap();
        let second = repository.save(sample_pool()).unwrap();

        let ids: Vec<_> = repository
            .find_all()
            .unwrap()
            .into_iter()
            .map(|pool| pool.id)
            .collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&first.id));
        assert!(ids.contains(&second.id));
    }

    #[test]
    fn find_one_missing_is_none() {
        let repository = SqliteDataPoolRepository::open_in_memory().unwrap();
        assert_eq!(repository.find_one("missing").unwrap(), None);
    }

    #[test]
    fn delete_is_silent_for_missing_ids() {
        let repository = SqliteDataPoolRepository::open_in_memory().unwrap();
        let saved = repository.save(sample_pool()).unwrap();
        let id = saved.id.unwrap();

        repository.delete("missing").unwrap();
        repository.delete(&id).unwrap();
        repository.delete(&id).unwrap();
        assert!(repository.find_one(&id).unwrap().is_none());
    }

    #[test]
    fn misaligned_rows_are_rejected() {
        let repository = SqliteDataPoolRepository::open_in_memory().unwrap();
        let mut pool = sample_pool();
        pool.rows.push(vec!["only one".to_string()]);

        match repository.save(pool) {
            Err(DataPoolError::InvalidRequest { key, .. }) => assert_eq!(key, "misaligned"),
            other => panic!("expected misaligned rejection, got {other:?}"),
        }
        assert!(repository.find_all().unwrap().is_empty());
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pools.sqlite");

        let id = {
            let repository = SqliteDataPoolRepository::open(&path).unwrap();
            repository.save(sample_pool()).unwrap().id.unwrap()
        };

        let reopened = SqliteDataPoolRepository::open(&path).unwrap();
        let pool = reopened.find_one(&id).unwrap().unwrap();
        assert_eq!(pool.rows, sample_pool().rows);
    }
}

use crate::model::data_type::DataType;
use serde::{Deserialize, Serialize};

/// A table of generated values.
///
/// `id` is `None` until the pool is stored for the first time. Each entry of
/// `rows` is aligned with `data_types`: value `i` of a row was produced by
/// `data_types[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DataPool {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data_types: Vec<DataType>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl DataPool {
    /// Whether the pool carries a usable id. Blank ids count as absent.
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    pub fn headers(&self) -> Vec<&str> {
        self.data_types.iter().map(DataType::title).collect()
    }

    /// Index of the first row whose width differs from the column count.
    /// Pools without declared data types are not checked.
    pub fn first_misaligned_row(&self) -> Option<usize> {
        if self.data_types.is_empty() {
            return None;
        }
        let width = self.data_types.len();
        self.rows.iter().position(|row| row.len() != width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_misaligned_rows() {
        let mut pool = DataPool {
            data_types: vec![DataType::new("first_name"), DataType::new("city")],
            rows: vec![vec!["Ana".into(), "Lima".into()]],
            ..Default::default()
        };
        assert_eq!(pool.first_misaligned_row(), None);

        pool.rows.push(vec!["Luis".into()]);
        assert_eq!(pool.first_misaligned_row(), Some(1));
    }

    #[test]
    fn blank_ids_are_absent() {
        let mut pool = DataPool::default();
        assert!(!pool.has_id());
        pool.id = Some("  ".into());
        assert!(!pool.has_id());
        pool.id = Some("abc".into());
        assert!(pool.has_id());
    }

    #[test]
    fn untyped_pools_are_not_checked() {
        let pool = DataPool {
            rows: vec![vec!["a".into()], vec!["b".into(), "c".into()]],
            ..Default::default()
        };
        assert_eq!(pool.first_misaligned_row(), None);
    }
}

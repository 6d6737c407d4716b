use crate::generator::error::GeneratorError;
use crate::generator::kind::ColumnGenerator;
use crate::generator::GeneratorService;
use common::model::data_type::DataType;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Dictionary and range based generator.
///
/// Every row draws from its own `StdRng`, seeded from the request seed and the
/// row index, so rows can be produced in parallel and still come out the same
/// for a given seed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakerGenerator;

impl FakerGenerator {
    pub fn new() -> Self {
        FakerGenerator
    }
}

/// Spread row indices across the seed space.
fn row_seed(seed: u64, index: u64) -> u64 {
    seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
}

impl GeneratorService for FakerGenerator {
    fn generate_rows_seeded(
        &self,
        data_types: &[DataType],
        n: usize,
        seed: u64,
    ) -> Result<Vec<Vec<String>>, GeneratorError> {
        // Resolve every column before producing anything so a bad descriptor
        // never yields a partial table.
        let columns = data_types
            .iter()
            .map(ColumnGenerator::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        let rows: Vec<Vec<String>> = (0..n as u64)
            .into_par_iter()
            .map(|index| {
                let mut rng = StdRng::seed_from_u64(row_seed(seed, index));
                columns
                    .iter()
                    .map(|column| column.generate(&mut rng, index))
                    .collect::<Vec<String>>()
            })
            .collect();

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_pool, DataPoolRequest};

    fn person_columns() -> Vec<DataType> {
        vec![
            DataType::new("first_name"),
            DataType::new("integer").with_param("min", "18").with_param("max", "80"),
            DataType::new("sequence").named("row"),
            DataType::new("email").with_param("domain", "example.com"),
        ]
    }

    #[test]
    fn test_rows_are_aligned_with_data_types() {
        let rows = FakerGenerator.generate_rows(&person_columns(), 25).unwrap();

        assert_eq!(rows.len(), 25);
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), 4);
            let age: i64 = row[1].parse().unwrap();
            assert!((18..=80).contains(&age));
            assert_eq!(row[2], (index + 1).to_string());
            assert!(row[3].ends_with("@example.com"));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let first = FakerGenerator.generate_rows_seeded(&person_columns(), 50, 42).unwrap();
        let second = FakerGenerator.generate_rows_seeded(&person_columns(), 50, 42).unwrap();
        let other = FakerGenerator.generate_rows_seeded(&person_columns(), 50, 43).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_generate_values_length() {
        let values = FakerGenerator.generate_values(&DataType::new("city"), 7).unwrap();
        assert_eq!(values.len(), 7);
        assert!(values.iter().all(|v| !v.is_empty()));

        assert!(FakerGenerator.generate_values(&DataType::new("city"), 0).unwrap().is_empty());
    }

    #[test]
    fn test_generate_single_value() {
        let value = FakerGenerator.generate_value(&DataType::new("uuid")).unwrap();
        assert!(uuid::Uuid::parse_str(&value).is_ok());
    }

    #[test]
    fn test_unsupported_kind_fails_whole_batch() {
        let data_types = vec![DataType::new("city"), DataType::new("favourite_colour")];
        let result = FakerGenerator.generate_rows(&data_types, 3);
        assert_eq!(
            result,
            Err(GeneratorError::UnsupportedDataType("favourite_colour".to_string()))
        );
        assert!(FakerGenerator.generate_value(&DataType::new("nope")).is_err());
    }

    #[test]
    fn test_name_example() {
        let rows = FakerGenerator.generate_rows(&[DataType::new("name")], 3).unwrap();
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.len(), 1);
            assert_eq!(row[0].split(' ').count(), 2);
        }
    }

    #[test]
    fn test_generate_pool_uses_request_seed() {
        let request = DataPoolRequest {
            name: "people".to_string(),
            data_types: person_columns(),
            count: 10,
            seed: Some(7),
        };
        let first = generate_pool(&FakerGenerator, request.clone()).unwrap();
        let second = generate_pool(&FakerGenerator, request).unwrap();

        assert_eq!(first.id, None);
        assert_eq!(first.name, "people");
        assert_eq!(first.data_types, person_columns());
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first, second);
    }
}

use crate::error::DataPoolError;
use crate::generator::DataPoolRequest;
use common::requests::DataPoolRequestDto;

const DEFAULT_NAME: &str = "Generated data pool";

/// Validate a generation request and convert it to its domain form.
///
/// Rejects requests without data types and counts outside `1..=max_rows`.
pub fn to_request(
    dto: DataPoolRequestDto,
    max_rows: usize,
) -> Result<DataPoolRequest, DataPoolError> {
    if dto.data_types.is_empty() {
        return Err(DataPoolError::invalid(
            "nodatatypes",
            "A data pool request needs at least one data type",
        ));
    }
    if dto.count <= 0 {
        return Err(DataPoolError::invalid(
            "invalidcount",
            format!("Row count must be positive, got {}", dto.count),
        ));
    }
    let count = usize::try_from(dto.count).unwrap_or(usize::MAX);
    if count > max_rows {
        return Err(DataPoolError::invalid(
            "invalidcount",
            format!("Row count {} exceeds the limit of {}", count, max_rows),
        ));
    }

    let name = dto
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    Ok(DataPoolRequest {
        name,
        data_types: dto.data_types,
        count,
        seed: dto.seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::data_type::DataType;

    fn dto(data_types: Vec<DataType>, count: i64) -> DataPoolRequestDto {
        DataPoolRequestDto {
            name: None,
            data_types,
            count,
            seed: None,
        }
    }

    fn rejection_key(result: Result<DataPoolRequest, DataPoolError>) -> &'static str {
        match result {
            Err(DataPoolError::InvalidRequest { key, .. }) => key,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn maps_valid_request() {
        let mut input = dto(vec![DataType::new("name")], 3);
        input.name = Some("  people ".to_string());
        input.seed = Some(9);

        let request = to_request(input, 100).unwrap();
        assert_eq!(request.name, "people");
        assert_eq!(request.count, 3);
        assert_eq!(request.seed, Some(9));
        assert_eq!(request.data_types, vec![DataType::new("name")]);
    }

    #[test]
    fn blank_name_gets_default() {
        let mut input = dto(vec![DataType::new("name")], 1);
        input.name = Some("   ".to_string());
        assert_eq!(to_request(input, 10).unwrap().name, DEFAULT_NAME);
    }

    #[test]
    fn rejects_missing_data_types() {
        assert_eq!(rejection_key(to_request(dto(vec![], 3), 10)), "nodatatypes");
    }

    #[test]
    fn rejects_non_positive_and_oversized_counts() {
        let types = vec![DataType::new("city")];
        assert_eq!(rejection_key(to_request(dto(types.clone(), 0), 10)), "invalidcount");
        assert_eq!(rejection_key(to_request(dto(types.clone(), -4), 10)), "invalidcount");
        assert_eq!(rejection_key(to_request(dto(types.clone(), 11), 10)), "invalidcount");
        assert!(to_request(dto(types, 10), 10).is_ok());
    }
}

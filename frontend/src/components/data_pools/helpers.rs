//! Form parsing helpers. Kept free of browser APIs so they can be unit tested.

use crate::components::data_pools::state::ColumnDraft;
use common::model::data_type::DataType;
use common::requests::DataPoolRequestDto;
use std::collections::BTreeMap;

/// Number of rows rendered in the preview table.
pub const PREVIEW_ROWS: usize = 50;

/// Parse `key=value; key=value`. Blank segments are skipped.
pub fn parse_params(raw: &str) -> Result<BTreeMap<String, String>, String> {
    let mut params = BTreeMap::new();
    for segment in raw.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (key, value) = segment
            .split_once('=')
            .ok_or_else(|| format!("Parameter '{}' must look like key=value", segment))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("Parameter '{}' has no name", segment));
        }
        params.insert(key.to_string(), value.trim().to_string());
    }
    Ok(params)
}

/// Build the generation request from the raw form fields.
pub fn build_request(
    name: &str,
    count: &str,
    seed: &str,
    columns: &[ColumnDraft],
) -> Result<DataPoolRequestDto, String> {
    let count: i64 = count
        .trim()
        .parse()
        .map_err(|_| format!("Row count '{}' is not a number", count.trim()))?;

    let seed = match seed.trim() {
        "" => None,
        raw => Some(
            raw.parse::<u64>()
                .map_err(|_| format!("Seed '{}' is not a positive integer", raw))?,
        ),
    };

    let data_types = columns
        .iter()
        .map(|column| {
            let name = column.name.trim();
            Ok(DataType {
                kind: column.kind.clone(),
                name: (!name.is_empty()).then(|| name.to_string()),
                params: parse_params(&column.params)?,
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    let name = name.trim();
    Ok(DataPoolRequestDto {
        name: (!name.is_empty()).then(|| name.to_string()),
        data_types,
        count,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_params() {
        let params = parse_params("min=1; max = 6 ;; values=a,b").unwrap();
        assert_eq!(params.get("min").map(String::as_str), Some("1"));
        assert_eq!(params.get("max").map(String::as_str), Some("6"));
        assert_eq!(params.get("values").map(String::as_str), Some("a,b"));
        assert!(parse_params("").unwrap().is_empty());
        assert!(parse_params("oops").is_err());
        assert!(parse_params("=3").is_err());
    }

    #[test]
    fn builds_request_from_form() {
        let mut column = ColumnDraft::new("integer");
        column.name = " age ".to_string();
        column.params = "min=18; max=80".to_string();

        let request = build_request("people", " 25 ", "", &[column, ColumnDraft::new("city")]).unwrap();
        assert_eq!(request.name.as_deref(), Some("people"));
        assert_eq!(request.count, 25);
        assert_eq!(request.seed, None);
        assert_eq!(request.data_types.len(), 2);
        assert_eq!(request.data_types[0].title(), "age");
        assert_eq!(request.data_types[0].param("max"), Some("80"));
        assert_eq!(request.data_types[1].name, None);
    }

    #[test]
    fn rejects_bad_numbers() {
        let columns = [ColumnDraft::new("city")];
        assert!(build_request("", "ten", "", &columns).is_err());
        assert!(build_request("", "3", "-1", &columns).is_err());
        assert_eq!(build_request("", "3", "7", &columns).unwrap().seed, Some(7));
    }
}

//! Supported data kinds and their resolution from a `DataType` descriptor.
//!
//! `KINDS` is the single catalogue: it drives kind lookup (names and aliases),
//! and the `GET /api/data-types` listing. `ColumnGenerator::resolve` turns a
//! descriptor into a generator with validated parameters, so evaluation never
//! fails once a column has been resolved.

use crate::generator::dictionary::*;
use crate::generator::error::GeneratorError;
use crate::generator::pattern::{
    fill_digits, generate_pattern, rand_widths, random_uuid, MAX_RAND_DIGITS,
};
use chrono::{Days, NaiveDate};
use common::model::data_type::{DataType, DataTypeInfo, ParamInfo};
use rand::Rng;
use std::fmt::{Display, Write};
use std::str::FromStr;

/// Upper bound for `sentence.words`.
const MAX_SENTENCE_WORDS: usize = 64;

/// Decimal bounds beyond this lose their fractional digits in an `f64`.
const MAX_DECIMAL_MAGNITUDE: f64 = 1e15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    FirstName,
    LastName,
    FullName,
    Email,
    Username,
    PhoneNumber,
    StreetAddress,
    City,
    Country,
    Company,
    Word,
    Sentence,
    Integer,
    Decimal,
    Boolean,
    Date,
    Uuid,
    OneOf,
    Sequence,
    Pattern,
}

/// (name, required, default, description)
pub type ParamSpec = (&'static str, bool, Option<&'static str>, &'static str);

pub struct KindSpec {
    pub kind: DataKind,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

pub const KINDS: &[KindSpec] = &[
    KindSpec {
        kind: DataKind::FirstName,
        name: "first_name",
        aliases: &[],
        description: "A given name",
        params: &[],
    },
    KindSpec {
        kind: DataKind::LastName,
        name: "last_name",
        aliases: &["surname"],
        description: "A family name",
        params: &[],
    },
    KindSpec {
        kind: DataKind::FullName,
        name: "name",
        aliases: &["full_name"],
        description: "Given name followed by family name",
        params: &[],
    },
    KindSpec {
        kind: DataKind::Email,
        name: "email",
        aliases: &[],
        description: "Lower-case e-mail address built from a random name",
        params: &[("domain", false, None, "Mail domain, random test domain when absent")],
    },
    KindSpec {
        kind: DataKind::Username,
        name: "username",
        aliases: &[],
        description: "Lower-case user handle",
        params: &[],
    },
    KindSpec {
        kind: DataKind::PhoneNumber,
        name: "phone_number",
        aliases: &["phone"],
        description: "Phone number, every '#' in the pattern becomes a digit",
        params: &[("pattern", false, Some("###-###-####"), "Digit template")],
    },
    KindSpec {
        kind: DataKind::StreetAddress,
        name: "street_address",
        aliases: &["address"],
        description: "House number, street name and suffix",
        params: &[],
    },
    KindSpec {
        kind: DataKind::City,
        name: "city",
        aliases: &[],
        description: "City name",
        params: &[],
    },
    KindSpec {
        kind: DataKind::Country,
        name: "country",
        aliases: &[],
        description: "Country name",
        params: &[],
    },
    KindSpec {
        kind: DataKind::Company,
        name: "company",
        aliases: &[],
        description: "Company name",
        params: &[],
    },
    KindSpec {
        kind: DataKind::Word,
        name: "word",
        aliases: &[],
        description: "Single lower-case word",
        params: &[],
    },
    KindSpec {
        kind: DataKind::Sentence,
        name: "sentence",
        aliases: &["text"],
        description: "Capitalised sentence ending with a period",
        params: &[("words", false, Some("6"), "Number of words (1-64)")],
    },
    KindSpec {
        kind: DataKind::Integer,
        name: "integer",
        aliases: &["number", "int"],
        description: "Integer in the inclusive range [min, max]",
        params: &[
            ("min", false, Some("0"), "Lower bound"),
            ("max", false, Some("1000"), "Upper bound"),
        ],
    },
    KindSpec {
        kind: DataKind::Decimal,
        name: "decimal",
        aliases: &["float"],
        description: "Fixed-point number in [min, max]",
        params: &[
            ("min", false, Some("0"), "Lower bound, at most 1e15 in magnitude"),
            ("max", false, Some("1000"), "Upper bound, at most 1e15 in magnitude"),
            ("scale", false, Some("2"), "Digits after the decimal point (0-10)"),
        ],
    },
    KindSpec {
        kind: DataKind::Boolean,
        name: "boolean",
        aliases: &["bool"],
        description: "true or false",
        params: &[("true_weight", false, Some("0.5"), "Probability of true, 0 to 1")],
    },
    KindSpec {
        kind: DataKind::Date,
        name: "date",
        aliases: &[],
        description: "Calendar date in the inclusive range [start, end]",
        params: &[
            ("start", false, Some("1970-01-01"), "First date, YYYY-MM-DD"),
            ("end", false, Some("2030-12-31"), "Last date, YYYY-MM-DD"),
            ("format", false, Some("%Y-%m-%d"), "strftime output format"),
        ],
    },
    KindSpec {
        kind: DataKind::Uuid,
        name: "uuid",
        aliases: &[],
        description: "Random UUID v4",
        params: &[],
    },
    KindSpec {
        kind: DataKind::OneOf,
        name: "one_of",
        aliases: &["enum"],
        description: "One of a fixed list of values",
        params: &[("values", true, None, "Comma separated candidates")],
    },
    KindSpec {
        kind: DataKind::Sequence,
        name: "sequence",
        aliases: &["sequential"],
        description: "start + row index",
        params: &[("start", false, Some("1"), "First value")],
    },
    KindSpec {
        kind: DataKind::Pattern,
        name: "pattern",
        aliases: &[],
        description: "Template with {index}, {uuid} and {rand:N} placeholders",
        params: &[("pattern", true, None, "The template, {rand:N} up to 64 digits")],
    },
];

impl FromStr for DataKind {
    type Err = GeneratorError;

    /// Case-insensitive; `-` and spaces are read as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        KINDS
            .iter()
            .find(|spec| spec.name == normalized || spec.aliases.contains(&normalized.as_str()))
            .map(|spec| spec.kind)
            .ok_or_else(|| GeneratorError::UnsupportedDataType(s.to_string()))
    }
}

/// Catalogue in the shape served to clients.
pub fn catalogue() -> Vec<DataTypeInfo> {
    KINDS
        .iter()
        .map(|spec| DataTypeInfo {
            kind: spec.name.to_string(),
            aliases: spec.aliases.iter().map(|a| a.to_string()).collect(),
            description: spec.description.to_string(),
            params: spec
                .params
                .iter()
                .map(|(name, required, default, description)| ParamInfo {
                    name: name.to_string(),
                    required: *required,
                    default: default.map(str::to_string),
                    description: description.to_string(),
                })
                .collect(),
        })
        .collect()
}

/// A `DataType` with its kind recognised and its parameters validated.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ColumnGenerator {
    FirstName,
    LastName,
    FullName,
    Email { domain: Option<String> },
    Username,
    PhoneNumber { pattern: String },
    StreetAddress,
    City,
    Country,
    Company,
    Word,
    Sentence { words: usize },
    Integer { min: i64, max: i64 },
    Decimal { min: f64, max: f64, scale: usize },
    Boolean { true_weight: f64 },
    Date { start: NaiveDate, span_days: u64, format: String },
    Uuid,
    OneOf { values: Vec<String> },
    Sequence { start: i64 },
    Pattern { pattern: String },
}

impl ColumnGenerator {
    pub(crate) fn resolve(data_type: &DataType) -> Result<Self, GeneratorError> {
        let kind = DataKind::from_str(&data_type.kind)?;
        let name = data_type.kind.as_str();

        let generator = match kind {
            DataKind::FirstName => ColumnGenerator::FirstName,
            DataKind::LastName => ColumnGenerator::LastName,
            DataKind::FullName => ColumnGenerator::FullName,
            DataKind::Email => ColumnGenerator::Email {
                domain: data_type
                    .param("domain")
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(str::to_string),
            },
            DataKind::Username => ColumnGenerator::Username,
            DataKind::PhoneNumber => ColumnGenerator::PhoneNumber {
                pattern: data_type.param("pattern").unwrap_or("###-###-####").to_string(),
            },
            DataKind::StreetAddress => ColumnGenerator::StreetAddress,
            DataKind::City => ColumnGenerator::City,
            DataKind::Country => ColumnGenerator::Country,
            DataKind::Company => ColumnGenerator::Company,
            DataKind::Word => ColumnGenerator::Word,
            DataKind::Sentence => {
                let words: usize = parse_param(data_type, "words", 6)?;
                if words == 0 || words > MAX_SENTENCE_WORDS {
                    return Err(GeneratorError::invalid(
                        name,
                        "words",
                        format!("must be between 1 and {}", MAX_SENTENCE_WORDS),
                    ));
                }
                ColumnGenerator::Sentence { words }
            }
            DataKind::Integer => {
                let min: i64 = parse_param(data_type, "min", 0)?;
                let max: i64 = parse_param(data_type, "max", 1000)?;
                if min > max {
                    return Err(GeneratorError::invalid(name, "min", "must not exceed max"));
                }
                ColumnGenerator::Integer { min, max }
            }
            DataKind::Decimal => {
                let min: f64 = parse_param(data_type, "min", 0.0)?;
                let max: f64 = parse_param(data_type, "max", 1000.0)?;
                let scale: usize = parse_param(data_type, "scale", 2)?;
                let in_range = |bound: f64| bound.is_finite() && bound.abs() <= MAX_DECIMAL_MAGNITUDE;
                if !in_range(min) || !in_range(max) || min > max {
                    return Err(GeneratorError::invalid(
                        name,
                        "min",
                        format!(
                            "bounds must lie within ±{:e} and min must not exceed max",
                            MAX_DECIMAL_MAGNITUDE
                        ),
                    ));
                }
                if scale > 10 {
                    return Err(GeneratorError::invalid(name, "scale", "must be between 0 and 10"));
                }
                ColumnGenerator::Decimal { min, max, scale }
            }
            DataKind::Boolean => {
                let true_weight: f64 = parse_param(data_type, "true_weight", 0.5)?;
                if !(0.0..=1.0).contains(&true_weight) {
                    return Err(GeneratorError::invalid(
                        name,
                        "true_weight",
                        "must be between 0 and 1",
                    ));
                }
                ColumnGenerator::Boolean { true_weight }
            }
            DataKind::Date => {
                let start = parse_date(data_type, "start", "1970-01-01")?;
                let end = parse_date(data_type, "end", "2030-12-31")?;
                if start > end {
                    return Err(GeneratorError::invalid(name, "start", "must not be after end"));
                }
                let format = data_type.param("format").unwrap_or("%Y-%m-%d").to_string();
                let mut probe = String::new();
                if write!(probe, "{}", start.format(&format)).is_err() {
                    return Err(GeneratorError::invalid(name, "format", "not a valid strftime format"));
                }
                let span_days = end.signed_duration_since(start).num_days() as u64;
                ColumnGenerator::Date {
                    start,
                    span_days,
                    format,
                }
            }
            DataKind::Uuid => ColumnGenerator::Uuid,
            DataKind::OneOf => {
                let values: Vec<String> = required_param(data_type, "values")?
                    .split(',')
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect();
                if values.is_empty() {
                    return Err(GeneratorError::invalid(name, "values", "needs at least one value"));
                }
                ColumnGenerator::OneOf { values }
            }
            DataKind::Sequence => ColumnGenerator::Sequence {
                start: parse_param(data_type, "start", 1)?,
            },
            DataKind::Pattern => {
                let pattern = required_param(data_type, "pattern")?;
                if rand_widths(pattern).into_iter().any(|digits| digits > MAX_RAND_DIGITS) {
                    return Err(GeneratorError::invalid(
                        name,
                        "pattern",
                        format!("{{rand:N}} allows at most {} digits", MAX_RAND_DIGITS),
                    ));
                }
                ColumnGenerator::Pattern { pattern: pattern.to_string() }
            }
        };

        Ok(generator)
    }

    /// Produce the value for row `index`.
    pub(crate) fn generate<R: Rng>(&self, rng: &mut R, index: u64) -> String {
        match self {
            ColumnGenerator::FirstName => pick(rng, FIRST_NAMES).to_string(),
            ColumnGenerator::LastName => pick(rng, LAST_NAMES).to_string(),
            ColumnGenerator::FullName => {
                format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
            }
            ColumnGenerator::Email { domain } => {
                let first = pick(rng, FIRST_NAMES).to_ascii_lowercase();
                let last = pick(rng, LAST_NAMES).to_ascii_lowercase();
                let number = rng.random_range(1..100);
                let domain = match domain {
                    Some(domain) => domain.as_str(),
                    None => *pick(rng, EMAIL_DOMAINS),
                };
                format!("{first}.{last}{number}@{domain}")
            }
            ColumnGenerator::Username => format!(
                "{}_{}{}",
                pick(rng, FIRST_NAMES).to_ascii_lowercase(),
                pick(rng, LAST_NAMES).to_ascii_lowercase(),
                rng.random_range(1..1000)
            ),
            ColumnGenerator::PhoneNumber { pattern } => fill_digits(pattern, rng),
            ColumnGenerator::StreetAddress => format!(
                "{} {} {}",
                rng.random_range(1..10000),
                pick(rng, STREET_NAMES),
                pick(rng, STREET_SUFFIXES)
            ),
            ColumnGenerator::City => pick(rng, CITIES).to_string(),
            ColumnGenerator::Country => pick(rng, COUNTRIES).to_string(),
            ColumnGenerator::Company => format!(
                "{} {}",
                pick(rng, COMPANY_PREFIXES),
                pick(rng, COMPANY_SUFFIXES)
            ),
            ColumnGenerator::Word => pick(rng, WORDS).to_string(),
            ColumnGenerator::Sentence { words } => {
                let mut sentence = (0..*words)
                    .map(|_| *pick(rng, WORDS))
                    .collect::<Vec<_>>()
                    .join(" ");
                if let Some(first) = sentence.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                sentence.push('.');
                sentence
            }
            ColumnGenerator::Integer { min, max } => rng.random_range(*min..=*max).to_string(),
            ColumnGenerator::Decimal { min, max, scale } => {
                let value = if min == max {
                    *min
                } else {
                    rng.random_range(*min..=*max)
                };
                format!("{:.*}", *scale, value)
            }
            ColumnGenerator::Boolean { true_weight } => rng.random_bool(*true_weight).to_string(),
            ColumnGenerator::Date {
                start,
                span_days,
                format,
            } => {
                let offset = rng.random_range(0..=*span_days);
                // The offset never exceeds the validated span, so the addition stays in range.
                start
                    .checked_add_days(Days::new(offset))
                    .unwrap_or(*start)
                    .format(format)
                    .to_string()
            }
            ColumnGenerator::Uuid => random_uuid(rng),
            ColumnGenerator::OneOf { values } => pick(rng, values).clone(),
            ColumnGenerator::Sequence { start } => (*start as i128 + index as i128).to_string(),
            ColumnGenerator::Pattern { pattern } => generate_pattern(pattern, rng, index),
        }
    }
}

fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn parse_param<T>(data_type: &DataType, key: &str, default: T) -> Result<T, GeneratorError>
where
    T: FromStr,
    T::Err: Display,
{
    match data_type.param(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| GeneratorError::invalid(&data_type.kind, key, format!("'{raw}': {e}"))),
    }
}

fn required_param<'a>(data_type: &'a DataType, key: &str) -> Result<&'a str, GeneratorError> {
    data_type
        .param(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| GeneratorError::invalid(&data_type.kind, key, "is required"))
}

fn parse_date(data_type: &DataType, key: &str, default: &str) -> Result<NaiveDate, GeneratorError> {
    let raw = data_type.param(key).unwrap_or(default).trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| GeneratorError::invalid(&data_type.kind, key, format!("'{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn resolve(data_type: DataType) -> ColumnGenerator {
        ColumnGenerator::resolve(&data_type).unwrap()
    }

    #[test]
    fn kinds_resolve_by_name_and_alias() {
        assert_eq!("first_name".parse::<DataKind>(), Ok(DataKind::FirstName));
        assert_eq!("Full-Name".parse::<DataKind>(), Ok(DataKind::FullName));
        assert_eq!("number".parse::<DataKind>(), Ok(DataKind::Integer));
        assert_eq!(
            "lorem".parse::<DataKind>(),
            Err(GeneratorError::UnsupportedDataType("lorem".to_string()))
        );
    }

    #[test]
    fn catalogue_lists_every_kind_once() {
        let catalogue = catalogue();
        assert_eq!(catalogue.len(), KINDS.len());
        let one_of = catalogue.iter().find(|info| info.kind == "one_of").unwrap();
        assert!(one_of.params[0].required);
    }

    #[test]
    fn integer_respects_bounds() {
        let column = resolve(DataType::new("integer").with_param("min", "-5").with_param("max", "5"));
        let mut rng = StdRng::seed_from_u64(1);
        for index in 0..200 {
            let value: i64 = column.generate(&mut rng, index).parse().unwrap();
            assert!((-5..=5).contains(&value));
        }
    }

    #[test]
    fn integer_rejects_inverted_bounds() {
        let result = ColumnGenerator::resolve(
            &DataType::new("integer").with_param("min", "10").with_param("max", "1"),
        );
        assert!(matches!(result, Err(GeneratorError::InvalidParameter { .. })));
    }

    #[test]
    fn unparseable_parameter_is_reported() {
        let result = ColumnGenerator::resolve(&DataType::new("integer").with_param("max", "ten"));
        match result {
            Err(GeneratorError::InvalidParameter { kind, param, .. }) => {
                assert_eq!(kind, "integer");
                assert_eq!(param, "max");
            }
            other => panic!("expected invalid parameter, got {other:?}"),
        }
    }

    #[test]
    fn decimal_uses_scale() {
        let column = resolve(
            DataType::new("decimal")
                .with_param("min", "1")
                .with_param("max", "2")
                .with_param("scale", "3"),
        );
        let mut rng = StdRng::seed_from_u64(3);
        let value = column.generate(&mut rng, 0);
        let (_, fraction) = value.split_once('.').unwrap();
        assert_eq!(fraction.len(), 3);
        let parsed: f64 = value.parse().unwrap();
        assert!((1.0..=2.0).contains(&parsed));
    }

    #[test]
    fn decimal_rejects_bounds_too_far_apart() {
        for (min, max) in [("-1e308", "1e308"), ("0", "1.7e308"), ("-2e15", "0")] {
            let result = ColumnGenerator::resolve(
                &DataType::new("decimal").with_param("min", min).with_param("max", max),
            );
            assert!(
                matches!(result, Err(GeneratorError::InvalidParameter { .. })),
                "{min}..{max}"
            );
        }

        let column = resolve(DataType::new("decimal").with_param("min", "-1e15").with_param("max", "1e15"));
        let mut rng = StdRng::seed_from_u64(4);
        let parsed: f64 = column.generate(&mut rng, 0).parse().unwrap();
        assert!(parsed.abs() <= 1e15);
    }

    #[test]
    fn sentence_word_count_is_capped() {
        assert!(ColumnGenerator::resolve(&DataType::new("sentence").with_param("words", "0")).is_err());
        assert!(ColumnGenerator::resolve(&DataType::new("sentence").with_param("words", "65")).is_err());
        assert!(
            ColumnGenerator::resolve(&DataType::new("sentence").with_param("words", "18446744073709551615"))
                .is_err()
        );

        let column = resolve(DataType::new("sentence").with_param("words", "64"));
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(column.generate(&mut rng, 0).split(' ').count(), 64);
    }

    #[test]
    fn pattern_rand_width_is_capped() {
        let result = ColumnGenerator::resolve(
            &DataType::new("pattern").with_param("pattern", "id-{rand:100000000000000}"),
        );
        match result {
            Err(GeneratorError::InvalidParameter { param, .. }) => assert_eq!(param, "pattern"),
            other => panic!("expected invalid parameter, got {other:?}"),
        }

        let column = resolve(DataType::new("pattern").with_param("pattern", "{rand:64}"));
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(column.generate(&mut rng, 0).len(), 64);
    }

    #[test]
    fn boolean_weight_extremes() {
        let always = resolve(DataType::new("boolean").with_param("true_weight", "1"));
        let never = resolve(DataType::new("boolean").with_param("true_weight", "0"));
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(always.generate(&mut rng, 0), "true");
        assert_eq!(never.generate(&mut rng, 0), "false");
        assert!(ColumnGenerator::resolve(&DataType::new("boolean").with_param("true_weight", "1.5")).is_err());
    }

    #[test]
    fn date_stays_in_range() {
        let column = resolve(
            DataType::new("date")
                .with_param("start", "2020-02-27")
                .with_param("end", "2020-03-02"),
        );
        let mut rng = StdRng::seed_from_u64(11);
        let start = NaiveDate::from_ymd_opt(2020, 2, 27).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 3, 2).unwrap();
        for index in 0..100 {
            let value = column.generate(&mut rng, index);
            let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").unwrap();
            assert!(date >= start && date <= end);
        }
    }

    #[test]
    fn date_rejects_bad_format() {
        let result = ColumnGenerator::resolve(&DataType::new("date").with_param("format", "%Q"));
        assert!(matches!(result, Err(GeneratorError::InvalidParameter { .. })));
    }

    #[test]
    fn one_of_requires_values() {
        assert!(ColumnGenerator::resolve(&DataType::new("one_of")).is_err());
        assert!(ColumnGenerator::resolve(&DataType::new("one_of").with_param("values", " , ")).is_err());

        let column = resolve(DataType::new("one_of").with_param("values", "red, green"));
        let mut rng = StdRng::seed_from_u64(5);
        for index in 0..20 {
            let value = column.generate(&mut rng, index);
            assert!(value == "red" || value == "green");
        }
    }

    #[test]
    fn sequence_follows_row_index() {
        let column = resolve(DataType::new("sequence").with_param("start", "100"));
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(column.generate(&mut rng, 0), "100");
        assert_eq!(column.generate(&mut rng, 7), "107");
    }

    #[test]
    fn email_and_sentence_shapes() {
        let mut rng = StdRng::seed_from_u64(21);
        let email = resolve(DataType::new("email").with_param("domain", "dads.mx")).generate(&mut rng, 0);
        assert!(email.ends_with("@dads.mx"));
        assert_eq!(email, email.to_ascii_lowercase());

        let sentence = resolve(DataType::new("sentence").with_param("words", "3")).generate(&mut rng, 0);
        assert!(sentence.ends_with('.'));
        assert_eq!(sentence.split(' ').count(), 3);
        assert!(sentence.chars().next().unwrap().is_ascii_uppercase());
    }
}

//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - row index
//! - `{uuid}` - UUID drawn from the row RNG
//! - `{rand:N}` - random N-digit number

use rand::Rng;

/// Widest `{rand:N}` placeholder accepted by `ColumnGenerator::resolve`.
pub(crate) const MAX_RAND_DIGITS: usize = 64;

/// `{rand:N}` is expanded first, on the raw pattern, so text produced by
/// `{index}` can never form a new placeholder.
pub(crate) fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> String {
    let mut result = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some((start, end, digits)) = next_rand_placeholder(rest) {
        result.push_str(&rest[..start]);
        match digits {
            Some(digits) => result.push_str(&random_digits(rng, digits)),
            // Leave malformed placeholders untouched.
            None => result.push_str(&rest[start..end]),
        }
        rest = &rest[end..];
    }
    result.push_str(rest);

    while result.contains("{uuid}") {
        result = result.replacen("{uuid}", &random_uuid(rng), 1);
    }

    result.replace("{index}", &index.to_string())
}

/// Digit counts of every well-formed `{rand:N}` placeholder in `pattern`.
pub(crate) fn rand_widths(pattern: &str) -> Vec<usize> {
    let mut widths = Vec::new();
    let mut rest = pattern;
    while let Some((_, end, digits)) = next_rand_placeholder(rest) {
        widths.extend(digits);
        rest = &rest[end..];
    }
    widths
}

/// Byte range of the next `{rand:` placeholder and its parsed width, `None`
/// when the width is not a number.
fn next_rand_placeholder(text: &str) -> Option<(usize, usize, Option<usize>)> {
    let start = text.find("{rand:")?;
    let len = text[start..].find('}')?;
    let end = start + len;
    Some((start, end + 1, text[start + 6..end].parse::<usize>().ok()))
}

/// `#` becomes a random digit, everything else is copied.
pub(crate) fn fill_digits<R: Rng>(template: &str, rng: &mut R) -> String {
    template
        .chars()
        .map(|ch| match ch {
            '#' => digit(rng, 0),
            other => other,
        })
        .collect()
}

pub(crate) fn random_uuid<R: Rng>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .to_string()
}

/// Random number with exactly `digits` digits and no leading zero.
fn random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    let mut result = String::with_capacity(digits);
    for position in 0..digits {
        result.push(digit(rng, if position == 0 { 1 } else { 0 }));
    }
    result
}

fn digit<R: Rng>(rng: &mut R, min: u8) -> char {
    char::from(b'0' + rng.random_range(min..10))
}

//! Loading function tables from JSON documents.
//!
//! A function document is a JSON array of definitions; each definition is an
//! object mapping a textual group-element key to a rational value:
//!
//! ```json
//! [
//!   { "0": [0, 1], "1": [1, 4], "2": "0.5", "3": [3, 4] }
//! ]
//! ```
//!
//! Element keys are decoded by a constrained, total parser — an unsigned
//! integer for cyclic groups (`"3"`) or a parenthesized tuple of unsigned
//! integers for direct sums (`"(1, 2)"`). Nothing is ever evaluated as
//! code; any other key shape is rejected with
//! [`Error::MalformedElementKey`].
//!
//! Values are either a two-integer `[numerator, denominator]` array or a
//! decimal string (`"0.25"`, `"-1.5"`); anything else is rejected with
//! [`Error::InvalidOperand`]. Decoded tables are handed to
//! [`PolynomialFunction::new`], which enforces the construction contract
//! (totality over the group, no foreign elements).
//!
//! The group itself is supplied by the caller; the document carries only
//! value tables.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use polydiff::group::Group;
//! use polydiff::load::functions_from_str;
//!
//! let group = Arc::new(Group::cyclic(2).unwrap());
//! let doc = r#"[ { "0": [0, 1], "1": "0.5" } ]"#;
//! let functions = functions_from_str(&group, doc).unwrap();
//! assert_eq!(functions.len(), 1);
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::function::PolynomialFunction;
use crate::group::{Group, GroupElement};

/// Load every function definition from a file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] on read failure, plus every error
/// [`functions_from_str`] can produce.
pub fn functions_from_path(
    group: &Arc<Group>,
    path: impl AsRef<Path>,
) -> Result<Vec<PolynomialFunction>> {
    let file = File::open(path).map_err(|e| Error::Io {
        message: e.to_string(),
    })?;
    functions_from_reader(group, BufReader::new(file))
}

/// Load every function definition from a reader.
///
/// # Errors
///
/// Returns [`Error::Io`] on read failure, plus every error
/// [`functions_from_str`] can produce.
pub fn functions_from_reader(
    group: &Arc<Group>,
    mut reader: impl Read,
) -> Result<Vec<PolynomialFunction>> {
    let mut document = String::new();
    reader.read_to_string(&mut document).map_err(|e| Error::Io {
        message: e.to_string(),
    })?;
    functions_from_str(group, &document)
}

/// Decode a JSON document into functions over the supplied group.
///
/// # Errors
///
/// - [`Error::MalformedDocument`] if the document is not a JSON array of
///   objects.
/// - [`Error::MalformedElementKey`] for a key outside the constrained
///   grammar.
/// - [`Error::InvalidOperand`] / [`Error::InvalidDenominator`] for a value
///   that is not a rational.
/// - [`Error::MissingValues`] / [`Error::UnknownElement`] from the
///   construction contract.
pub fn functions_from_str(group: &Arc<Group>, document: &str) -> Result<Vec<PolynomialFunction>> {
    let root: Value = serde_json::from_str(document).map_err(|e| Error::MalformedDocument {
        message: e.to_string(),
    })?;
    let entries = root.as_array().ok_or_else(|| {
        Error::malformed_document("top-level value must be an array of function definitions")
    })?;
    entries
        .iter()
        .map(|entry| function_from_entry(group, entry))
        .collect()
}

fn function_from_entry(group: &Arc<Group>, entry: &Value) -> Result<PolynomialFunction> {
    let map = entry
        .as_object()
        .ok_or_else(|| Error::malformed_document("each function definition must be an object"))?;

    let mut values = HashMap::with_capacity(map.len());
    for (key, raw) in map {
        let element = parse_element(key)?;
        let value = parse_rational(raw)?;
        values.insert(element, value);
    }
    PolynomialFunction::new(Arc::clone(group), values)
}

/// Parse an element key: an unsigned integer or a tuple of unsigned
/// integers. Membership in the target group is checked later by the
/// construction contract.
fn parse_element(key: &str) -> Result<GroupElement> {
    let malformed = || Error::MalformedElementKey {
        key: key.to_string(),
    };

    let trimmed = key.trim();
    if let Some(inner) = trimmed.strip_prefix('(') {
        let inner = inner.strip_suffix(')').ok_or_else(malformed)?;
        if inner.trim().is_empty() {
            return Ok(GroupElement::Tuple(Vec::new()));
        }
        let mut segments: Vec<&str> = inner.split(',').map(str::trim).collect();
        // Allow one trailing comma, as in the 1-tuple rendering "(2,)".
        if segments.len() > 1 && segments.last() == Some(&"") {
            segments.pop();
        }
        let coords = segments
            .into_iter()
            .map(|s| s.parse::<u32>().map_err(|_| malformed()))
            .collect::<Result<Vec<u32>>>()?;
        Ok(GroupElement::Tuple(coords))
    } else {
        trimmed
            .parse::<u32>()
            .map(GroupElement::Scalar)
            .map_err(|_| malformed())
    }
}

/// Parse a rational value: a `[numerator, denominator]` pair or a decimal
/// string.
fn parse_rational(value: &Value) -> Result<BigRational> {
    match value {
        Value::Array(parts) if parts.len() == 2 => {
            let numer = parts[0]
                .as_i64()
                .ok_or_else(|| Error::invalid_operand(value.to_string()))?;
            let denom = parts[1]
                .as_i64()
                .ok_or_else(|| Error::invalid_operand(value.to_string()))?;
            if denom == 0 {
                return Err(Error::InvalidDenominator(denom));
            }
            Ok(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
        }
        Value::String(text) => parse_decimal(text),
        other => Err(Error::invalid_operand(other.to_string())),
    }
}

fn parse_decimal(text: &str) -> Result<BigRational> {
    let invalid = || Error::invalid_operand(format!("{text:?}"));

    let trimmed = text.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let combined = format!("{int_part}{frac_part}");
    let mut numer = combined.parse::<BigInt>().map_err(|_| invalid())?;
    if negative {
        numer = -numer;
    }
    let denom = (0..frac_part.len()).fold(BigInt::one(), |acc, _| acc * 10);
    Ok(BigRational::new(numer, denom))
}

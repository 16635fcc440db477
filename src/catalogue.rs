//! Ready-made binomial-coefficient test functions.
//!
//! This module provides named constructors for the standard examples used
//! when exercising the degree oracle:
//!
//! - [`binomial_function`]: `f(x) = C(x, i)/4 (mod 1)` on Z/4
//! - [`binomial_product_function`]: `f(x, y) = C(x, i)·C(y, j)/4 (mod 1)`
//!   on Z/4 ⊕ Z/4
//!
//! Over the integers the classical identity `Δ_1 C(x, k) = C(x, k-1)` makes
//! `C(x, k)/4` a polynomial of degree exactly `k`. On the cyclic group the
//! identity survives the wrap at `x = 3` only while the dropped terms
//! `C(4, j)·C(x, k-j)/4` are integers: that holds for `k <= 1`, so the
//! group degrees of the family are 0, 1 for `i = 0, 1`, and the surviving
//! half-integer corrections push them to 4 and 5 for `i = 2, 3`.
//!
//! # Example
//!
//! ```
//! use polydiff::catalogue::binomial_function;
//! use polydiff::degree::Degree;
//!
//! // f(x) = C(x, 1)/4 = x/4 is linear on Z/4.
//! let f = binomial_function(1).unwrap();
//! assert_eq!(f.degree(3), Degree::Exact(1));
//! ```

use std::sync::Arc;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::error::{Error, Result};
use crate::function::PolynomialFunction;
use crate::group::Group;
use crate::utils::binomial;

/// `f(x) = C(x, index)/4 (mod 1)` on the cyclic group Z/4.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`] if `index` is negative.
pub fn binomial_function(index: i64) -> Result<PolynomialFunction> {
    let k = nonnegative(index)?;
    let group = Arc::new(Group::cyclic(4)?);
    Ok(PolynomialFunction::from_fn(group, |g| {
        let x = u64::from(g.as_scalar().map_or(0, |v| v));
        quarter(binomial(x, k).unwrap_or(0))
    }))
}

/// `f(x, y) = C(x, row)·C(y, col)/4 (mod 1)` on Z/4 ⊕ Z/4.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`] if either index is negative.
pub fn binomial_product_function(row: i64, col: i64) -> Result<PolynomialFunction> {
    let i = nonnegative(row)?;
    let j = nonnegative(col)?;
    let group = Arc::new(Group::direct_sum([4, 4])?);
    Ok(PolynomialFunction::from_fn(group, |g| {
        let (x, y) = match g.as_tuple() {
            Some([x, y]) => (u64::from(*x), u64::from(*y)),
            _ => (0, 0),
        };
        quarter(binomial(x, i).unwrap_or(0) * binomial(y, j).unwrap_or(0))
    }))
}

fn nonnegative(index: i64) -> Result<u64> {
    if index < 0 {
        return Err(Error::InvalidIndex { index });
    }
    Ok(index as u64)
}

fn quarter(numerator: u64) -> BigRational {
    BigRational::new(BigInt::from(numerator), BigInt::from(4))
}

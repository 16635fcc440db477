//! Discrete polynomial-degree testing.
//!
//! A function `f : G → R/Z` has degree at most `d` when every `(d+1)`-fold
//! iterated difference of `f` vanishes identically — the discrete analogue
//! of "the (d+1)-th derivative is zero". The test here is exhaustive and
//! group-agnostic: shift tuples are drawn from the whole group, with
//! repetition, and enumerated lazily with early termination on the first
//! counterexample.
//!
//! # Cost
//!
//! `degree_leq(f, d)` performs `O(|G|^(d+1) · |G|)` value operations: it is
//! exponential in `d` by design and intended for small groups and small
//! degree bounds only. Callers bound the cost themselves through the group
//! size and the requested degree.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use num_rational::BigRational;
//! use polydiff::degree::Degree;
//! use polydiff::function::PolynomialFunction;
//! use polydiff::group::Group;
//!
//! let group = Arc::new(Group::cyclic(3).unwrap());
//! let c = BigRational::new(2.into(), 3.into());
//! let f = PolynomialFunction::constant(group, &c);
//!
//! assert!(f.degree_leq(0));
//! assert!(!f.degree_leq(-1));
//! assert_eq!(f.degree(5), Degree::Exact(0));
//! ```

use std::fmt;

use crate::function::PolynomialFunction;
use crate::utils::CartesianPower;

/// The outcome of a bounded degree search.
///
/// The two cases are explicit so that "no degree found within the bound"
/// can never be mistaken for an actual degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    /// The smallest `d` for which all `(d+1)`-fold differences vanish.
    Exact(u32),
    /// No degree at or below the searched bound; carries the bound that
    /// was searched.
    ExceedsBound(u32),
}

impl Degree {
    /// The exact degree, if one was found within the bound.
    #[must_use]
    pub fn exact(self) -> Option<u32> {
        match self {
            Self::Exact(d) => Some(d),
            Self::ExceedsBound(_) => None,
        }
    }

    /// Whether the search found an exact degree.
    #[must_use]
    pub fn is_exact(self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(d) => write!(f, "degree {d}"),
            Self::ExceedsBound(bound) => write!(f, "degree exceeds bound {bound}"),
        }
    }
}

/// Whether `f` has degree at most `d`.
///
/// Returns `false` unconditionally for negative `d`: no function has degree
/// below zero. For `d >= 0`, checks that the iterated difference over every
/// ordered `(d+1)`-tuple of shifts from the whole group is the zero
/// function, stopping at the first counterexample.
#[must_use]
pub fn degree_leq(f: &PolynomialFunction, d: i32) -> bool {
    if d < 0 {
        return false;
    }
    let order = f.group().order();
    let tuple_len = d as usize + 1;

    CartesianPower::new(order, tuple_len).all(|shifts| {
        let mut current = f.clone();
        for &shift_index in &shifts {
            current = current.difference_by_index(shift_index);
        }
        current.is_zero()
    })
}

/// Search for the exact degree of `f`, scanning `d = 0, 1, …, max_degree`.
///
/// Returns [`Degree::Exact`] with the first `d` whose `(d+1)`-fold
/// differences all vanish, or [`Degree::ExceedsBound`] if the scan
/// exhausts the bound.
#[must_use]
pub fn degree(f: &PolynomialFunction, max_degree: u32) -> Degree {
    for d in 0..=max_degree {
        if degree_leq(f, d as i32) {
            return Degree::Exact(d);
        }
    }
    Degree::ExceedsBound(max_degree)
}

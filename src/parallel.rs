//! Parallel degree search.
//!
//! This module provides parallel versions of the degree oracle using Rayon.
//! Enable with the `parallel` feature flag.
//!
//! # Usage
//!
//! ```ignore
//! use polydiff::catalogue::binomial_function;
//! use polydiff::parallel::par_degree_leq;
//!
//! let f = binomial_function(1).unwrap();
//! assert!(par_degree_leq(&f, 1));
//! ```
//!
//! # Performance
//!
//! The search over shift tuples is embarrassingly parallel: every tuple is
//! tested independently and the only cross-task communication is the
//! short-circuit once one tuple disproves the bound, which
//! [`ParallelIterator::all`] provides. Parallelism pays off for larger
//! groups or higher degree bounds; for tiny searches the sequential
//! functions in [`crate::degree`] avoid the scheduling overhead.

use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::degree::Degree;
use crate::function::PolynomialFunction;
use crate::utils::CartesianPower;

/// Parallel version of [`crate::degree::degree_leq`].
///
/// Returns the same result as the sequential oracle: `false` for negative
/// `d`, otherwise whether every `(d+1)`-fold iterated difference vanishes.
#[must_use]
pub fn par_degree_leq(f: &PolynomialFunction, d: i32) -> bool {
    if d < 0 {
        return false;
    }
    let order = f.group().order();
    let tuple_len = d as usize + 1;

    CartesianPower::new(order, tuple_len)
        .par_bridge()
        .all(|shifts| {
            let mut current = f.clone();
            for &shift_index in &shifts {
                current = current.difference_by_index(shift_index);
            }
            current.is_zero()
        })
}

/// Parallel version of [`crate::degree::degree`].
///
/// Scans `d = 0, 1, …, max_degree` with [`par_degree_leq`].
#[must_use]
pub fn par_degree(f: &PolynomialFunction, max_degree: u32) -> Degree {
    for d in 0..=max_degree {
        if par_degree_leq(f, d as i32) {
            return Degree::Exact(d);
        }
    }
    Degree::ExceedsBound(max_degree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{binomial_function, binomial_product_function};
    use crate::degree;
    use crate::group::Group;
    use num_bigint::BigInt;
    use num_rational::BigRational;
    use std::sync::Arc;

    #[test]
    fn test_matches_sequential_on_cyclic() {
        let f = binomial_function(1).unwrap();
        for d in -1..4 {
            assert_eq!(par_degree_leq(&f, d), degree::degree_leq(&f, d));
        }
        assert_eq!(par_degree(&f, 3), f.degree(3));
    }

    #[test]
    fn test_matches_sequential_on_direct_sum() {
        let f = binomial_product_function(1, 1).unwrap();
        assert!(par_degree_leq(&f, 2));
        assert!(!par_degree_leq(&f, 1));
        assert_eq!(par_degree(&f, 2), Degree::Exact(2));
    }

    #[test]
    fn test_negative_bound() {
        let group = Arc::new(Group::cyclic(3).unwrap());
        let c = BigRational::new(BigInt::from(1), BigInt::from(3));
        let f = PolynomialFunction::constant(group, &c);
        assert!(!par_degree_leq(&f, -1));
    }
}

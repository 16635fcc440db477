//! Functions from a finite abelian group into R/Z.
//!
//! [`PolynomialFunction`] is the central type of the crate: a total,
//! immutable mapping from every element of a [`Group`] to a canonical
//! [`Mod1`] value. Pointwise algebra, scalar multiplication, and the finite
//! difference operator all produce new functions over the same group; no
//! operation ever mutates an existing function.
//!
//! The finite difference `Δ_h f : x ↦ f(x + h) − f(x)` is the discrete
//! analogue of a directional derivative, and repeated differencing is what
//! the degree oracle in [`crate::degree`] is built on.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use num_rational::BigRational;
//! use polydiff::function::PolynomialFunction;
//! use polydiff::group::{Group, GroupElement};
//!
//! let group = Arc::new(Group::cyclic(4).unwrap());
//! // f(x) = x/4 (mod 1)
//! let f = PolynomialFunction::from_fn(Arc::clone(&group), |g| {
//!     BigRational::new(g.as_scalar().unwrap().into(), 4.into())
//! });
//!
//! // Δ_1 f is the constant 1/4, so a second difference kills it.
//! let d = f.difference(&GroupElement::Scalar(1)).unwrap();
//! assert!(d.difference(&GroupElement::Scalar(1)).unwrap().is_zero());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use num_rational::BigRational;

use crate::degree::{self, Degree};
use crate::error::{Error, Result};
use crate::group::{Group, GroupElement};
use crate::value::Mod1;

/// The right-hand side of a runtime-dispatched multiplication.
///
/// Statically typed callers use [`PolynomialFunction::mul`] and
/// [`PolynomialFunction::scale`] directly; this enum carries the operand in
/// contexts where it only becomes known at runtime.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    /// Pointwise multiplication by another function over the same group.
    Function(&'a PolynomialFunction),
    /// Multiplication of every value by a rational scalar.
    Scalar(BigRational),
}

/// A total function from a finite abelian group into R/Z.
///
/// Values are stored densely in the group's canonical enumeration order and
/// are always canonical representatives in `[0, 1)`. Instances are immutable;
/// every operation returns a new function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialFunction {
    group: Arc<Group>,
    values: Vec<Mod1>,
}

impl PolynomialFunction {
    /// Create a function from an explicit value map.
    ///
    /// The map must assign a value to every group element and to nothing
    /// else; values are canonicalized into `[0, 1)` on entry.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingValues`] if any group element is unmapped, listing
    ///   every absent element in enumeration order.
    /// - [`Error::UnknownElement`] if the map contains a key that is not a
    ///   member of the group.
    pub fn new(group: Arc<Group>, values: HashMap<GroupElement, BigRational>) -> Result<Self> {
        let mut table = Vec::with_capacity(group.order());
        let mut missing = Vec::new();
        for element in group.elements() {
            match values.get(&element) {
                Some(v) => table.push(Mod1::new(v.clone())),
                None => missing.push(element),
            }
        }
        if !missing.is_empty() {
            return Err(Error::MissingValues { missing });
        }
        if values.len() != table.len() {
            // Every group element is mapped, so some key must be foreign.
            let stray = values
                .keys()
                .find(|k| !group.contains(k))
                .cloned()
                .unwrap_or_else(|| group.identity());
            return Err(Error::unknown_element(stray, &group));
        }
        Ok(Self {
            group,
            values: table,
        })
    }

    /// Create a function by evaluating a closure at every group element.
    ///
    /// The result is total by construction; values are canonicalized.
    pub fn from_fn<F>(group: Arc<Group>, mut f: F) -> Self
    where
        F: FnMut(&GroupElement) -> BigRational,
    {
        let values = group.elements().map(|g| Mod1::new(f(&g))).collect();
        Self { group, values }
    }

    /// Create the constant function with the given value everywhere.
    #[must_use]
    pub fn constant(group: Arc<Group>, value: &BigRational) -> Self {
        let canonical = Mod1::new(value.clone());
        let values = vec![canonical; group.order()];
        Self { group, values }
    }

    /// The group this function is defined over.
    #[must_use]
    pub fn group(&self) -> &Arc<Group> {
        &self.group
    }

    /// The stored values, in the group's canonical enumeration order.
    #[must_use]
    pub fn values(&self) -> &[Mod1] {
        &self.values
    }

    /// Evaluate the function at a group element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if `g` is not a member of the
    /// group.
    pub fn eval(&self, g: &GroupElement) -> Result<&Mod1> {
        let index = self
            .group
            .index_of(g)
            .ok_or_else(|| Error::unknown_element(g.clone(), &self.group))?;
        Ok(&self.values[index])
    }

    /// Pointwise addition modulo 1: `(f + g)(x) = f(x) + g(x) (mod 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupMismatch`] if the operands are defined over
    /// different groups.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_group(other)?;
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            group: Arc::clone(&self.group),
            values,
        })
    }

    /// Pointwise multiplication modulo 1: `(f * g)(x) = f(x) · g(x) (mod 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupMismatch`] if the operands are defined over
    /// different groups.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_same_group(other)?;
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .collect();
        Ok(Self {
            group: Arc::clone(&self.group),
            values,
        })
    }

    /// Multiply every value by a rational scalar, reducing modulo 1.
    #[must_use]
    pub fn scale(&self, scalar: &BigRational) -> Self {
        let values = self.values.iter().map(|v| v.scale(scalar)).collect();
        Self {
            group: Arc::clone(&self.group),
            values,
        }
    }

    /// Multiply by a runtime-dispatched operand.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupMismatch`] for a function operand over a
    /// different group. The [`Error::InvalidOperand`] kind belongs to the
    /// same contract and is raised where operands arrive untyped (the
    /// function-table loader).
    pub fn mul_operand(&self, operand: &Operand<'_>) -> Result<Self> {
        match operand {
            Operand::Function(other) => self.mul(other),
            Operand::Scalar(scalar) => Ok(self.scale(scalar)),
        }
    }

    /// The finite difference `Δ_h f : x ↦ f(x + h) − f(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if the shift `h` is not a member
    /// of the group.
    pub fn difference(&self, shift: &GroupElement) -> Result<Self> {
        let shift_index = self
            .group
            .index_of(shift)
            .ok_or_else(|| Error::unknown_element(shift.clone(), &self.group))?;
        Ok(self.difference_by_index(shift_index))
    }

    /// Apply `difference` once per shift, left to right.
    ///
    /// For abelian groups the difference operators commute, so the result
    /// does not depend on the order of the shifts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if any shift is not a member of
    /// the group.
    pub fn iterated_difference(&self, shifts: &[GroupElement]) -> Result<Self> {
        let mut current = self.clone();
        for shift in shifts {
            current = current.difference(shift)?;
        }
        Ok(current)
    }

    /// Whether every value is the zero of R/Z. Exact equality, no tolerance.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(Mod1::is_zero)
    }

    /// Whether the function has degree at most `d`; see
    /// [`degree::degree_leq`].
    #[must_use]
    pub fn degree_leq(&self, d: i32) -> bool {
        degree::degree_leq(self, d)
    }

    /// Search for the exact degree up to a bound; see [`degree::degree`].
    #[must_use]
    pub fn degree(&self, max_degree: u32) -> Degree {
        degree::degree(self, max_degree)
    }

    /// Render the full value table, one `(element, value)` pair per line.
    #[must_use]
    pub fn explain(&self) -> String {
        self.to_string()
    }

    /// Difference by canonical shift index; the index must be in range.
    pub(crate) fn difference_by_index(&self, shift_index: usize) -> Self {
        let values = (0..self.values.len())
            .map(|i| {
                let shifted = self.group.add_indices(i, shift_index);
                &self.values[shifted] - &self.values[i]
            })
            .collect();
        Self {
            group: Arc::clone(&self.group),
            values,
        }
    }

    fn check_same_group(&self, other: &Self) -> Result<()> {
        if Arc::ptr_eq(&self.group, &other.group) || self.group == other.group {
            Ok(())
        } else {
            Err(Error::GroupMismatch {
                left: (*self.group).clone(),
                right: (*other.group).clone(),
            })
        }
    }
}

impl fmt::Display for PolynomialFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "function on {} (values mod 1):", self.group)?;
        for (g, v) in self.group.elements().zip(&self.values) {
            writeln!(f, "  f({g}) = {v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_traits::Zero;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn z4() -> Arc<Group> {
        Arc::new(Group::cyclic(4).unwrap())
    }

    fn linear_on_z4() -> PolynomialFunction {
        // f(x) = x/4 (mod 1)
        let group = z4();
        PolynomialFunction::from_fn(group, |g| ratio(i64::from(g.as_scalar().unwrap()), 4))
    }

    fn quadratic_on_z4() -> PolynomialFunction {
        // f(x) = x^2/8 (mod 1)
        let group = z4();
        PolynomialFunction::from_fn(group, |g| {
            let x = i64::from(g.as_scalar().unwrap());
            ratio(x * x, 8)
        })
    }

    fn assert_canonical(f: &PolynomialFunction) {
        let one = ratio(1, 1);
        for v in f.values() {
            assert!(v.as_ratio() >= &BigRational::zero());
            assert!(v.as_ratio() < &one);
        }
    }

    #[test]
    fn test_new_requires_total_map() {
        let group = z4();
        let mut values = HashMap::new();
        values.insert(GroupElement::Scalar(0), ratio(1, 2));
        values.insert(GroupElement::Scalar(2), ratio(1, 3));

        let err = PolynomialFunction::new(Arc::clone(&group), values).unwrap_err();
        assert_eq!(
            err,
            Error::MissingValues {
                missing: vec![GroupElement::Scalar(1), GroupElement::Scalar(3)],
            }
        );
    }

    #[test]
    fn test_new_rejects_foreign_keys() {
        let group = z4();
        let mut values = HashMap::new();
        for g in group.elements() {
            values.insert(g, ratio(1, 2));
        }
        values.insert(GroupElement::Scalar(9), ratio(1, 2));

        let err = PolynomialFunction::new(Arc::clone(&group), values).unwrap_err();
        assert!(matches!(err, Error::UnknownElement { .. }));
    }

    #[test]
    fn test_new_canonicalizes_values() {
        let group = z4();
        let mut values = HashMap::new();
        for (i, g) in group.elements().enumerate() {
            values.insert(g, ratio(-7 + i as i64 * 3, 4));
        }
        let f = PolynomialFunction::new(Arc::clone(&group), values).unwrap();
        assert_canonical(&f);
        // -7/4 reduces to 1/4
        assert_eq!(
            f.eval(&GroupElement::Scalar(0)).unwrap(),
            &Mod1::from_integers(1, 4).unwrap()
        );
    }

    #[test]
    fn test_eval_unknown_element() {
        let f = linear_on_z4();
        assert_eq!(
            f.eval(&GroupElement::Scalar(2)).unwrap(),
            &Mod1::from_integers(1, 2).unwrap()
        );
        let err = f.eval(&GroupElement::Scalar(4)).unwrap_err();
        assert!(matches!(err, Error::UnknownElement { .. }));
        let err = f.eval(&GroupElement::Tuple(vec![1, 1])).unwrap_err();
        assert!(matches!(err, Error::UnknownElement { .. }));
    }

    #[test]
    fn test_pointwise_addition() {
        let f = linear_on_z4();
        let g = linear_on_z4();
        let sum = f.add(&g).unwrap();
        // 3/4 + 3/4 wraps to 1/2
        assert_eq!(
            sum.eval(&GroupElement::Scalar(3)).unwrap(),
            &Mod1::from_integers(1, 2).unwrap()
        );
        assert_canonical(&sum);
    }

    #[test]
    fn test_pointwise_multiplication() {
        let f = linear_on_z4();
        let prod = f.mul(&f).unwrap();
        // (3/4)^2 = 9/16
        assert_eq!(
            prod.eval(&GroupElement::Scalar(3)).unwrap(),
            &Mod1::from_integers(9, 16).unwrap()
        );
        assert_canonical(&prod);
    }

    #[test]
    fn test_group_mismatch() {
        let f = linear_on_z4();
        let other_group = Arc::new(Group::cyclic(3).unwrap());
        let g = PolynomialFunction::constant(other_group, &ratio(1, 2));

        assert!(matches!(f.add(&g), Err(Error::GroupMismatch { .. })));
        assert!(matches!(f.mul(&g), Err(Error::GroupMismatch { .. })));
    }

    #[test]
    fn test_equal_groups_are_combinable() {
        // Two separately constructed Z/4 instances denote the same group.
        let f = linear_on_z4();
        let g = linear_on_z4();
        assert!(!Arc::ptr_eq(f.group(), g.group()));
        assert!(f.add(&g).is_ok());
    }

    #[test]
    fn test_scale() {
        let f = linear_on_z4();
        let doubled = f.scale(&ratio(2, 1));
        // 2 * 3/4 wraps to 1/2
        assert_eq!(
            doubled.eval(&GroupElement::Scalar(3)).unwrap(),
            &Mod1::from_integers(1, 2).unwrap()
        );
        assert_canonical(&doubled);
    }

    #[test]
    fn test_mul_operand() {
        let f = linear_on_z4();
        let by_function = f.mul_operand(&Operand::Function(&f)).unwrap();
        assert_eq!(by_function, f.mul(&f).unwrap());

        let by_scalar = f.mul_operand(&Operand::Scalar(ratio(2, 1))).unwrap();
        assert_eq!(by_scalar, f.scale(&ratio(2, 1)));
    }

    #[test]
    fn test_difference_of_linear_is_constant() {
        let f = linear_on_z4();
        let d = f.difference(&GroupElement::Scalar(1)).unwrap();
        for g in f.group().elements() {
            assert_eq!(d.eval(&g).unwrap(), &Mod1::from_integers(1, 4).unwrap());
        }
        assert_canonical(&d);
    }

    #[test]
    fn test_difference_unknown_shift() {
        let f = linear_on_z4();
        let err = f.difference(&GroupElement::Scalar(7)).unwrap_err();
        assert!(matches!(err, Error::UnknownElement { .. }));
    }

    #[test]
    fn test_difference_is_linear() {
        let f = quadratic_on_z4();
        let g = linear_on_z4();
        let h = GroupElement::Scalar(3);

        let lhs = f.add(&g).unwrap().difference(&h).unwrap();
        let rhs = f
            .difference(&h)
            .unwrap()
            .add(&g.difference(&h).unwrap())
            .unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_iterated_difference_commutes() {
        let f = quadratic_on_z4();
        let h1 = GroupElement::Scalar(1);
        let h2 = GroupElement::Scalar(2);

        let ab = f
            .iterated_difference(&[h1.clone(), h2.clone()])
            .unwrap();
        let ba = f.iterated_difference(&[h2, h1]).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_iterated_difference_on_direct_sum_commutes() {
        let group = Arc::new(Group::direct_sum([4, 4]).unwrap());
        let f = PolynomialFunction::from_fn(Arc::clone(&group), |g| {
            let coords = g.as_tuple().unwrap();
            ratio(i64::from(coords[0]) * i64::from(coords[1]), 2)
        });
        let h1 = GroupElement::Tuple(vec![1, 0]);
        let h2 = GroupElement::Tuple(vec![0, 1]);

        let ab = f
            .iterated_difference(&[h1.clone(), h2.clone()])
            .unwrap();
        let ba = f.iterated_difference(&[h2, h1]).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_empty_iterated_difference_is_identity() {
        let f = quadratic_on_z4();
        assert_eq!(f.iterated_difference(&[]).unwrap(), f);
    }

    #[test]
    fn test_is_zero() {
        let group = z4();
        let zero = PolynomialFunction::constant(Arc::clone(&group), &ratio(0, 1));
        assert!(zero.is_zero());
        assert!(PolynomialFunction::constant(Arc::clone(&group), &ratio(3, 1)).is_zero());
        assert!(!linear_on_z4().is_zero());
    }

    #[test]
    fn test_canonical_after_every_operation() {
        let f = quadratic_on_z4();
        let g = linear_on_z4();
        assert_canonical(&f.add(&g).unwrap());
        assert_canonical(&f.mul(&g).unwrap());
        assert_canonical(&f.scale(&ratio(-5, 3)));
        assert_canonical(&f.difference(&GroupElement::Scalar(3)).unwrap());
        assert_canonical(
            &f.iterated_difference(&[GroupElement::Scalar(1), GroupElement::Scalar(2)])
                .unwrap(),
        );
    }

    #[test]
    fn test_explain() {
        let f = linear_on_z4();
        let text = f.explain();
        assert!(text.contains("Z/4"));
        assert!(text.contains("f(0) = 0"));
        assert!(text.contains("f(3) = 3/4"));
        // Rendering does not change the function.
        assert_eq!(f, linear_on_z4());
    }
}

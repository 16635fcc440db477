//! Finite abelian groups.
//!
//! This module provides the group structures that functions into R/Z are
//! defined over. Two concrete families are supported:
//!
//! - [`Group::cyclic`]: the cyclic group Z/mZ with addition modulo m
//! - [`Group::direct_sum`]: a direct sum Z/m1Z ⊕ … ⊕ Z/mkZ with
//!   coordinatewise addition
//!
//! Both are closed, tagged variants of the single [`Group`] enum. Every group
//! exposes the same four capabilities: element enumeration, the identity
//! element, addition, and negation.
//!
//! # Group Axioms
//!
//! The concrete variants satisfy the abelian group axioms by construction
//! (modular arithmetic is commutative, associative, and invertible). The rest
//! of the crate trusts this and never re-verifies it.
//!
//! # Example
//!
//! ```
//! use polydiff::group::{Group, GroupElement};
//!
//! let g = Group::cyclic(5).unwrap();
//! assert_eq!(g.order(), 5);
//! assert_eq!(g.identity(), GroupElement::Scalar(0));
//!
//! let sum = g.add(&GroupElement::Scalar(2), &GroupElement::Scalar(3)).unwrap();
//! assert_eq!(sum, GroupElement::Scalar(0)); // 2 + 3 ≡ 0 (mod 5)
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An element of a finite abelian group.
///
/// Cyclic groups use scalar elements; direct sums use fixed-arity tuples.
/// Elements are opaque values: they are compared, hashed, and displayed, but
/// all arithmetic goes through the owning [`Group`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupElement {
    /// An element of a cyclic group, in the range `0..m`.
    Scalar(u32),
    /// An element of a direct sum, one coordinate per summand, each in the
    /// range `0..m_i`.
    Tuple(Vec<u32>),
}

impl GroupElement {
    /// The scalar value, if this is a cyclic-group element.
    #[must_use]
    pub fn as_scalar(&self) -> Option<u32> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Tuple(_) => None,
        }
    }

    /// The coordinates, if this is a direct-sum element.
    #[must_use]
    pub fn as_tuple(&self) -> Option<&[u32]> {
        match self {
            Self::Scalar(_) => None,
            Self::Tuple(coords) => Some(coords),
        }
    }
}

impl fmt::Display for GroupElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Tuple(coords) => {
                let parts: Vec<String> = coords.iter().map(ToString::to_string).collect();
                write!(f, "({})", parts.join(", "))
            }
        }
    }
}

/// A finite abelian group.
///
/// Groups are immutable once constructed and are shared (typically via
/// `Arc`) by every function defined over them. The closed set of variants
/// replaces an open subclassing scheme: adding a new group family means
/// adding a variant that implements the same four operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Group {
    /// The cyclic group Z/mZ. Elements are `Scalar(0)..Scalar(m-1)`.
    Cyclic {
        /// The order m of the group.
        modulus: u32,
    },
    /// A direct sum of cyclic groups. Elements are tuples with coordinate i
    /// in `0..moduli[i]`.
    DirectSum {
        /// Per-coordinate moduli, all at least 1.
        moduli: Vec<u32>,
    },
}

impl Group {
    /// Create the cyclic group Z/mZ.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGroupDefinition`] if `modulus` is zero.
    pub fn cyclic(modulus: u32) -> Result<Self> {
        if modulus < 1 {
            return Err(Error::InvalidGroupDefinition { modulus });
        }
        Ok(Self::Cyclic { modulus })
    }

    /// Create the direct sum Z/m1Z ⊕ … ⊕ Z/mkZ.
    ///
    /// An empty modulus list yields the trivial group whose only element is
    /// the empty tuple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGroupDefinition`] if any modulus is zero.
    pub fn direct_sum(moduli: impl Into<Vec<u32>>) -> Result<Self> {
        let moduli = moduli.into();
        if let Some(&modulus) = moduli.iter().find(|&&m| m < 1) {
            return Err(Error::InvalidGroupDefinition { modulus });
        }
        Ok(Self::DirectSum { moduli })
    }

    /// The number of elements in the group.
    #[must_use]
    pub fn order(&self) -> usize {
        match self {
            Self::Cyclic { modulus } => *modulus as usize,
            Self::DirectSum { moduli } => moduli.iter().map(|&m| m as usize).product(),
        }
    }

    /// The identity element.
    #[must_use]
    pub fn identity(&self) -> GroupElement {
        match self {
            Self::Cyclic { .. } => GroupElement::Scalar(0),
            Self::DirectSum { moduli } => GroupElement::Tuple(vec![0; moduli.len()]),
        }
    }

    /// Whether `element` is a member of this group.
    #[must_use]
    pub fn contains(&self, element: &GroupElement) -> bool {
        self.index_of(element).is_some()
    }

    /// The canonical enumeration index of `element`, or `None` if it is not
    /// a member.
    ///
    /// Indices match the order produced by [`Group::elements`], so a dense
    /// table indexed by them is a total map over the group.
    #[must_use]
    pub fn index_of(&self, element: &GroupElement) -> Option<usize> {
        match (self, element) {
            (Self::Cyclic { modulus }, GroupElement::Scalar(v)) if v < modulus => {
                Some(*v as usize)
            }
            (Self::DirectSum { moduli }, GroupElement::Tuple(coords))
                if coords.len() == moduli.len()
                    && coords.iter().zip(moduli).all(|(c, m)| c < m) =>
            {
                // Mixed radix, first coordinate least significant.
                let mut index = 0usize;
                for (&c, &m) in coords.iter().zip(moduli).rev() {
                    index = index * m as usize + c as usize;
                }
                Some(index)
            }
            _ => None,
        }
    }

    /// The element at a canonical enumeration index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.order()`.
    #[must_use]
    pub fn element(&self, index: usize) -> GroupElement {
        assert!(
            index < self.order(),
            "index {index} out of range for {self} of order {}",
            self.order()
        );
        match self {
            Self::Cyclic { .. } => GroupElement::Scalar(index as u32),
            Self::DirectSum { moduli } => {
                let mut rest = index;
                let coords = moduli
                    .iter()
                    .map(|&m| {
                        let c = (rest % m as usize) as u32;
                        rest /= m as usize;
                        c
                    })
                    .collect();
                GroupElement::Tuple(coords)
            }
        }
    }

    /// Add two group elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if either operand is not a member.
    pub fn add(&self, x: &GroupElement, y: &GroupElement) -> Result<GroupElement> {
        self.check_member(x)?;
        self.check_member(y)?;
        Ok(match (self, x, y) {
            (Self::Cyclic { modulus }, GroupElement::Scalar(a), GroupElement::Scalar(b)) => {
                GroupElement::Scalar((a + b) % modulus)
            }
            (Self::DirectSum { moduli }, GroupElement::Tuple(a), GroupElement::Tuple(b)) => {
                GroupElement::Tuple(
                    moduli
                        .iter()
                        .zip(a.iter().zip(b))
                        .map(|(&m, (&ca, &cb))| (ca + cb) % m)
                        .collect(),
                )
            }
            _ => unreachable!("membership was checked above"),
        })
    }

    /// The additive inverse of a group element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if `x` is not a member.
    pub fn negate(&self, x: &GroupElement) -> Result<GroupElement> {
        self.check_member(x)?;
        Ok(match (self, x) {
            (Self::Cyclic { modulus }, GroupElement::Scalar(a)) => {
                GroupElement::Scalar((modulus - a) % modulus)
            }
            (Self::DirectSum { moduli }, GroupElement::Tuple(a)) => GroupElement::Tuple(
                moduli
                    .iter()
                    .zip(a)
                    .map(|(&m, &c)| (m - c) % m)
                    .collect(),
            ),
            _ => unreachable!("membership was checked above"),
        })
    }

    /// A deterministic, restartable enumeration of all group elements.
    ///
    /// The order is fixed: cyclic groups enumerate `0, 1, …, m-1`; direct
    /// sums enumerate tuples with the first coordinate varying fastest.
    /// Calling `elements()` again restarts from the beginning with the same
    /// order.
    #[must_use]
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            group: self,
            next: 0,
            order: self.order(),
        }
    }

    /// Index-space addition: the index of `element(i) + element(j)`.
    ///
    /// Both indices must be in range; used by the difference engine to avoid
    /// materializing elements in inner loops.
    pub(crate) fn add_indices(&self, i: usize, j: usize) -> usize {
        match self {
            Self::Cyclic { modulus } => (i + j) % *modulus as usize,
            Self::DirectSum { moduli } => {
                let mut rest_i = i;
                let mut rest_j = j;
                let mut index = 0usize;
                let mut radix = 1usize;
                for &m in moduli {
                    let m = m as usize;
                    let c = (rest_i % m + rest_j % m) % m;
                    rest_i /= m;
                    rest_j /= m;
                    index += c * radix;
                    radix *= m;
                }
                index
            }
        }
    }

    fn check_member(&self, element: &GroupElement) -> Result<()> {
        if self.contains(element) {
            Ok(())
        } else {
            Err(Error::unknown_element(element.clone(), self))
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cyclic { modulus } => write!(f, "Z/{modulus}"),
            Self::DirectSum { moduli } => {
                if moduli.is_empty() {
                    return write!(f, "0");
                }
                let parts: Vec<String> = moduli.iter().map(|m| format!("Z/{m}")).collect();
                write!(f, "{}", parts.join(" ⊕ "))
            }
        }
    }
}

/// Iterator over the elements of a [`Group`] in canonical order.
///
/// Created by [`Group::elements`].
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    group: &'a Group,
    next: usize,
    order: usize,
}

impl Iterator for Elements<'_> {
    type Item = GroupElement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.order {
            return None;
        }
        let element = self.group.element(self.next);
        self.next += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Elements<'_> {}

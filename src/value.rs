//! Exact arithmetic in R/Z.
//!
//! Elements of the circle group R/Z are represented by their canonical
//! fractional part: an exact rational in the half-open interval `[0, 1)`.
//! Every constructor and every arithmetic operation re-canonicalizes its
//! result, so a [`Mod1`] observed anywhere in the crate always satisfies
//! `0 <= v < 1`.
//!
//! Values are arbitrary-precision rationals ([`BigRational`]); there is no
//! floating-point mode and the zero test is exact equality, which is what
//! makes the degree test sound.
//!
//! # Example
//!
//! ```
//! use polydiff::value::Mod1;
//!
//! let a = Mod1::from_integers(3, 4).unwrap();
//! let b = Mod1::from_integers(1, 2).unwrap();
//! assert_eq!(&a + &b, Mod1::from_integers(1, 4).unwrap()); // 5/4 wraps to 1/4
//! assert_eq!(&a - &a, Mod1::zero());
//! ```

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::error::{Error, Result};

/// An element of R/Z, stored as its canonical representative in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mod1 {
    value: BigRational,
}

impl Mod1 {
    /// Reduce a rational into `[0, 1)` by subtracting its floor.
    #[must_use]
    pub fn new(value: BigRational) -> Self {
        let floor = value.floor();
        Self {
            value: value - floor,
        }
    }

    /// The canonical zero of R/Z.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            value: BigRational::zero(),
        }
    }

    /// Build a value from an integer numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDenominator`] if `denom` is zero.
    pub fn from_integers(numer: i64, denom: i64) -> Result<Self> {
        if denom == 0 {
            return Err(Error::InvalidDenominator(denom));
        }
        Ok(Self::new(BigRational::new(
            BigInt::from(numer),
            BigInt::from(denom),
        )))
    }

    /// The canonical representative as an exact rational.
    #[must_use]
    pub fn as_ratio(&self) -> &BigRational {
        &self.value
    }

    /// Consume the value, returning the canonical representative.
    #[must_use]
    pub fn into_ratio(self) -> BigRational {
        self.value
    }

    /// Whether this value is the zero of R/Z. Exact, no tolerance.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Multiply by an arbitrary rational scalar, reducing the result.
    #[must_use]
    pub fn scale(&self, scalar: &BigRational) -> Self {
        Self::new(&self.value * scalar)
    }
}

impl Default for Mod1 {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Mod1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Add for &Mod1 {
    type Output = Mod1;

    fn add(self, rhs: Self) -> Mod1 {
        Mod1::new(&self.value + &rhs.value)
    }
}

impl Sub for &Mod1 {
    type Output = Mod1;

    fn sub(self, rhs: Self) -> Mod1 {
        Mod1::new(&self.value - &rhs.value)
    }
}

impl Mul for &Mod1 {
    type Output = Mod1;

    fn mul(self, rhs: Self) -> Mod1 {
        Mod1::new(&self.value * &rhs.value)
    }
}

impl Add for Mod1 {
    type Output = Mod1;

    fn add(self, rhs: Self) -> Mod1 {
        &self + &rhs
    }
}

impl Sub for Mod1 {
    type Output = Mod1;

    fn sub(self, rhs: Self) -> Mod1 {
        &self - &rhs
    }
}

impl Mul for Mod1 {
    type Output = Mod1;

    fn mul(self, rhs: Self) -> Mod1 {
        &self * &rhs
    }
}

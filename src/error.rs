//! Error types for the polydiff library.
//!
//! This module provides the crate-wide error handling using the `thiserror`
//! crate, with specific variants for group construction, function
//! construction, pointwise algebra, and the function-table loader.
//!
//! All errors are precondition violations surfaced immediately to the
//! caller: the library never retries or recovers internally.

use thiserror::Error;

use crate::group::{Group, GroupElement};

/// The main error type for the polydiff library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Group Construction Errors ============
    /// A group constructor was given a non-positive modulus.
    #[error("invalid group definition: modulus {modulus} must be at least 1")]
    InvalidGroupDefinition {
        /// The offending modulus.
        modulus: u32,
    },

    // ============ Function Construction Errors ============
    /// A function's value map omits one or more group elements.
    #[error("value map omits {} group element(s): {}", missing.len(), format_elements(missing))]
    MissingValues {
        /// Every group element without a value, in enumeration order.
        missing: Vec<GroupElement>,
    },

    /// An element was used with a group it does not belong to.
    #[error("element {element} is not a member of {group}")]
    UnknownElement {
        /// The foreign element.
        element: GroupElement,
        /// The group it was used with.
        group: Group,
    },

    // ============ Algebra Errors ============
    /// A binary operation was attempted between functions over different
    /// groups.
    #[error("operands are defined over different groups: {left} vs {right}")]
    GroupMismatch {
        /// Group of the left operand.
        left: Group,
        /// Group of the right operand.
        right: Group,
    },

    /// A multiplication operand is neither a function over the same group
    /// nor a rational scalar.
    #[error("operand is neither a function nor a rational scalar: {found}")]
    InvalidOperand {
        /// Description of what was supplied instead.
        found: String,
    },

    /// A rational value was supplied with a zero denominator.
    #[error("invalid rational denominator: {0}")]
    InvalidDenominator(i64),

    // ============ Catalogue Errors ============
    /// A negative index was passed to a named example constructor.
    #[error("binomial index {index} must be non-negative")]
    InvalidIndex {
        /// The offending index.
        index: i64,
    },

    // ============ Loader Errors ============
    /// An element key in a function document does not match the constrained
    /// grammar (an integer, or a tuple of integers).
    #[error("malformed element key {key:?}: expected an integer or a tuple of integers")]
    MalformedElementKey {
        /// The offending key text.
        key: String,
    },

    /// A function document has the wrong overall shape.
    #[error("malformed function document: {message}")]
    MalformedDocument {
        /// Description of the shape violation.
        message: String,
    },

    /// A function document could not be read.
    #[error("failed to read function document: {message}")]
    Io {
        /// The underlying I/O failure.
        message: String,
    },
}

/// A specialized `Result` type for polydiff operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `UnknownElement` error.
    #[must_use]
    pub fn unknown_element(element: GroupElement, group: &Group) -> Self {
        Self::UnknownElement {
            element,
            group: group.clone(),
        }
    }

    /// Create a new `InvalidOperand` error.
    #[must_use]
    pub fn invalid_operand(found: impl Into<String>) -> Self {
        Self::InvalidOperand {
            found: found.into(),
        }
    }

    /// Create a new `MalformedDocument` error.
    #[must_use]
    pub fn malformed_document(message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }
}

fn format_elements(elements: &[GroupElement]) -> String {
    let parts: Vec<String> = elements.iter().map(ToString::to_string).collect();
    parts.join(", ")
}

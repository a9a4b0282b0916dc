//! Errors produced while laying out a flex container.

use core::fmt::{Display, Formatter, Result as FmtResult};
use std::error::Error;

/// Coarse classification of a [`FlexError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FlexErrorKind {
    /// The caller passed flex settings this crate does not support or that are invalid.
    Configuration,
    /// Container or child geometry was rejected at the boundary.
    Geometry,
    /// The algorithm broke one of its own invariants. Always a bug.
    Invariant,
}

/// Layout failure. None of these are retryable: the same input fails the same way.
#[derive(Clone, Debug, PartialEq)]
pub enum FlexError {
    /// `flex-basis: content` needs intrinsic sizing, which is not available here.
    UnsupportedBasis {
        /// Index of the offending child.
        child: usize,
    },
    /// The container's main-axis extent is negative.
    NegativeContainerExtent {
        /// The rejected extent.
        extent: i32,
    },
    /// A child length (measured size, definite basis, min or max) is negative.
    NegativeLength {
        /// Index of the offending child.
        child: usize,
        /// Which length was rejected.
        field: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// A grow or shrink factor is negative, NaN or infinite.
    InvalidFactor {
        /// Index of the offending child.
        child: usize,
        /// Which factor was rejected.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The caller-owned output slice does not have one slot per child.
    OutputLengthMismatch {
        /// Number of children.
        expected: usize,
        /// Length of the output slice.
        actual: usize,
    },
    /// The §9.7 freeze loop did not freeze every item within its pass bound.
    NotConverged {
        /// Line being resolved, in partition order.
        line: usize,
        /// Passes executed before giving up.
        passes: usize,
    },
}

impl FlexError {
    /// Classify this error.
    pub const fn kind(&self) -> FlexErrorKind {
        match self {
            Self::UnsupportedBasis { .. } | Self::InvalidFactor { .. } => {
                FlexErrorKind::Configuration
            }
            Self::NegativeContainerExtent { .. }
            | Self::NegativeLength { .. }
            | Self::OutputLengthMismatch { .. } => FlexErrorKind::Geometry,
            Self::NotConverged { .. } => FlexErrorKind::Invariant,
        }
    }
}

impl Display for FlexError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnsupportedBasis { child } => {
                write!(formatter, "child {child}: flex-basis: content is not supported")
            }
            Self::NegativeContainerExtent { extent } => {
                write!(formatter, "container main-axis extent is negative: {extent}")
            }
            Self::NegativeLength {
                child,
                field,
                value,
            } => write!(formatter, "child {child}: {field} is negative: {value}"),
            Self::InvalidFactor {
                child,
                field,
                value,
            } => write!(
                formatter,
                "child {child}: {field} must be finite and non-negative, got {value}"
            ),
            Self::OutputLengthMismatch { expected, actual } => write!(
                formatter,
                "output slice holds {actual} rects but there are {expected} children"
            ),
            Self::NotConverged { line, passes } => write!(
                formatter,
                "flexible lengths for line {line} did not converge after {passes} passes"
            ),
        }
    }
}

impl Error for FlexError {}

//! Error types for the checked vector tier.
//!
//! The unchecked operations on vectors follow raw array and pointer semantics:
//! a bad lane index panics, a bad pointer is undefined behavior. Callers that
//! would rather handle a precondition failure go through the `try_*` methods,
//! which report it with a [`SimdError`].

use std::fmt;

/// Errors reported by the checked vector operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimdError {
    /// A lane index was outside `0..lanes`.
    LaneOutOfRange {
        /// The offending lane index.
        lane: usize,
        /// Lane count of the vector.
        lanes: usize,
    },
    /// A slice held fewer elements than the operation needs.
    SliceTooShort {
        /// Number of elements the operation reads or writes.
        required: usize,
        /// Length of the slice that was provided.
        actual: usize,
    },
    /// Two slices that must have the same length did not.
    LengthMismatch {
        /// Length of the left-hand slice.
        left: usize,
        /// Length of the right-hand slice.
        right: usize,
    },
    /// A pointer did not satisfy the alignment of an aligned load or store.
    Misaligned {
        /// Address of the first element.
        address: usize,
        /// Required alignment in bytes.
        alignment: usize,
    },
    /// An integer lane would have been divided by zero.
    DivisionByZero {
        /// First lane holding a zero divisor.
        lane: usize,
    },
    /// A gather or scatter index pointed outside the base slice.
    IndexOutOfBounds {
        /// Lane that carried the index.
        lane: usize,
        /// The offending element index.
        index: usize,
        /// Length of the base slice.
        len: usize,
    },
    /// A swizzle selector referenced a lane that does not exist.
    InvalidSwizzle {
        /// Position in the selector.
        lane: usize,
        /// Source lane it pointed to.
        index: usize,
        /// Lane count of the selector.
        lanes: usize,
    },
}

impl fmt::Display for SimdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdError::LaneOutOfRange { lane, lanes } => {
                write!(f, "Lane {} out of range for a {}-lane vector", lane, lanes)
            }
            SimdError::SliceTooShort { required, actual } => write!(
                f,
                "Slice too short: need {} elements, got {}",
                required, actual
            ),
            SimdError::LengthMismatch { left, right } => write!(
                f,
                "Length mismatch: left has {} elements, right has {}",
                left, right
            ),
            SimdError::Misaligned { address, alignment } => write!(
                f,
                "Misaligned pointer: address {:#x} is not a multiple of {} bytes",
                address, alignment
            ),
            SimdError::DivisionByZero { lane } => {
                write!(f, "Division by zero in lane {}", lane)
            }
            SimdError::IndexOutOfBounds { lane, index, len } => write!(
                f,
                "Index out of bounds: lane {} holds index {} but the base has {} elements",
                lane, index, len
            ),
            SimdError::InvalidSwizzle { lane, index, lanes } => write!(
                f,
                "Invalid swizzle: position {} selects lane {} of a {}-lane vector",
                lane, index, lanes
            ),
        }
    }
}

impl std::error::Error for SimdError {}

/// Result type alias for checked vector operations.
pub type Result<T> = std::result::Result<T, SimdError>;

/// Creates a lane range error.
pub fn lane_out_of_range(lane: usize, lanes: usize) -> SimdError {
    SimdError::LaneOutOfRange { lane, lanes }
}

/// Creates a short slice error.
pub fn slice_too_short(required: usize, actual: usize) -> SimdError {
    SimdError::SliceTooShort { required, actual }
}

/// Creates a length mismatch error.
pub fn length_mismatch(left: usize, right: usize) -> SimdError {
    SimdError::LengthMismatch { left, right }
}

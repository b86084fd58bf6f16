// ============================================================================
// Numeric Errors
// Error types for checked arithmetic and config-driven scaling
// ============================================================================

use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Locates the offending element of a failed batch operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
    /// Position in a sequence
    Index(usize),
    /// Key in a mapping
    Key(String),
}

/// Structural kind of a [`NumericError`].
///
/// Context wrappers report the kind of the failure they wrap, so callers can
/// branch on `err.kind()` without unwinding the chain by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericErrorKind {
    /// Attempted division by zero
    DivisionByZero,
    /// Checked multiplication exceeded the representable range
    Overflow,
    /// Empty batch input or out-of-range discount parameters
    InvalidInput,
    /// Config file missing or unreadable
    ConfigRead,
    /// Config file content is not a valid integer
    ConfigParse,
}

/// Errors produced by arithmetic, discount, and scaling operations.
///
/// Each error is constructed at the point of detection and returned
/// immediately; batch operations fail on the first offending element and
/// surface no partial results.
#[derive(Debug)]
pub enum NumericError {
    /// Divisor was zero
    DivisionByZero,
    /// Checked multiplication overflowed the 32-bit signed range
    Overflow,
    /// Input rejected before any arithmetic (0 stands for "empty input")
    InvalidInput { value: f64 },
    /// A batch element would overflow when scaled
    ElementOverflow { element: ElementRef, value: i32 },
    /// Config file could not be read
    ConfigRead { path: PathBuf, source: io::Error },
    /// Config file content did not parse as an integer
    ConfigParse { path: PathBuf, source: ParseIntError },
    /// Multiplier acquisition failed inside a batch operation
    Multiplier { source: Box<NumericError> },
}

impl NumericError {
    /// The structural kind of this error.
    ///
    /// Wrappers delegate: an [`NumericError::ElementOverflow`] reports
    /// [`NumericErrorKind::Overflow`], and [`NumericError::Multiplier`]
    /// reports the kind of its inner config failure.
    pub fn kind(&self) -> NumericErrorKind {
        match self {
            NumericError::DivisionByZero => NumericErrorKind::DivisionByZero,
            NumericError::Overflow | NumericError::ElementOverflow { .. } => {
                NumericErrorKind::Overflow
            }
            NumericError::InvalidInput { .. } => NumericErrorKind::InvalidInput,
            NumericError::ConfigRead { .. } => NumericErrorKind::ConfigRead,
            NumericError::ConfigParse { .. } => NumericErrorKind::ConfigParse,
            NumericError::Multiplier { source } => source.kind(),
        }
    }

    /// True when the error originated in the config file (read or parse).
    pub fn is_config(&self) -> bool {
        matches!(
            self.kind(),
            NumericErrorKind::ConfigRead | NumericErrorKind::ConfigParse
        )
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => write!(f, "multiplication overflow"),
            NumericError::InvalidInput { value } => write!(f, "invalid input: {}", value),
            NumericError::ElementOverflow {
                element: ElementRef::Index(index),
                value,
            } => {
                write!(f, "overflow at index {}: invalid input: {}", index, value)
            }
            NumericError::ElementOverflow {
                element: ElementRef::Key(key),
                value,
            } => {
                write!(f, "overflow for key {}: invalid input: {}", key, value)
            }
            NumericError::ConfigRead { path, source } => {
                write!(f, "config error at {}: read config: {}", path.display(), source)
            }
            NumericError::ConfigParse { path, source } => {
                write!(
                    f,
                    "config error at {}: parse multiplier: {}",
                    path.display(),
                    source
                )
            }
            NumericError::Multiplier { source } => write!(f, "get multiplier: {}", source),
        }
    }
}

impl std::error::Error for NumericError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NumericError::ConfigRead { source, .. } => Some(source),
            NumericError::ConfigParse { source, .. } => Some(source),
            NumericError::Multiplier { source } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

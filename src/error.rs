//! Error types for subnet calculations.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SubnetError>;

/// Everything that can abort a single calculation.
///
/// None of these are recoverable: the binary prints the message on stderr
/// and exits with a failure status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Malformed dotted-decimal address or octet out of range.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    /// Prefix length not a number or outside 1-32.
    #[error("Invalid CIDR value (1-32): {0}")]
    InvalidCidr(String),

    /// Dotted mask is malformed or its ones are not contiguous.
    #[error("Invalid subnet mask: {0}")]
    InvalidMask(String),

    /// CIDR suffix or subnet mask argument absent.
    #[error("Missing {0}")]
    MissingArgument(&'static str),

    /// Digit string does not fit the conversion type.
    #[error("Numeric value out of range: {0}")]
    NumericOverflow(String),

    /// Help requested or the argument list has the wrong shape.
    #[error("Usage requested")]
    Usage,
}

impl SubnetError {
    /// True when the binary should print the usage text rather than a message.
    pub fn is_usage(&self) -> bool {
        matches!(self, SubnetError::Usage)
    }
}

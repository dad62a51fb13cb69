//! Value types and codecs for IPv4 subnets.
//!
//! This module contains the leaf conversions everything else builds on:
//! - [`address`] - dotted-decimal address parsing and formatting
//! - [`mask`] - prefix length / netmask conversion and validation
//! - [`Ipv4`] - address with CIDR prefix length

mod address;
mod ipv4;
mod mask;

// Re-export public types
pub use address::{decrement_address, format_address, increment_address, parse_address};
pub use ipv4::Ipv4;
pub use mask::{
    is_valid_mask, mask_to_addr, mask_to_prefix, mask_to_wildcard, parse_mask, parse_prefix_len,
    prefix_to_mask, MAX_LENGTH, MIN_CIDR,
};

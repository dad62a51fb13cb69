//! Netmask and CIDR prefix length conversions.

use super::address::parse_address;
use crate::error::{Result, SubnetError};
use std::net::Ipv4Addr;
use std::num::IntErrorKind;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Smallest prefix length accepted from the command line.
pub const MIN_CIDR: u8 = 1;

/// Parse a user supplied prefix length, e.g. the `24` in `10.0.0.1/24`.
///
/// # Errors
/// * [`SubnetError::InvalidCidr`] - not a decimal number, or outside 1-32
/// * [`SubnetError::NumericOverflow`] - digits overflow `u32`
pub fn parse_prefix_len(text: &str) -> Result<u8> {
    let value: u32 = text.parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow => SubnetError::NumericOverflow(text.to_string()),
            _ => SubnetError::InvalidCidr(text.to_string()),
        }
    })?;
    if !(MIN_CIDR as u32..=MAX_LENGTH as u32).contains(&value) {
        log::warn!("Rejected prefix length {value}");
        return Err(SubnetError::InvalidCidr(text.to_string()));
    }
    Ok(value as u8)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_mask::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_to_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidCidr(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits << right_len) & all_bits;

        Ok(mask as u32)
    }
}

/// Prefix length of a well formed mask (its number of set bits).
pub fn mask_to_prefix(mask: u32) -> u8 {
    mask.count_ones() as u8
}

/// True if the ones in `mask` are contiguous and left-aligned.
///
/// The complement of a valid mask is `2^k - 1`, so adding one to it
/// leaves no bit in common.
pub fn is_valid_mask(mask: u32) -> bool {
    let i = !mask;
    let j = i.wrapping_add(1);
    (i & j) == 0
}

/// Host bits of the mask.
pub fn mask_to_wildcard(mask: u32) -> u32 {
    !mask
}

/// Parse the text of a dotted-decimal subnet mask such as `255.255.255.0`.
///
/// Only the dotted-decimal shape is checked here; contiguity of the ones is
/// checked by [`crate::processing::SubnetInfo::new`].
///
/// # Errors
/// * [`SubnetError::InvalidMask`] - not a dotted-decimal value
pub fn parse_mask(text: &str) -> Result<u32> {
    let mask = parse_address(text).map_err(|_| SubnetError::InvalidMask(text.to_string()))?;
    Ok(u32::from(mask))
}

/// Dotted-decimal form of a mask.
pub fn mask_to_addr(mask: u32) -> Ipv4Addr {
    Ipv4Addr::from(mask)
}

//! Dotted-decimal IPv4 address parsing and formatting.
//!
//! Addresses travel through the crate as [`Ipv4Addr`]; every calculation
//! works on `u32::from(addr)`, the numeric (host-order) value.

use crate::error::{Result, SubnetError};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Four groups of ASCII digits separated by single dots, nothing else.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid Regex")
    })
}

/// Parse a strict dotted-decimal IPv4 address.
///
/// No whitespace trimming is done. Each octet must be canonical decimal
/// (`0`-`255`, no leading zeros).
///
/// # Errors
/// * [`SubnetError::InvalidAddress`] - wrong shape, stray characters or octet > 255
///
/// # Examples
/// ```
/// use subnet_mask::models::parse_address;
/// assert_eq!(parse_address("192.168.1.1").unwrap().octets(), [192, 168, 1, 1]);
/// assert!(parse_address("192.168.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    let caps = get_dotted_quad_regex().captures(text).ok_or_else(|| {
        log::warn!("Rejected address {text:?}: not four dot separated numbers");
        SubnetError::InvalidAddress(text.to_string())
    })?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // Group 0 is the whole match.
        let group = caps.get(i + 1).map(|m| m.as_str()).unwrap_or_default();
        *octet = parse_octet(group, text)?;
    }

    let addr = Ipv4Addr::from(octets);
    log::trace!("parse_address({text}) = {:#010x}", u32::from(addr));
    Ok(addr)
}

fn parse_octet(group: &str, text: &str) -> Result<u8> {
    let value: u32 = group.parse().map_err(|_| {
        log::warn!("Rejected address {text:?}: octet {group} out of range");
        SubnetError::InvalidAddress(text.to_string())
    })?;
    if value > u8::MAX as u32 {
        log::warn!("Rejected address {text:?}: octet {value} > 255");
        return Err(SubnetError::InvalidAddress(text.to_string()));
    }
    if group.len() > 1 && group.starts_with('0') {
        log::warn!("Rejected address {text:?}: octet {group} has a leading zero");
        return Err(SubnetError::InvalidAddress(text.to_string()));
    }
    Ok(value as u8)
}

/// Render an address as four dotted decimal octets.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// The address numerically following `addr`. Wraps at `255.255.255.255`.
pub fn increment_address(addr: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr).wrapping_add(1))
}

/// The address numerically preceding `addr`. Wraps at `0.0.0.0`.
pub fn decrement_address(addr: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr).wrapping_sub(1))
}

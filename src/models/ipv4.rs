//! IPv4 address with CIDR prefix length.
//!
//! Provides [`Ipv4`] for values written as `address/prefix`, e.g.
//! `192.168.1.3/24`.

use super::address::parse_address;
use super::mask::{parse_prefix_len, prefix_to_mask};
use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The address as given (host bits not cleared).
    pub addr: Ipv4Addr,
    /// The prefix length (1-32).
    pub prefix: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Parse CIDR notation (e.g. "10.0.0.1/24").
    ///
    /// # Errors
    /// * [`SubnetError::MissingArgument`] - no `/prefix` part
    /// * [`SubnetError::InvalidAddress`] - bad address part
    /// * [`SubnetError::InvalidCidr`] - prefix not in 1-32
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let (addr, prefix) = match addr_cidr.split_once('/') {
            Some((addr, prefix)) if !prefix.is_empty() => (addr, prefix),
            _ => return Err(SubnetError::MissingArgument("CIDR or subnet mask")),
        };
        let addr = parse_address(addr)?;
        let prefix = parse_prefix_len(prefix)?;
        log::debug!("Ipv4::new({addr_cidr}) = {addr}/{prefix}");
        Ok(Ipv4 { addr, prefix })
    }

    /// Netmask as u32.
    pub fn netmask(&self) -> Result<u32> {
        prefix_to_mask(self.prefix)
    }
}

impl FromStr for Ipv4 {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

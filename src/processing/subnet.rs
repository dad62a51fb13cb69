//! Subnet calculations for an address + netmask pair.

use super::classify::{classify, Classification};
use crate::error::{Result, SubnetError};
use crate::models::{
    decrement_address, increment_address, is_valid_mask, mask_to_addr, mask_to_prefix,
    mask_to_wildcard, Ipv4, MAX_LENGTH,
};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Network address: host bits cleared.
pub fn network_address(addr: Ipv4Addr, mask: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask)
}

/// Broadcast address: host bits set.
pub fn broadcast_address(addr: Ipv4Addr, mask: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) | mask_to_wildcard(mask))
}

/// Number of addresses in a subnet with the given prefix length, `2^(32 - len)`.
pub fn total_addresses(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Addresses left after reserving network and broadcast, as an unsigned
/// 32-bit count.
///
/// Two are always subtracted with 32-bit wrapping, so /0 gives 4294967294,
/// /31 gives 0 and /32 gives 4294967295.
pub fn usable_hosts(len: u8) -> u32 {
    (total_addresses(len) as u32).wrapping_sub(2)
}

/// Everything reported about one subnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetInfo {
    /// The address as supplied.
    pub address: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub prefix: u8,
    pub wildcard: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// First usable host (network + 1).
    pub host_min: Ipv4Addr,
    /// Last usable host (broadcast - 1).
    pub host_max: Ipv4Addr,
    pub total_addresses: u64,
    pub usable_hosts: u32,
    pub class: Classification,
}

impl SubnetInfo {
    /// Calculate subnet details for `addr` inside the subnet described by `mask`.
    ///
    /// # Errors
    /// * [`SubnetError::InvalidMask`] - the ones in `mask` are not contiguous
    pub fn new(addr: Ipv4Addr, mask: u32) -> Result<SubnetInfo> {
        if !is_valid_mask(mask) {
            log::warn!("Rejected mask {}: ones are not contiguous", mask_to_addr(mask));
            return Err(SubnetError::InvalidMask(mask_to_addr(mask).to_string()));
        }

        let prefix = mask_to_prefix(mask);
        let network = network_address(addr, mask);
        let broadcast = broadcast_address(addr, mask);

        let info = SubnetInfo {
            address: addr,
            netmask: mask_to_addr(mask),
            prefix,
            wildcard: mask_to_addr(mask_to_wildcard(mask)),
            network,
            broadcast,
            host_min: increment_address(network),
            host_max: decrement_address(broadcast),
            total_addresses: total_addresses(prefix),
            usable_hosts: usable_hosts(prefix),
            class: classify(addr),
        };
        log::debug!(
            "SubnetInfo {addr}/{prefix}: {network} -> {broadcast}, hosts={}",
            info.usable_hosts
        );
        Ok(info)
    }

    /// Calculate subnet details from a CIDR pair.
    pub fn from_cidr(cidr: Ipv4) -> Result<SubnetInfo> {
        SubnetInfo::new(cidr.addr, cidr.netmask()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_mask, prefix_to_mask, MIN_CIDR};

    #[test]
    fn test_network_broadcast() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        let mask = prefix_to_mask(24).unwrap();
        assert_eq!(network_address(ip, mask), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(broadcast_address(ip, mask), Ipv4Addr::new(192, 168, 1, 255));

        let mask = prefix_to_mask(8).unwrap();
        assert_eq!(network_address(ip, mask), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(broadcast_address(ip, mask), Ipv4Addr::new(192, 255, 255, 255));
    }

    #[test]
    fn test_total_addresses() {
        assert_eq!(total_addresses(0), 4294967296);
        assert_eq!(total_addresses(1), 2147483648);
        assert_eq!(total_addresses(24), 256);
        assert_eq!(total_addresses(30), 4);
        assert_eq!(total_addresses(32), 1);
        for p in MIN_CIDR..=MAX_LENGTH {
            assert_eq!(total_addresses(p), 2u64.pow((32 - p) as u32));
        }
    }

    #[test]
    fn test_usable_hosts() {
        assert_eq!(usable_hosts(8), 16777214);
        assert_eq!(usable_hosts(24), 254);
        assert_eq!(usable_hosts(30), 2);
    }

    #[test]
    fn test_usable_hosts_point_to_point_and_host_route() {
        // Known quirk: network and broadcast are always subtracted.
        assert_eq!(usable_hosts(31), 0);
        assert_eq!(usable_hosts(32), 4294967295);
        assert_eq!(usable_hosts(0), 4294967294);
    }

    #[test]
    fn test_subnet_info_class_c_private() {
        let info = SubnetInfo::from_cidr(Ipv4::new("192.168.1.1/24").unwrap()).unwrap();
        assert_eq!(info.address, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(info.netmask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(info.prefix, 24);
        assert_eq!(info.wildcard, Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(info.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(info.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(info.host_min, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(info.host_max, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(info.total_addresses, 256);
        assert_eq!(info.usable_hosts, 254);
        assert_eq!(info.class.to_string(), "Class C, Private");
    }

    #[test]
    fn test_subnet_info_from_mask() {
        let mask = parse_mask("255.255.240.0").unwrap();
        let info = SubnetInfo::new(Ipv4Addr::new(172, 20, 33, 7), mask).unwrap();
        assert_eq!(info.prefix, 20);
        assert_eq!(info.network, Ipv4Addr::new(172, 20, 32, 0));
        assert_eq!(info.broadcast, Ipv4Addr::new(172, 20, 47, 255));
        assert_eq!(info.host_min, Ipv4Addr::new(172, 20, 32, 1));
        assert_eq!(info.host_max, Ipv4Addr::new(172, 20, 47, 254));
        assert_eq!(info.usable_hosts, 4094);
        assert_eq!(info.class.to_string(), "Class B, Private");
    }

    #[test]
    fn test_subnet_info_rejects_bad_mask() {
        assert_eq!(
            SubnetInfo::new(Ipv4Addr::new(192, 168, 1, 3), 0xFFFF00FF),
            Err(SubnetError::InvalidMask("255.255.0.255".to_string()))
        );
    }

    #[test]
    fn test_subnet_invariants() {
        let addrs = [
            Ipv4Addr::new(0, 0, 0, 0),
            Ipv4Addr::new(10, 11, 12, 13),
            Ipv4Addr::new(192, 168, 200, 77),
            Ipv4Addr::new(255, 255, 255, 255),
        ];
        for addr in addrs {
            for p in MIN_CIDR..=MAX_LENGTH {
                let mask = prefix_to_mask(p).unwrap();
                let info = SubnetInfo::new(addr, mask).unwrap();
                let network = u32::from(info.network);
                let broadcast = u32::from(info.broadcast);
                assert_eq!(network & u32::from(info.wildcard), 0);
                assert_eq!(broadcast & mask, network);
                assert_eq!(info.prefix, p);
            }
        }
    }

    #[test]
    fn test_subnet_info_host_route() {
        let info = SubnetInfo::from_cidr(Ipv4::new("10.0.0.5/32").unwrap()).unwrap();
        assert_eq!(info.network, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(info.broadcast, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(info.host_min, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(info.host_max, Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(info.usable_hosts, u32::MAX);
    }
}

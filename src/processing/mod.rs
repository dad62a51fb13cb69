//! Subnet calculation logic.
//!
//! - [`subnet`] - network, broadcast and host range for an address + mask
//! - [`classify`] - classful category and special-use tag

mod classify;
mod subnet;

// Re-export public functions
pub use classify::{classify, AddressClass, Classification, SpecialUse};
pub use subnet::{broadcast_address, network_address, total_addresses, usable_hosts, SubnetInfo};

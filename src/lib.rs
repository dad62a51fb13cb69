//! IPv4 subnet calculator.
//!
//! Given `ADDRESS/CIDR` or `ADDRESS SUBNET_MASK`, reports the netmask,
//! wildcard, address range, usable host range, host count and the classful
//! category of the address.
//!
//! ```
//! let info = subnet_mask::cli::calculate(&["192.168.1.1/24"]).unwrap();
//! assert_eq!(info.usable_hosts, 254);
//! assert_eq!(info.class.to_string(), "Class C, Private");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, SubnetError};
pub use processing::SubnetInfo;

/// Build the complete text written to stdout for one invocation.
///
/// Nothing is produced unless the whole request validates.
pub fn run<S: AsRef<str>>(args: &[S], show_banner: bool) -> Result<String> {
    let request = cli::parse_args(args)?;
    let info = request.resolve()?;

    let mut out = String::new();
    if show_banner {
        out.push_str(&output::banner());
    }
    out.push_str(&output::format_report(
        request.address_text(),
        request.prefix_text(),
        &info,
    ));
    Ok(out)
}

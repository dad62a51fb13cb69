//! Command line argument handling.
//!
//! Turns the raw argument list into a [`Request`] and then into a
//! [`SubnetInfo`]. Printing is left to the binary.

use crate::error::{Result, SubnetError};
use crate::models::{parse_address, parse_mask, Ipv4};
use clap::Parser;
use crate::processing::SubnetInfo;

/// Usage text printed on `-h`, `-?`, unknown flags or missing arguments.
pub const USAGE: &str = "\
Usage: mask ADDRESS/CIDR
  or: mask ADDRESS SUBNET_MASK
Calculate statistics about an IPv4 subnet.

e.g. mask 192.168.1.3/24
  or: mask 192.168.1.3 255.255.255.0
";

/// The two supported invocation forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `mask ADDRESS/CIDR`
    Cidr(String),
    /// `mask ADDRESS SUBNET_MASK`
    Netmask { address: String, mask: String },
}

/// Positional arguments accepted by `mask`.
///
/// Help and version flags are disabled so every flag is rejected and ends
/// in [`USAGE`].
#[derive(Parser, Debug)]
#[command(name = "mask", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// ADDRESS/CIDR, or ADDRESS when a subnet mask follows.
    target: String,
    /// Dotted-decimal subnet mask.
    mask: Option<String>,
}

impl From<Args> for Request {
    fn from(args: Args) -> Self {
        match args.mask {
            None => Request::Cidr(args.target),
            Some(mask) => Request::Netmask {
                address: args.target,
                mask,
            },
        }
    }
}

/// Split the arguments (without the program name) into a [`Request`].
///
/// Any flag, an empty argument list or more than two arguments is a
/// request for usage.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Request> {
    let argv: Vec<&str> = std::iter::once("mask")
        .chain(args.iter().map(|a| a.as_ref()))
        .collect();

    let args = Args::try_parse_from(argv).map_err(|e| {
        log::debug!("Argument error ({:?}), showing usage", e.kind());
        SubnetError::Usage
    })?;
    Ok(args.into())
}

impl Request {
    /// Validate the request and calculate the subnet.
    ///
    /// In netmask form the mask text is checked first, then the address,
    /// then the contiguity of the mask.
    pub fn resolve(&self) -> Result<SubnetInfo> {
        match self {
            Request::Cidr(text) => SubnetInfo::from_cidr(Ipv4::new(text)?),
            Request::Netmask { address, mask } => {
                let mask = parse_mask(mask)?;
                let addr = parse_address(address)?;
                SubnetInfo::new(addr, mask)
            }
        }
    }

    /// Address text exactly as typed.
    pub fn address_text(&self) -> &str {
        match self {
            Request::Cidr(text) => text.split('/').next().unwrap_or_default(),
            Request::Netmask { address, .. } => address,
        }
    }

    /// Text shown after `=` on the `Subnet:` line: the prefix as typed in
    /// CIDR form, `None` in netmask form.
    pub fn prefix_text(&self) -> Option<&str> {
        match self {
            Request::Cidr(text) => text.split_once('/').map(|(_, prefix)| prefix),
            Request::Netmask { .. } => None,
        }
    }
}

/// Parse the arguments and calculate the subnet in one go.
pub fn calculate<S: AsRef<str>>(args: &[S]) -> Result<SubnetInfo> {
    parse_args(args)?.resolve()
}

//! Common SONiC network types used by the SAI metadata layer.
//!
//! This crate provides type-safe representations of the network primitives
//! that appear inside SAI attribute values and entry keys:
//!
//! - [`MacAddress`]: 48-bit Ethernet MAC addresses
//! - [`IpAddress`]: IPv4 and IPv6 addresses, tagged by [`IpAddrFamily`]
//! - [`IpPrefix`]: address + mask pairs as carried by SAI route entries
//! - [`is_valid_vlan_id`]: IEEE 802.1Q VLAN id bounds

mod ip;
mod mac;
mod vlan;

pub use ip::{IpAddrFamily, IpAddress, IpPrefix, Ipv4Address, Ipv6Address};
pub use mac::MacAddress;
pub use vlan::{is_valid_vlan_id, VLAN_ID_MAX, VLAN_ID_MIN};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    #[error("invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("invalid IP prefix format: {0}")]
    InvalidIpPrefix(String),
}

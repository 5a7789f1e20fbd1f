//! IP address and prefix types with safe parsing.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family of an [`IpAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpAddrFamily {
    Ipv4,
    Ipv6,
}

impl fmt::Display for IpAddrFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpAddrFamily::Ipv4 => write!(f, "SAI_IP_ADDR_FAMILY_IPV4"),
            IpAddrFamily::Ipv6 => write!(f, "SAI_IP_ADDR_FAMILY_IPV6"),
        }
    }
}

/// An IPv4 address wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ipv4Address(Ipv4Addr);

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Ipv4Address(Ipv4Addr::new(a, b, c, d))
    }

    pub const fn octets(&self) -> [u8; 4] {
        self.0.octets()
    }

    /// Returns the netmask with `len` leading ones.
    pub fn mask_from_len(len: u8) -> Self {
        let bits = match len {
            0 => 0,
            l if l >= 32 => u32::MAX,
            l => u32::MAX << (32 - u32::from(l)),
        };
        Ipv4Address(Ipv4Addr::from(bits))
    }

    /// Returns true if the address, read as a netmask, is a run of ones
    /// followed only by zeros.
    pub fn is_contiguous_mask(&self) -> bool {
        let bits = u32::from(self.0);
        bits.leading_ones() + bits.trailing_zeros() == 32
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Ipv4Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Ipv4Addr>()
            .map(Ipv4Address)
            .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address(addr)
    }
}

/// An IPv6 address wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ipv6Address(Ipv6Addr);

impl Ipv6Address {
    pub const fn octets(&self) -> [u8; 16] {
        self.0.octets()
    }

    /// Returns the netmask with `len` leading ones.
    pub fn mask_from_len(len: u8) -> Self {
        let bits = match len {
            0 => 0,
            l if l >= 128 => u128::MAX,
            l => u128::MAX << (128 - u32::from(l)),
        };
        Ipv6Address(Ipv6Addr::from(bits))
    }

    /// Returns true if the address, read as a netmask, is a run of ones
    /// followed only by zeros.
    pub fn is_contiguous_mask(&self) -> bool {
        let bits = u128::from(self.0);
        bits.leading_ones() + bits.trailing_zeros() == 128
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Ipv6Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Ipv6Addr>()
            .map(Ipv6Address)
            .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Ipv6Address(addr)
    }
}

/// An IP address that can be either IPv4 or IPv6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpAddress {
    V4(Ipv4Address),
    V6(Ipv6Address),
}

impl IpAddress {
    pub const fn family(&self) -> IpAddrFamily {
        match self {
            IpAddress::V4(_) => IpAddrFamily::Ipv4,
            IpAddress::V6(_) => IpAddrFamily::Ipv6,
        }
    }

    pub const fn is_ipv6(&self) -> bool {
        matches!(self, IpAddress::V6(_))
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpAddress::V4(addr) => addr.fmt(f),
            IpAddress::V6(addr) => addr.fmt(f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            s.parse::<Ipv6Address>().map(IpAddress::V6)
        } else {
            s.parse::<Ipv4Address>().map(IpAddress::V4)
        }
    }
}

impl From<Ipv4Address> for IpAddress {
    fn from(addr: Ipv4Address) -> Self {
        IpAddress::V4(addr)
    }
}

impl From<Ipv6Address> for IpAddress {
    fn from(addr: Ipv6Address) -> Self {
        IpAddress::V6(addr)
    }
}

/// An IP prefix as carried by SAI: an address plus an explicit mask.
///
/// The mask is stored as given, so a prefix received from a caller may hold a
/// non-contiguous mask; [`IpPrefix::has_contiguous_mask`] reports that case.
/// Serializes as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IpPrefix {
    address: IpAddress,
    mask: IpAddress,
}

impl IpPrefix {
    /// Creates a prefix from an address and a prefix length.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix length exceeds 32 (IPv4) or 128 (IPv6).
    pub fn new(address: IpAddress, prefix_len: u8) -> Result<Self, ParseError> {
        let mask = match address {
            IpAddress::V4(_) if prefix_len <= 32 => {
                IpAddress::V4(Ipv4Address::mask_from_len(prefix_len))
            }
            IpAddress::V6(_) if prefix_len <= 128 => {
                IpAddress::V6(Ipv6Address::mask_from_len(prefix_len))
            }
            _ => {
                return Err(ParseError::InvalidIpPrefix(format!(
                    "{}/{}: prefix length exceeds address width",
                    address, prefix_len
                )))
            }
        };

        Ok(IpPrefix { address, mask })
    }

    /// Creates a prefix from an address and an explicit mask.
    ///
    /// # Errors
    ///
    /// Returns an error if the address and mask families differ.
    pub fn with_mask(address: IpAddress, mask: IpAddress) -> Result<Self, ParseError> {
        if address.family() != mask.family() {
            return Err(ParseError::InvalidIpPrefix(format!(
                "{}/{}: address and mask family differ",
                address, mask
            )));
        }

        Ok(IpPrefix { address, mask })
    }

    pub const fn address(&self) -> &IpAddress {
        &self.address
    }

    pub const fn mask(&self) -> &IpAddress {
        &self.mask
    }

    pub const fn family(&self) -> IpAddrFamily {
        self.address.family()
    }

    pub fn has_contiguous_mask(&self) -> bool {
        match self.mask {
            IpAddress::V4(m) => m.is_contiguous_mask(),
            IpAddress::V6(m) => m.is_contiguous_mask(),
        }
    }

    /// Returns the prefix length, or `None` when the mask is not contiguous.
    pub fn prefix_len(&self) -> Option<u8> {
        if !self.has_contiguous_mask() {
            return None;
        }
        let ones = match self.mask {
            IpAddress::V4(m) => u32::from_be_bytes(m.octets()).leading_ones(),
            IpAddress::V6(m) => u128::from_be_bytes(m.octets()).leading_ones(),
        };
        u8::try_from(ones).ok()
    }
}

impl fmt::Display for IpPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix_len() {
            Some(len) => write!(f, "{}/{}", self.address, len),
            None => write!(f, "{}/{}", self.address, self.mask),
        }
    }
}

impl FromStr for IpPrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_str, len_str) = s
            .rsplit_once('/')
            .ok_or_else(|| ParseError::InvalidIpPrefix(s.to_string()))?;

        let address: IpAddress = addr_str.parse()?;

        match len_str.parse::<u8>() {
            Ok(len) => IpPrefix::new(address, len),
            Err(_) => IpPrefix::with_mask(address, len_str.parse()?),
        }
    }
}

impl TryFrom<String> for IpPrefix {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<IpPrefix> for String {
    fn from(prefix: IpPrefix) -> String {
        prefix.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_family() {
        let v4: IpAddress = "10.0.0.1".parse().unwrap();
        let v6: IpAddress = "2001:db8::1".parse().unwrap();
        assert_eq!(v4.family(), IpAddrFamily::Ipv4);
        assert_eq!(v6.family(), IpAddrFamily::Ipv6);
        assert_eq!(v6.family().to_string(), "SAI_IP_ADDR_FAMILY_IPV6");
    }

    #[test]
    fn test_ipv4_contiguous_mask() {
        assert!(Ipv4Address::new(255, 255, 255, 0).is_contiguous_mask());
        assert!(Ipv4Address::new(0, 0, 0, 0).is_contiguous_mask());
        assert!(Ipv4Address::new(255, 255, 255, 255).is_contiguous_mask());
        assert!(!Ipv4Address::new(255, 0, 255, 0).is_contiguous_mask());
    }

    #[test]
    fn test_ipv6_contiguous_mask() {
        let good: Ipv6Address = "ffff:ffff:ffff:ffff::".parse().unwrap();
        let bad: Ipv6Address = "ffff:0:ffff::".parse().unwrap();
        assert!(good.is_contiguous_mask());
        assert!(!bad.is_contiguous_mask());
        assert!(Ipv6Address::mask_from_len(128).is_contiguous_mask());
    }

    #[test]
    fn test_prefix_from_len() {
        let prefix: IpPrefix = "10.0.0.0/24".parse().unwrap();
        assert_eq!(prefix.prefix_len(), Some(24));
        assert_eq!(prefix.mask(), &IpAddress::V4(Ipv4Address::new(255, 255, 255, 0)));
        assert_eq!(prefix.to_string(), "10.0.0.0/24");

        let v6: IpPrefix = "2001:db8::/32".parse().unwrap();
        assert_eq!(v6.prefix_len(), Some(32));
        assert_eq!(v6.family(), IpAddrFamily::Ipv6);
    }

    #[test]
    fn test_prefix_with_non_contiguous_mask() {
        let prefix: IpPrefix = "2001:db8::/ffff:0:ffff::".parse().unwrap();
        assert!(!prefix.has_contiguous_mask());
        assert_eq!(prefix.prefix_len(), None);
    }

    #[test]
    fn test_prefix_family_mismatch() {
        let addr: IpAddress = "10.0.0.0".parse().unwrap();
        let mask: IpAddress = "ffff::".parse().unwrap();
        assert!(IpPrefix::with_mask(addr, mask).is_err());
    }

    #[test]
    fn test_invalid_prefix_length() {
        assert!("10.0.0.0/33".parse::<IpPrefix>().is_err());
        assert!("2001:db8::/129".parse::<IpPrefix>().is_err());
    }
}

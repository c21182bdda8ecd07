use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::errors::DomainError;

/// Address family requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFamily {
    #[default]
    Unspecified,
    Inet,
    Inet6,
}

impl AddressFamily {
    pub fn allows_inet(&self) -> bool {
        matches!(self, AddressFamily::Unspecified | AddressFamily::Inet)
    }

    pub fn allows_inet6(&self) -> bool {
        matches!(self, AddressFamily::Unspecified | AddressFamily::Inet6)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Unspecified => "unspec",
            AddressFamily::Inet => "inet",
            AddressFamily::Inet6 => "inet6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service address with its family fixed: 4 bytes for IPv4, 16 for IPv6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAddress {
    family: AddressFamily,
    bytes: [u8; 16],
    len: usize,
}

impl ResolvedAddress {
    /// Parses an address value, IPv4 first, then IPv6, limited to the
    /// families `family` allows. The first form that parses decides the
    /// family of the result.
    pub fn parse(raw: &str, family: AddressFamily) -> Result<Self, DomainError> {
        if family.allows_inet() {
            if let Ok(v4) = raw.parse::<Ipv4Addr>() {
                return Ok(Self::from(IpAddr::V4(v4)));
            }
        }

        if family.allows_inet6() {
            if let Ok(v6) = raw.parse::<Ipv6Addr>() {
                return Ok(Self::from(IpAddr::V6(v6)));
            }
        }

        Err(DomainError::carrying(DomainError::InvalidAddress, raw))
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Address bytes in network order, exactly 4 or 16 of them.
    pub fn octets(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn byte_len(&self) -> usize {
        self.len
    }

    /// 16-byte form with IPv4 addresses zero-padded at the tail.
    pub fn padded(&self) -> [u8; 16] {
        self.bytes
    }

    pub fn ip(&self) -> IpAddr {
        match self.family {
            AddressFamily::Inet => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(self.octets());
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            _ => IpAddr::V6(Ipv6Addr::from(self.bytes)),
        }
    }
}

impl From<IpAddr> for ResolvedAddress {
    fn from(ip: IpAddr) -> Self {
        // Scratch starts zeroed so the unused tail of an IPv4 address never
        // carries stale bytes.
        let mut bytes = [0u8; 16];
        match ip {
            IpAddr::V4(v4) => {
                bytes[..4].copy_from_slice(&v4.octets());
                Self {
                    family: AddressFamily::Inet,
                    bytes,
                    len: 4,
                }
            }
            IpAddr::V6(v6) => {
                bytes.copy_from_slice(&v6.octets());
                Self {
                    family: AddressFamily::Inet6,
                    bytes,
                    len: 16,
                }
            }
        }
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ip())
    }
}

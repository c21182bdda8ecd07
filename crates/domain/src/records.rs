use crate::address::{AddressFamily, ResolvedAddress};
use crate::port::Protocol;

/// Owned form of a `struct hostent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub name: String,
    pub aliases: Vec<String>,
    pub family: AddressFamily,
    pub addresses: Vec<ResolvedAddress>,
}

impl HostRecord {
    /// `h_length`: byte length shared by every address in the record.
    pub fn address_length(&self) -> usize {
        match self.family {
            AddressFamily::Inet => 4,
            _ => 16,
        }
    }
}

/// Owned form of one `struct gaih_addrtuple` node.
///
/// Environment lookups yield a single address per name, so the node never
/// links to a successor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddrTuple {
    pub name: String,
    pub family: AddressFamily,
    /// Zero-padded when the address is IPv4.
    pub addr: [u8; 16],
    pub scope_id: u32,
}

/// Owned form of a `struct servent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: String,
    pub aliases: Vec<String>,
    /// Host byte order; converted when flattened.
    pub port: u16,
    pub protocol: Protocol,
}

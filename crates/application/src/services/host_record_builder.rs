use nss_kubernetes_domain::fallible::{try_owned, try_single};
use nss_kubernetes_domain::{AddrTuple, DomainError, HostRecord, ResolvedAddress};

pub struct HostRecordBuilder;

impl HostRecordBuilder {
    /// `hostent` shape: the queried name, no aliases, one address.
    pub fn simple(name: &str, address: ResolvedAddress) -> Result<HostRecord, DomainError> {
        Ok(HostRecord {
            name: try_owned(name)?,
            aliases: Vec::new(),
            family: address.family(),
            addresses: try_single(address)?,
        })
    }

    /// `gaih_addrtuple` shape: always a single node.
    pub fn tuple(name: &str, address: ResolvedAddress) -> Result<AddrTuple, DomainError> {
        Ok(AddrTuple {
            name: try_owned(name)?,
            family: address.family(),
            addr: address.padded(),
            scope_id: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nss_kubernetes_domain::AddressFamily;

    fn v4(raw: &str) -> ResolvedAddress {
        ResolvedAddress::parse(raw, AddressFamily::Inet).unwrap()
    }

    #[test]
    fn test_simple_record_has_single_address_and_no_aliases() {
        let record = HostRecordBuilder::simple("redis-master", v4("10.0.0.5")).unwrap();

        assert_eq!(record.name, "redis-master");
        assert!(record.aliases.is_empty());
        assert_eq!(record.family, AddressFamily::Inet);
        assert_eq!(record.addresses.len(), 1);
        assert_eq!(record.address_length(), 4);
    }

    #[test]
    fn test_tuple_pads_ipv4_address() {
        let tuple = HostRecordBuilder::tuple("redis-master", v4("10.0.0.5")).unwrap();

        assert_eq!(tuple.family, AddressFamily::Inet);
        assert_eq!(&tuple.addr[..4], &[10, 0, 0, 5]);
        assert!(tuple.addr[4..].iter().all(|b| *b == 0));
        assert_eq!(tuple.scope_id, 0);
    }
}

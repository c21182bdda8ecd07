use libc::{c_char, c_int, hostent};
use nss_kubernetes_domain::{DomainError, HostRecord};
use smallvec::SmallVec;

use super::af_from_family;
use crate::layout::{LayoutPlan, RecordLayoutWriter, Segment};

/// Flattens `record` into `host`, with every string and array it points to
/// stored in `buffer`. `host` is only modified once the whole record has
/// been written.
pub fn write_hostent(
    record: &HostRecord,
    host: &mut hostent,
    buffer: &mut [u8],
) -> Result<(), DomainError> {
    let plan = LayoutPlan::new()
        .segment(Segment::CStr(record.name.len()))
        .segments(record.aliases.iter().map(|alias| Segment::CStr(alias.len())))
        .segments(
            record
                .addresses
                .iter()
                .map(|address| Segment::Bytes(address.byte_len())),
        )
        .segment(Segment::PointerArray(record.aliases.len()))
        .segment(Segment::PointerArray(record.addresses.len()));

    let mut writer = RecordLayoutWriter::new(buffer, plan)?;

    let name = writer.write_c_str(&record.name);
    let aliases: SmallVec<[*mut c_char; 2]> = record
        .aliases
        .iter()
        .map(|alias| writer.write_c_str(alias))
        .collect();
    let addresses: SmallVec<[*mut c_char; 2]> = record
        .addresses
        .iter()
        .map(|address| writer.write_bytes(address.octets()))
        .collect();
    let alias_list = writer.write_pointer_array(&aliases);
    let addr_list = writer.write_pointer_array(&addresses);
    writer.finish();

    host.h_name = name;
    host.h_aliases = alias_list;
    host.h_addrtype = af_from_family(record.family);
    host.h_length = record.address_length() as c_int;
    host.h_addr_list = addr_list;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{align_up, AlignedBuffer, POINTER_WIDTH};
    use nss_kubernetes_domain::{AddressFamily, ResolvedAddress};
    use std::ffi::CStr;
    use std::ptr;

    fn empty_hostent() -> hostent {
        hostent {
            h_name: ptr::null_mut(),
            h_aliases: ptr::null_mut(),
            h_addrtype: 0,
            h_length: 0,
            h_addr_list: ptr::null_mut(),
        }
    }

    fn record(name: &str, value: &str) -> HostRecord {
        let address = ResolvedAddress::parse(value, AddressFamily::Unspecified).unwrap();
        HostRecord {
            name: name.to_string(),
            aliases: Vec::new(),
            family: address.family(),
            addresses: vec![address],
        }
    }

    fn required(name: &str, address_len: usize) -> usize {
        align_up(name.len() + 1) + align_up(address_len) + 3 * POINTER_WIDTH
    }

    #[test]
    fn test_ipv4_record_layout() {
        let record = record("redis-master", "10.0.0.5");
        let mut buffer = AlignedBuffer::new(required("redis-master", 4));
        let mut host = empty_hostent();

        write_hostent(&record, &mut host, buffer.as_mut_slice()).unwrap();

        unsafe {
            assert_eq!(CStr::from_ptr(host.h_name).to_str().unwrap(), "redis-master");
            assert!((*host.h_aliases).is_null());
            let first = *host.h_addr_list;
            assert_eq!(
                std::slice::from_raw_parts(first.cast::<u8>(), 4),
                &[10, 0, 0, 5]
            );
            assert!((*host.h_addr_list.add(1)).is_null());
        }
        assert_eq!(host.h_addrtype, libc::AF_INET);
        assert_eq!(host.h_length, 4);
    }

    #[test]
    fn test_ipv6_record_layout() {
        let record = record("api", "5::2");
        let mut buffer = AlignedBuffer::new(required("api", 16));
        let mut host = empty_hostent();

        write_hostent(&record, &mut host, buffer.as_mut_slice()).unwrap();

        let expected: std::net::Ipv6Addr = "5::2".parse().unwrap();
        unsafe {
            let first = *host.h_addr_list;
            assert_eq!(
                std::slice::from_raw_parts(first.cast::<u8>(), 16),
                &expected.octets()
            );
        }
        assert_eq!(host.h_addrtype, libc::AF_INET6);
        assert_eq!(host.h_length, 16);
    }

    #[test]
    fn test_short_buffer_leaves_host_untouched() {
        let record = record("redis-master", "10.0.0.5");
        let mut buffer = AlignedBuffer::new(required("redis-master", 4) - 1);
        let mut host = empty_hostent();

        let result = write_hostent(&record, &mut host, buffer.as_mut_slice());

        assert!(matches!(result, Err(DomainError::BufferTooSmall { .. })));
        assert!(host.h_name.is_null());
        assert!(host.h_addr_list.is_null());
    }
}

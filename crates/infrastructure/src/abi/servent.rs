use libc::{c_char, c_int, servent};
use nss_kubernetes_domain::{DomainError, ServiceRecord};
use smallvec::SmallVec;

use crate::layout::{LayoutPlan, RecordLayoutWriter, Segment};

/// Flattens `record` into `serv`. `s_port` is stored in network byte order,
/// as `getservbyname_r` callers expect.
pub fn write_servent(
    record: &ServiceRecord,
    serv: &mut servent,
    buffer: &mut [u8],
) -> Result<(), DomainError> {
    let protocol = record.protocol.as_str();

    let plan = LayoutPlan::new()
        .segment(Segment::CStr(record.name.len()))
        .segment(Segment::CStr(protocol.len()))
        .segments(record.aliases.iter().map(|alias| Segment::CStr(alias.len())))
        .segment(Segment::PointerArray(record.aliases.len()));

    let mut writer = RecordLayoutWriter::new(buffer, plan)?;

    let name = writer.write_c_str(&record.name);
    let proto = writer.write_c_str(protocol);
    let aliases: SmallVec<[*mut c_char; 2]> = record
        .aliases
        .iter()
        .map(|alias| writer.write_c_str(alias))
        .collect();
    let alias_list = writer.write_pointer_array(&aliases);
    writer.finish();

    serv.s_name = name;
    serv.s_aliases = alias_list;
    serv.s_port = c_int::from(record.port.to_be());
    serv.s_proto = proto;

    Ok(())
}

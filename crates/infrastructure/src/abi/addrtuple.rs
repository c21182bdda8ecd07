use libc::{c_char, c_int};
use nss_kubernetes_domain::{AddrTuple, DomainError};
use std::ptr;

use super::af_from_family;
use crate::layout::{LayoutPlan, RecordLayoutWriter, Segment};

/// `struct gaih_addrtuple` from glibc's `<nss.h>`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GaihAddrTuple {
    pub next: *mut GaihAddrTuple,
    pub name: *mut c_char,
    pub family: c_int,
    pub addr: [u32; 4],
    pub scopeid: u32,
}

/// Flattens `tuple` into `buffer` as a single, unlinked node.
///
/// When the caller already holds a node (`previous`), that node is
/// overwritten with the result and returned instead of the copy in the
/// buffer; its name still points into `buffer`.
pub fn write_addrtuple(
    tuple: &AddrTuple,
    buffer: &mut [u8],
    previous: Option<&mut GaihAddrTuple>,
) -> Result<*mut GaihAddrTuple, DomainError> {
    let plan = LayoutPlan::new()
        .segment(Segment::CStr(tuple.name.len()))
        .segment(Segment::of::<GaihAddrTuple>());

    let mut writer = RecordLayoutWriter::new(buffer, plan)?;

    let name = writer.write_c_str(&tuple.name);
    let node = GaihAddrTuple {
        next: ptr::null_mut(),
        name,
        family: af_from_family(tuple.family),
        addr: pack_addr(&tuple.addr),
        scopeid: tuple.scope_id,
    };
    let slot = writer.write_struct(node);
    writer.finish();

    match previous {
        Some(previous) => {
            *previous = node;
            Ok(previous as *mut GaihAddrTuple)
        }
        None => Ok(slot),
    }
}

/// Keeps the bytes in network order; `addr` is declared as `uint32_t[4]`
/// only for alignment.
fn pack_addr(bytes: &[u8; 16]) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

//! getent-style rendering of the flattened records, read back from the
//! caller buffer exactly as a libc consumer would.
use libc::{c_char, hostent, servent};
use nss_kubernetes_infrastructure::abi::GaihAddrTuple;
use std::ffi::CStr;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ptr;

pub fn empty_hostent() -> hostent {
    hostent {
        h_name: ptr::null_mut(),
        h_aliases: ptr::null_mut(),
        h_addrtype: 0,
        h_length: 0,
        h_addr_list: ptr::null_mut(),
    }
}

pub fn empty_servent() -> servent {
    servent {
        s_name: ptr::null_mut(),
        s_aliases: ptr::null_mut(),
        s_port: 0,
        s_proto: ptr::null_mut(),
    }
}

unsafe fn string(ptr: *const c_char) -> String {
    // SAFETY: caller passes a NUL-terminated string.
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Collects a null-terminated `char **` array.
unsafe fn list(mut entries: *mut *mut c_char) -> Vec<*mut c_char> {
    let mut out = Vec::new();
    // SAFETY: caller passes an array ending in a null sentinel.
    unsafe {
        while !(*entries).is_null() {
            out.push(*entries);
            entries = entries.add(1);
        }
    }
    out
}

unsafe fn ip(family: libc::c_int, bytes: *const u8) -> Option<IpAddr> {
    // SAFETY: caller passes 4 bytes for AF_INET and 16 for AF_INET6.
    unsafe {
        match family {
            libc::AF_INET => Some(IpAddr::V4(Ipv4Addr::from(*bytes.cast::<[u8; 4]>()))),
            libc::AF_INET6 => Some(IpAddr::V6(Ipv6Addr::from(*bytes.cast::<[u8; 16]>()))),
            _ => None,
        }
    }
}

/// # Safety
///
/// `host` must be a record filled by the module whose buffer is still alive.
pub unsafe fn hostent(host: &hostent) -> String {
    // SAFETY: per the function contract.
    unsafe {
        let name = string(host.h_name);
        let aliases: Vec<String> = list(host.h_aliases)
            .into_iter()
            .map(|alias| string(alias))
            .collect();

        list(host.h_addr_list)
            .into_iter()
            .filter_map(|addr| ip(host.h_addrtype, addr.cast::<u8>()))
            .map(|addr| {
                let mut line = format!("{:<15} {}", addr, name);
                for alias in &aliases {
                    line.push(' ');
                    line.push_str(alias);
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// # Safety
///
/// `node` must be a tuple written by the module whose buffer is still alive.
pub unsafe fn addrtuple(node: &GaihAddrTuple) -> String {
    let bytes: Vec<u8> = node.addr.iter().flat_map(|word| word.to_ne_bytes()).collect();
    // SAFETY: per the function contract.
    unsafe {
        let name = string(node.name);
        match ip(node.family, bytes.as_ptr()) {
            Some(addr) => format!("{:<15} STREAM {}", addr, name),
            None => format!("{:<15} STREAM {}", "?", name),
        }
    }
}

/// # Safety
///
/// `serv` must be a record filled by the module whose buffer is still alive.
pub unsafe fn servent(serv: &servent) -> String {
    // SAFETY: per the function contract.
    unsafe {
        let mut line = format!(
            "{:<21} {}/{}",
            string(serv.s_name),
            u16::from_be(serv.s_port as u16),
            string(serv.s_proto)
        );
        for alias in list(serv.s_aliases) {
            line.push(' ');
            line.push_str(&string(alias));
        }
        line
    }
}

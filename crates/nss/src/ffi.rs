//! `_nss_kubernetes_*` entry points looked up by glibc.
//!
//! Each entry point converts its raw arguments, runs the matching
//! [`Dispatcher`](crate::Dispatcher) operation and reports failures through
//! `errnop` / `h_errnop`. Nothing is written to the caller's structs on
//! failure.
use libc::{c_char, c_int, c_void, hostent, servent, size_t, socklen_t};
use nss_kubernetes_domain::fallible::utf8_prefix;
use nss_kubernetes_domain::{DomainError, LookupName, NssStatus};
use nss_kubernetes_infrastructure::abi::{errno_for, family_from_af, GaihAddrTuple};
use std::ffi::CStr;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::{debug, Level};

use crate::bootstrap::dispatcher;

/// Borrows a lookup name from C, applying the name rules before UTF-8
/// decoding.
unsafe fn name_arg<'a>(name: *const c_char) -> Result<&'a str, DomainError> {
    if name.is_null() {
        return Err(DomainError::NullArgument("name"));
    }
    // SAFETY: glibc passes a NUL-terminated string that outlives the call.
    let bytes = unsafe { CStr::from_ptr(name) }.to_bytes();
    LookupName::from_bytes(bytes).map(|name| name.as_str())
}

unsafe fn protocol_arg<'a>(protocol: *const c_char) -> Result<Option<&'a str>, DomainError> {
    if protocol.is_null() {
        return Ok(None);
    }
    // SAFETY: as for `name_arg`.
    let bytes = unsafe { CStr::from_ptr(protocol) }.to_bytes();
    std::str::from_utf8(bytes)
        .map(Some)
        .map_err(|_| DomainError::carrying(DomainError::UnsupportedProtocol, utf8_prefix(bytes)))
}

unsafe fn buffer_arg<'a>(buffer: *mut c_char, buflen: size_t) -> Result<&'a mut [u8], DomainError> {
    if buffer.is_null() {
        return Err(DomainError::NullArgument("buffer"));
    }
    // SAFETY: glibc hands over `buflen` writable bytes at `buffer` for the
    // duration of the call.
    Ok(unsafe { std::slice::from_raw_parts_mut(buffer.cast::<u8>(), buflen) })
}

unsafe fn struct_arg<'a, T>(ptr: *mut T, what: &'static str) -> Result<&'a mut T, DomainError> {
    // SAFETY: non-null pointers from glibc point to caller-owned storage.
    unsafe { ptr.as_mut() }.ok_or(DomainError::NullArgument(what))
}

/// Best-effort decoding of a reverse-lookup address, for diagnostics only.
unsafe fn addr_arg(addr: *const c_void, len: socklen_t, af: c_int) -> Option<IpAddr> {
    if addr.is_null() {
        return None;
    }
    // SAFETY: glibc passes `len` readable bytes at `addr`.
    let bytes = unsafe { std::slice::from_raw_parts(addr.cast::<u8>(), len as usize) };
    match (af, bytes.len()) {
        (libc::AF_INET, 4) => {
            let octets: [u8; 4] = bytes.try_into().ok()?;
            Some(IpAddr::V4(Ipv4Addr::from(octets)))
        }
        (libc::AF_INET6, 16) => {
            let octets: [u8; 16] = bytes.try_into().ok()?;
            Some(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        _ => None,
    }
}

/// [`addr_arg`], skipped unless a debug event would be recorded.
unsafe fn addr_for_log(addr: *const c_void, len: socklen_t, af: c_int) -> Option<IpAddr> {
    if !tracing::enabled!(Level::DEBUG) {
        return None;
    }
    // SAFETY: forwarded from the caller.
    unsafe { addr_arg(addr, len, af) }
}

unsafe fn set<T>(ptr: *mut T, value: T) {
    if !ptr.is_null() {
        // SAFETY: non-null out-parameters are writable by caller contract.
        unsafe { *ptr = value };
    }
}

unsafe fn fail(error: DomainError, errnop: *mut c_int, h_errnop: *mut c_int) -> NssStatus {
    debug!(error = %error, status = error.status().as_str(), "Lookup failed");
    // SAFETY: forwarded out-parameters.
    unsafe {
        set(errnop, errno_for(&error));
        set(h_errnop, error.host_errno() as c_int);
    }
    error.status()
}

/// Forward lookup, `hostent` shape, caller-chosen family, with optional TTL
/// and canonical name.
///
/// # Safety
///
/// Arguments must follow the glibc NSS `gethostbyname3_r` contract.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn _nss_kubernetes_gethostbyname3_r(
    name: *const c_char,
    af: c_int,
    host: *mut hostent,
    buffer: *mut c_char,
    buflen: size_t,
    errnop: *mut c_int,
    h_errnop: *mut c_int,
    ttlp: *mut i32,
    canonp: *mut *mut c_char,
) -> NssStatus {
    let result = (|| -> Result<*mut c_char, DomainError> {
        let family = family_from_af(af)?;
        // SAFETY: arguments come straight from glibc.
        let (name, host, buffer) = unsafe {
            (
                name_arg(name)?,
                struct_arg(host, "host")?,
                buffer_arg(buffer, buflen)?,
            )
        };
        dispatcher().host_by_name_family(name, family, host, buffer)
    })();

    // SAFETY: forwarded out-parameters.
    unsafe {
        match result {
            Ok(canonical) => {
                set(ttlp, dispatcher().ttl());
                set(canonp, canonical);
                NssStatus::Success
            }
            Err(error) => fail(error, errnop, h_errnop),
        }
    }
}

/// # Safety
///
/// Arguments must follow the glibc NSS `gethostbyname2_r` contract.
#[no_mangle]
pub unsafe extern "C" fn _nss_kubernetes_gethostbyname2_r(
    name: *const c_char,
    af: c_int,
    host: *mut hostent,
    buffer: *mut c_char,
    buflen: size_t,
    errnop: *mut c_int,
    h_errnop: *mut c_int,
) -> NssStatus {
    // SAFETY: same contract, without the optional outputs.
    unsafe {
        _nss_kubernetes_gethostbyname3_r(
            name,
            af,
            host,
            buffer,
            buflen,
            errnop,
            h_errnop,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
        )
    }
}

/// # Safety
///
/// Arguments must follow the glibc NSS `gethostbyname_r` contract.
#[no_mangle]
pub unsafe extern "C" fn _nss_kubernetes_gethostbyname_r(
    name: *const c_char,
    host: *mut hostent,
    buffer: *mut c_char,
    buflen: size_t,
    errnop: *mut c_int,
    h_errnop: *mut c_int,
) -> NssStatus {
    let result = (|| -> Result<(), DomainError> {
        // SAFETY: arguments come straight from glibc.
        let (name, host, buffer) = unsafe {
            (
                name_arg(name)?,
                struct_arg(host, "host")?,
                buffer_arg(buffer, buflen)?,
            )
        };
        dispatcher().host_by_name(name, host, buffer)
    })();

    match result {
        Ok(()) => NssStatus::Success,
        // SAFETY: forwarded out-parameters.
        Err(error) => unsafe { fail(error, errnop, h_errnop) },
    }
}

/// Forward lookup, `gaih_addrtuple` shape, used by `getaddrinfo`.
///
/// # Safety
///
/// Arguments must follow the glibc NSS `gethostbyname4_r` contract; `*pat`
/// is either null or a node the module may overwrite.
#[no_mangle]
pub unsafe extern "C" fn _nss_kubernetes_gethostbyname4_r(
    name: *const c_char,
    pat: *mut *mut GaihAddrTuple,
    buffer: *mut c_char,
    buflen: size_t,
    errnop: *mut c_int,
    h_errnop: *mut c_int,
    ttlp: *mut i32,
) -> NssStatus {
    let result = (|| -> Result<(), DomainError> {
        // SAFETY: arguments come straight from glibc.
        let (name, pat, buffer) = unsafe {
            (
                name_arg(name)?,
                struct_arg(pat, "pat")?,
                buffer_arg(buffer, buflen)?,
            )
        };
        // SAFETY: a non-null `*pat` is a caller-owned node.
        let previous = unsafe { (*pat).as_mut() };
        let node = dispatcher().host_tuple_by_name(name, buffer, previous)?;
        *pat = node;
        Ok(())
    })();

    // SAFETY: forwarded out-parameters.
    unsafe {
        match result {
            Ok(()) => {
                set(ttlp, dispatcher().ttl());
                NssStatus::Success
            }
            Err(error) => fail(error, errnop, h_errnop),
        }
    }
}

/// # Safety
///
/// Arguments must follow the glibc NSS `gethostbyaddr2_r` contract.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn _nss_kubernetes_gethostbyaddr2_r(
    addr: *const c_void,
    len: socklen_t,
    af: c_int,
    _host: *mut hostent,
    _buffer: *mut c_char,
    _buflen: size_t,
    errnop: *mut c_int,
    h_errnop: *mut c_int,
    _ttlp: *mut i32,
) -> NssStatus {
    let dispatcher = dispatcher();
    // SAFETY: arguments come straight from glibc.
    let addr = unsafe { addr_for_log(addr, len, af) };
    match dispatcher.host_by_addr(addr) {
        Ok(()) => NssStatus::Success,
        // SAFETY: forwarded out-parameters.
        Err(error) => unsafe { fail(error, errnop, h_errnop) },
    }
}

/// # Safety
///
/// Arguments must follow the glibc NSS `gethostbyaddr_r` contract.
#[no_mangle]
pub unsafe extern "C" fn _nss_kubernetes_gethostbyaddr_r(
    addr: *const c_void,
    len: socklen_t,
    af: c_int,
    host: *mut hostent,
    buffer: *mut c_char,
    buflen: size_t,
    errnop: *mut c_int,
    h_errnop: *mut c_int,
) -> NssStatus {
    // SAFETY: same contract, without the TTL output.
    unsafe {
        _nss_kubernetes_gethostbyaddr2_r(
            addr,
            len,
            af,
            host,
            buffer,
            buflen,
            errnop,
            h_errnop,
            std::ptr::null_mut(),
        )
    }
}

/// # Safety
///
/// Arguments must follow the glibc NSS `getservbyname_r` contract.
#[no_mangle]
pub unsafe extern "C" fn _nss_kubernetes_getservbyname_r(
    name: *const c_char,
    protocol: *const c_char,
    serv: *mut servent,
    buffer: *mut c_char,
    buflen: size_t,
    errnop: *mut c_int,
) -> NssStatus {
    let result = (|| -> Result<(), DomainError> {
        // SAFETY: arguments come straight from glibc.
        let (name, protocol, serv, buffer) = unsafe {
            (
                name_arg(name)?,
                protocol_arg(protocol)?,
                struct_arg(serv, "serv")?,
                buffer_arg(buffer, buflen)?,
            )
        };
        dispatcher().service_by_name(name, protocol, serv, buffer)
    })();

    match result {
        Ok(()) => NssStatus::Success,
        // SAFETY: forwarded out-parameter.
        Err(error) => unsafe { fail(error, errnop, std::ptr::null_mut()) },
    }
}

/// # Safety
///
/// Arguments must follow the glibc NSS `getservbyport_r` contract.
#[no_mangle]
pub unsafe extern "C" fn _nss_kubernetes_getservbyport_r(
    port: c_int,
    protocol: *const c_char,
    _serv: *mut servent,
    _buffer: *mut c_char,
    _buflen: size_t,
    errnop: *mut c_int,
) -> NssStatus {
    // SAFETY: argument comes straight from glibc.
    let protocol = unsafe { protocol_arg(protocol) }.unwrap_or(None);
    // `port` arrives in network byte order.
    let port = u16::from_be(port as u16);

    match dispatcher().service_by_port(port, protocol) {
        Ok(()) => NssStatus::Success,
        // SAFETY: forwarded out-parameter.
        Err(error) => unsafe { fail(error, errnop, std::ptr::null_mut()) },
    }
}

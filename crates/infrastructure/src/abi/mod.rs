//! Flattening of owned records into the glibc NSS structs.
mod addrtuple;
mod hostent;
mod servent;

pub use addrtuple::{write_addrtuple, GaihAddrTuple};
pub use hostent::write_hostent;
pub use servent::write_servent;

use libc::c_int;
use nss_kubernetes_domain::{AddressFamily, DomainError};

pub fn family_from_af(af: c_int) -> Result<AddressFamily, DomainError> {
    match af {
        libc::AF_UNSPEC => Ok(AddressFamily::Unspecified),
        libc::AF_INET => Ok(AddressFamily::Inet),
        libc::AF_INET6 => Ok(AddressFamily::Inet6),
        other => Err(DomainError::UnsupportedFamily(other)),
    }
}

pub fn af_from_family(family: AddressFamily) -> c_int {
    match family {
        AddressFamily::Unspecified => libc::AF_UNSPEC,
        AddressFamily::Inet => libc::AF_INET,
        AddressFamily::Inet6 => libc::AF_INET6,
    }
}

/// `errno` value written through `errnop` alongside a failed status.
pub fn errno_for(error: &DomainError) -> c_int {
    match error {
        DomainError::InvalidName(_)
        | DomainError::DottedName(_)
        | DomainError::VariableNotSet(_)
        | DomainError::ReverseLookupUnsupported
        | DomainError::PortLookupUnsupported => libc::ENOENT,
        DomainError::InvalidAddress(_)
        | DomainError::InvalidPort(_)
        | DomainError::NullArgument(_) => libc::EINVAL,
        DomainError::UnsupportedProtocol(_) => libc::EPROTONOSUPPORT,
        DomainError::UnsupportedFamily(_) => libc::EAFNOSUPPORT,
        DomainError::BufferTooSmall { .. } => libc::ERANGE,
        DomainError::AllocationFailed => libc::ENOMEM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_round_trip() {
        for family in [
            AddressFamily::Unspecified,
            AddressFamily::Inet,
            AddressFamily::Inet6,
        ] {
            assert_eq!(family_from_af(af_from_family(family)), Ok(family));
        }
    }

    #[test]
    fn test_unknown_family_is_rejected() {
        assert_eq!(
            family_from_af(libc::AF_UNIX),
            Err(DomainError::UnsupportedFamily(libc::AF_UNIX))
        );
    }

    #[test]
    fn test_buffer_too_small_maps_to_erange() {
        let error = DomainError::BufferTooSmall {
            required: 64,
            available: 8,
        };
        assert_eq!(errno_for(&error), libc::ERANGE);
    }
}

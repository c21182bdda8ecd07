use thiserror::Error;

use crate::fallible::try_owned;
use crate::status::{HostErrno, NssStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid service name: {0:?}")]
    InvalidName(String),

    #[error("Service names cannot contain dots: {0}")]
    DottedName(String),

    #[error("Environment variable not set: {0}")]
    VariableNotSet(String),

    #[error("Invalid address value: {0:?}")]
    InvalidAddress(String),

    #[error("Invalid port value: {0:?}")]
    InvalidPort(String),

    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),

    #[error("Unsupported address family: {0}")]
    UnsupportedFamily(i32),

    #[error("Reverse host lookups are not supported")]
    ReverseLookupUnsupported,

    #[error("Service lookups by port are not supported")]
    PortLookupUnsupported,

    #[error("Buffer too small: {required} bytes required, {available} available")]
    BufferTooSmall { required: usize, available: usize },

    #[error("Memory allocation failed")]
    AllocationFailed,

    #[error("Null pointer passed for {0}")]
    NullArgument(&'static str),
}

impl DomainError {
    /// Value-carrying error such as `DottedName(value)`. Becomes
    /// [`DomainError::AllocationFailed`] when the value cannot be copied.
    pub fn carrying(variant: fn(String) -> DomainError, value: &str) -> DomainError {
        match try_owned(value) {
            Ok(value) => variant(value),
            Err(e) => e,
        }
    }

    /// Status reported to the name service switch for this failure.
    pub fn status(&self) -> NssStatus {
        match self {
            DomainError::InvalidName(_)
            | DomainError::DottedName(_)
            | DomainError::VariableNotSet(_)
            | DomainError::ReverseLookupUnsupported
            | DomainError::PortLookupUnsupported => NssStatus::NotFound,
            DomainError::BufferTooSmall { .. } => NssStatus::TryAgain,
            DomainError::InvalidAddress(_)
            | DomainError::InvalidPort(_)
            | DomainError::UnsupportedProtocol(_)
            | DomainError::UnsupportedFamily(_)
            | DomainError::AllocationFailed
            | DomainError::NullArgument(_) => NssStatus::Unavail,
        }
    }

    /// Fine-grained resolver reason that accompanies [`DomainError::status`].
    pub fn host_errno(&self) -> HostErrno {
        match self {
            DomainError::InvalidName(_)
            | DomainError::DottedName(_)
            | DomainError::VariableNotSet(_)
            | DomainError::ReverseLookupUnsupported
            | DomainError::PortLookupUnsupported => HostErrno::HostNotFound,
            // glibc only grows the buffer and retries for NETDB_INTERNAL + ERANGE.
            DomainError::BufferTooSmall { .. } => HostErrno::NetdbInternal,
            DomainError::UnsupportedFamily(_) => HostErrno::NoData,
            DomainError::InvalidAddress(_)
            | DomainError::InvalidPort(_)
            | DomainError::UnsupportedProtocol(_)
            | DomainError::AllocationFailed
            | DomainError::NullArgument(_) => HostErrno::NoRecovery,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::BufferTooSmall { .. })
    }
}

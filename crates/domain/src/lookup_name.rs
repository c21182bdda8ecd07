use std::fmt;

use crate::errors::DomainError;
use crate::fallible::utf8_prefix;

/// Short service name as handed to the resolver, e.g. `redis-master`.
///
/// Kubernetes service environment variables are keyed by bare service
/// names, so anything with a domain part can never match and is rejected
/// up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupName<'a>(&'a str);

impl<'a> LookupName<'a> {
    pub fn parse(name: &'a str) -> Result<Self, DomainError> {
        if name.contains('.') {
            return Err(DomainError::carrying(DomainError::DottedName, name));
        }
        if name.contains('\0') {
            return Err(DomainError::carrying(DomainError::InvalidName, name));
        }
        Ok(Self(name))
    }

    /// Same as [`LookupName::parse`] for raw bytes coming from a C string.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, DomainError> {
        if bytes.contains(&b'.') {
            return Err(DomainError::carrying(
                DomainError::DottedName,
                utf8_prefix(bytes),
            ));
        }
        let name = std::str::from_utf8(bytes)
            .map_err(|_| DomainError::carrying(DomainError::InvalidName, utf8_prefix(bytes)))?;
        Self::parse(name)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for LookupName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

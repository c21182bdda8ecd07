use std::fmt;
use std::num::NonZeroU16;

use crate::errors::DomainError;

/// Transport protocol of a service record. Only TCP is published through
/// the service environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Tcp,
}

impl Protocol {
    /// A missing protocol means TCP; anything but an exact `tcp` is refused.
    pub fn parse(protocol: Option<&str>) -> Result<Self, DomainError> {
        match protocol {
            None | Some("tcp") => Ok(Protocol::Tcp),
            Some(other) => Err(DomainError::carrying(DomainError::UnsupportedProtocol, other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPort {
    port: NonZeroU16,
    protocol: Protocol,
}

impl ResolvedPort {
    /// Parses a decimal port in `1..=65535`. The whole string must be
    /// digits: no sign, no whitespace, no trailing characters.
    pub fn parse(raw: &str, protocol: Protocol) -> Result<Self, DomainError> {
        let invalid = || DomainError::carrying(DomainError::InvalidPort, raw);

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let value: u16 = raw.parse().map_err(|_| invalid())?;
        let port = NonZeroU16::new(value).ok_or_else(invalid)?;

        Ok(Self { port, protocol })
    }

    pub fn port(&self) -> u16 {
        self.port.get()
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
}

impl fmt::Display for ResolvedPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.port, self.protocol)
    }
}

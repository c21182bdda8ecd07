//! nss-kubernetes Domain Layer
pub mod address;
pub mod config;
pub mod env_key;
pub mod errors;
pub mod fallible;
pub mod lookup_name;
pub mod port;
pub mod records;
pub mod status;

pub use address::{AddressFamily, ResolvedAddress};
pub use config::{Config, ConfigError, LoggingConfig, LookupConfig};
pub use env_key::{EnvKeySuffix, EnvironmentVariableKey};
pub use errors::DomainError;
pub use lookup_name::LookupName;
pub use port::{Protocol, ResolvedPort};
pub use records::{AddrTuple, HostRecord, ServiceRecord};
pub use status::{HostErrno, NssStatus};

use nss_kubernetes_domain::{
    AddrTuple, AddressFamily, DomainError, EnvKeySuffix, HostRecord, LookupName, ResolvedAddress,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::EnvironmentReader;
use crate::services::{EnvironmentKeyResolver, HostRecordBuilder};

pub struct ResolveHostUseCase {
    keys: EnvironmentKeyResolver,
}

impl ResolveHostUseCase {
    pub fn new(env: Arc<dyn EnvironmentReader>) -> Self {
        Self {
            keys: EnvironmentKeyResolver::new(env),
        }
    }

    /// Resolves `name` through `<NAME>_SERVICE_HOST`.
    #[instrument(skip(self))]
    pub fn lookup(&self, name: &str, family: AddressFamily) -> Result<ResolvedAddress, DomainError> {
        let name = LookupName::parse(name)?;
        let raw = self.keys.resolve(name, EnvKeySuffix::ServiceHost)?;

        let address = ResolvedAddress::parse(&raw, family).map_err(|e| {
            warn!(name = %name, value = %raw, family = %family, "Malformed service host value");
            e
        })?;

        debug!(name = %name, address = %address, "Service host resolved");
        Ok(address)
    }

    /// Simple `hostent`-shaped result.
    pub fn execute(&self, name: &str, family: AddressFamily) -> Result<HostRecord, DomainError> {
        let address = self.lookup(name, family)?;
        HostRecordBuilder::simple(name, address)
    }

    /// Tuple-shaped result for `gethostbyname4_r`, any family.
    pub fn execute_tuple(&self, name: &str) -> Result<AddrTuple, DomainError> {
        let address = self.lookup(name, AddressFamily::Unspecified)?;
        HostRecordBuilder::tuple(name, address)
    }
}

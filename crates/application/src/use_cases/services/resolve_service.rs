use nss_kubernetes_domain::{
    DomainError, EnvKeySuffix, LookupName, Protocol, ResolvedPort, ServiceRecord,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::EnvironmentReader;
use crate::services::{EnvironmentKeyResolver, ServiceRecordBuilder};

pub struct ResolveServiceUseCase {
    keys: EnvironmentKeyResolver,
}

impl ResolveServiceUseCase {
    pub fn new(env: Arc<dyn EnvironmentReader>) -> Self {
        Self {
            keys: EnvironmentKeyResolver::new(env),
        }
    }

    /// Resolves `name` through `<NAME>_SERVICE_PORT`. Only `tcp` (or no
    /// protocol at all) is accepted.
    #[instrument(skip(self))]
    pub fn execute(&self, name: &str, protocol: Option<&str>) -> Result<ServiceRecord, DomainError> {
        let name = LookupName::parse(name)?;
        let protocol = Protocol::parse(protocol)?;
        let raw = self.keys.resolve(name, EnvKeySuffix::ServicePort)?;

        let port = ResolvedPort::parse(&raw, protocol).map_err(|e| {
            warn!(name = %name, value = %raw, "Malformed service port value");
            e
        })?;

        debug!(name = %name, port = %port, "Service port resolved");
        ServiceRecordBuilder::build(name.as_str(), port)
    }
}

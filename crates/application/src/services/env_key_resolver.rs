use nss_kubernetes_domain::{DomainError, EnvKeySuffix, EnvironmentVariableKey, LookupName};
use std::sync::Arc;
use tracing::debug;

use crate::ports::EnvironmentReader;

/// Maps a service name onto its environment variable and reads it.
pub struct EnvironmentKeyResolver {
    env: Arc<dyn EnvironmentReader>,
}

impl EnvironmentKeyResolver {
    pub fn new(env: Arc<dyn EnvironmentReader>) -> Self {
        Self { env }
    }

    pub fn resolve(&self, name: LookupName<'_>, suffix: EnvKeySuffix) -> Result<String, DomainError> {
        let key = EnvironmentVariableKey::build(name, suffix)?;

        match self.env.read(key.as_str()) {
            Some(value) => {
                debug!(name = %name, key = %key, value = %value, "Environment variable found");
                Ok(value)
            }
            None => {
                debug!(name = %name, key = %key, "Environment variable not set");
                Err(DomainError::VariableNotSet(key.into_string()))
            }
        }
    }
}

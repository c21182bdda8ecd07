use std::fmt;

use crate::errors::DomainError;
use crate::lookup_name::LookupName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKeySuffix {
    ServiceHost,
    ServicePort,
}

impl EnvKeySuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKeySuffix::ServiceHost => "SERVICE_HOST",
            EnvKeySuffix::ServicePort => "SERVICE_PORT",
        }
    }
}

/// Name of the variable the orchestrator exports for a service.
///
/// `redis-master` + [`EnvKeySuffix::ServiceHost`] gives
/// `REDIS_MASTER_SERVICE_HOST`, the same transform kubelet applies when it
/// writes the variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentVariableKey(String);

impl EnvironmentVariableKey {
    pub fn build(name: LookupName<'_>, suffix: EnvKeySuffix) -> Result<Self, DomainError> {
        let name = name.as_str();
        let suffix = suffix.as_str();

        let mut key = String::new();
        key.try_reserve_exact(name.len() + 1 + suffix.len())
            .map_err(|_| DomainError::AllocationFailed)?;

        key.extend(name.chars().map(|c| match c {
            '-' => '_',
            c => c.to_ascii_uppercase(),
        }));
        key.push('_');
        key.push_str(suffix);

        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EnvironmentVariableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

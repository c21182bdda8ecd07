use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// TTL in seconds reported through `ttlp`.
    #[serde(default)]
    pub ttl: i32,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self { ttl: 0 }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `off` keeps the module silent inside host processes; any other level
    /// (`error` .. `trace`) turns on stderr output at that level.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn is_enabled(&self) -> bool {
        !self.level.eq_ignore_ascii_case("off")
    }
}

fn default_log_level() -> String {
    "off".to_string()
}

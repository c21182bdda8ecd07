mod errors;
mod logging;
mod lookup;
mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;
pub use root::{Config, DEFAULT_CONFIG_PATH};

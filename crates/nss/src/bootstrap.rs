use nss_kubernetes_domain::{Config, ConfigError, LoggingConfig};
use nss_kubernetes_infrastructure::system::ProcessEnvironment;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::dispatcher::Dispatcher;

/// Overrides the configuration file location.
pub const CONFIG_ENV: &str = "NSS_KUBERNETES_CONFIG";

/// `EnvFilter` directive that turns on diagnostics regardless of the
/// configuration file, e.g. `NSS_KUBERNETES_LOG=debug`.
pub const LOG_ENV: &str = "NSS_KUBERNETES_LOG";

static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

/// Process-wide dispatcher over the real environment, built on first use.
pub fn dispatcher() -> &'static Dispatcher {
    DISPATCHER.get_or_init(|| {
        let loaded = load_config();
        let config = loaded.as_ref().cloned().unwrap_or_default();

        init_logging(&config.logging);
        if let Err(e) = &loaded {
            warn!(error = %e, "Invalid configuration, using defaults");
        }
        debug!(
            version = env!("CARGO_PKG_VERSION"),
            ttl = config.lookup.ttl,
            "nss-kubernetes initialized"
        );

        Dispatcher::new(Arc::new(ProcessEnvironment::new()), &config.lookup)
    })
}

/// Loads the configuration. Under secure execution only the system-wide
/// file is read.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = override_var(CONFIG_ENV, secure_execution());
    Config::load(path.as_deref())
}

/// Whether the process runs with elevated privileges (setuid, setgid or
/// file capabilities), as reported by the kernel through `AT_SECURE`.
fn secure_execution() -> bool {
    // SAFETY: getauxval only reads the auxiliary vector.
    unsafe { libc::getauxval(libc::AT_SECURE) != 0 }
}

/// Non-empty value of an override variable, or `None` under secure
/// execution.
fn override_var(name: &str, secure: bool) -> Option<String> {
    if secure {
        return None;
    }
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Installs a stderr subscriber when diagnostics are asked for. A host
/// process that already set a global subscriber keeps it.
pub fn init_logging(logging: &LoggingConfig) {
    let directive = match override_var(LOG_ENV, secure_execution()) {
        Some(directive) => directive,
        None if logging.is_enabled() => logging.level.to_ascii_lowercase(),
        None => return,
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

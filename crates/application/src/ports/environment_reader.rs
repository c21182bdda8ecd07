/// Read-only key lookup over the process environment.
///
/// Implementations must hand back a private copy of the value: the
/// environment is shared with the rest of the host process and may change
/// under a running lookup.
pub trait EnvironmentReader: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
}

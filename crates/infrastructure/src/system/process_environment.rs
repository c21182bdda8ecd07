use nss_kubernetes_application::ports::EnvironmentReader;

/// The real process environment, as populated by kubelet.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentReader for ProcessEnvironment {
    fn read(&self, key: &str) -> Option<String> {
        // var_os copies the value out while holding std's environment lock.
        // Non UTF-8 values are kept lossily and then fail to parse.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_set_variable() {
        std::env::set_var("NSS_K8S_INFRA_PROBE_SERVICE_HOST", "10.1.2.3");

        let env = ProcessEnvironment::new();

        assert_eq!(
            env.read("NSS_K8S_INFRA_PROBE_SERVICE_HOST"),
            Some("10.1.2.3".to_string())
        );
    }

    #[test]
    fn test_unset_variable_is_none() {
        std::env::remove_var("NSS_K8S_INFRA_MISSING_SERVICE_HOST");

        let env = ProcessEnvironment::new();

        assert_eq!(env.read("NSS_K8S_INFRA_MISSING_SERVICE_HOST"), None);
    }
}

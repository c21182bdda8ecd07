use nss_kubernetes_domain::{EnvKeySuffix, EnvironmentVariableKey, LookupName};

fn key(name: &str, suffix: EnvKeySuffix) -> String {
    EnvironmentVariableKey::build(LookupName::parse(name).unwrap(), suffix)
        .unwrap()
        .into_string()
}

#[test]
fn test_host_key_uppercases_and_replaces_dashes() {
    assert_eq!(
        key("redis-master", EnvKeySuffix::ServiceHost),
        "REDIS_MASTER_SERVICE_HOST"
    );
}

#[test]
fn test_port_key_uses_port_suffix() {
    assert_eq!(
        key("redis-master", EnvKeySuffix::ServicePort),
        "REDIS_MASTER_SERVICE_PORT"
    );
}

#[test]
fn test_mixed_case_and_digits() {
    assert_eq!(
        key("Oh-Marmalade-2", EnvKeySuffix::ServiceHost),
        "OH_MARMALADE_2_SERVICE_HOST"
    );
}

#[test]
fn test_existing_underscores_are_kept() {
    assert_eq!(key("a_b-c", EnvKeySuffix::ServiceHost), "A_B_C_SERVICE_HOST");
}

#[test]
fn test_empty_name_still_gets_suffix() {
    assert_eq!(key("", EnvKeySuffix::ServiceHost), "_SERVICE_HOST");
}

#[test]
fn test_suffix_strings() {
    assert_eq!(EnvKeySuffix::ServiceHost.as_str(), "SERVICE_HOST");
    assert_eq!(EnvKeySuffix::ServicePort.as_str(), "SERVICE_PORT");
}

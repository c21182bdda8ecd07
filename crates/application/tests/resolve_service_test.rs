use nss_kubernetes_application::use_cases::ResolveServiceUseCase;
use nss_kubernetes_domain::{DomainError, NssStatus, Protocol};
use std::sync::Arc;

mod helpers;
use helpers::MockEnvironment;

fn use_case(env: &MockEnvironment) -> ResolveServiceUseCase {
    ResolveServiceUseCase::new(Arc::new(env.clone()))
}

#[test]
fn test_tcp_service_port() {
    let env = MockEnvironment::with_vars(&[("REDIS_MASTER_SERVICE_PORT", "6379")]);

    let record = use_case(&env).execute("redis-master", Some("tcp")).unwrap();

    assert_eq!(record.name, "redis-master");
    assert!(record.aliases.is_empty());
    assert_eq!(record.port, 6379);
    assert_eq!(record.protocol, Protocol::Tcp);
}

#[test]
fn test_missing_protocol_means_tcp() {
    let env = MockEnvironment::with_vars(&[("REDIS_MASTER_SERVICE_PORT", "6379")]);

    let record = use_case(&env).execute("redis-master", None).unwrap();

    assert_eq!(record.protocol, Protocol::Tcp);
}

#[test]
fn test_udp_is_rejected_before_reading_environment() {
    let env = MockEnvironment::with_vars(&[("REDIS_MASTER_SERVICE_PORT", "6379")]);

    let error = use_case(&env)
        .execute("redis-master", Some("udp"))
        .unwrap_err();

    assert_eq!(error, DomainError::UnsupportedProtocol("udp".to_string()));
    assert_eq!(error.status(), NssStatus::Unavail);
    assert!(env.reads().is_empty());
}

#[test]
fn test_malformed_ports_are_unavailable() {
    for raw in ["6379abc", "0", "65536", "", "-1"] {
        let env = MockEnvironment::with_vars(&[("REDIS_MASTER_SERVICE_PORT", raw)]);

        let error = use_case(&env).execute("redis-master", None).unwrap_err();

        assert_eq!(error, DomainError::InvalidPort(raw.to_string()));
        assert_eq!(error.status(), NssStatus::Unavail);
    }
}

#[test]
fn test_unset_port_is_not_found() {
    let env = MockEnvironment::with_vars(&[("REDIS_MASTER_SERVICE_HOST", "10.0.0.5")]);

    let error = use_case(&env).execute("redis-master", None).unwrap_err();

    assert_eq!(
        error,
        DomainError::VariableNotSet("REDIS_MASTER_SERVICE_PORT".to_string())
    );
    assert_eq!(error.status(), NssStatus::NotFound);
}

#[test]
fn test_dotted_name_is_not_found() {
    let env = MockEnvironment::new();

    let error = use_case(&env).execute("redis.default", None).unwrap_err();

    assert_eq!(error.status(), NssStatus::NotFound);
    assert!(env.reads().is_empty());
}

use nss_kubernetes_domain::{DomainError, HostErrno, NssStatus};

#[test]
fn test_absent_data_is_not_found() {
    let errors = [
        DomainError::DottedName("oh.marmalade".to_string()),
        DomainError::VariableNotSet("OH_MARMALADE_SERVICE_HOST".to_string()),
        DomainError::InvalidName("\u{fffd}".to_string()),
        DomainError::ReverseLookupUnsupported,
        DomainError::PortLookupUnsupported,
    ];

    for error in errors {
        assert_eq!(error.status(), NssStatus::NotFound, "{error}");
        assert_eq!(error.host_errno(), HostErrno::HostNotFound, "{error}");
    }
}

#[test]
fn test_malformed_values_are_unavailable() {
    let errors = [
        DomainError::InvalidAddress("!!!!!!".to_string()),
        DomainError::InvalidPort("0".to_string()),
        DomainError::UnsupportedProtocol("udp".to_string()),
        DomainError::AllocationFailed,
    ];

    for error in errors {
        assert_eq!(error.status(), NssStatus::Unavail, "{error}");
        assert_eq!(error.host_errno(), HostErrno::NoRecovery, "{error}");
        assert!(!error.is_retryable());
    }
}

#[test]
fn test_unsupported_family_reports_no_data() {
    let error = DomainError::UnsupportedFamily(1);

    assert_eq!(error.status(), NssStatus::Unavail);
    assert_eq!(error.host_errno(), HostErrno::NoData);
}

#[test]
fn test_buffer_too_small_is_retryable() {
    let error = DomainError::BufferTooSmall {
        required: 48,
        available: 47,
    };

    assert_eq!(error.status(), NssStatus::TryAgain);
    assert_eq!(error.host_errno(), HostErrno::NetdbInternal);
    assert!(error.is_retryable());
}

#[test]
fn test_status_values_match_nss_h() {
    assert_eq!(NssStatus::TryAgain as i32, -2);
    assert_eq!(NssStatus::Unavail as i32, -1);
    assert_eq!(NssStatus::NotFound as i32, 0);
    assert_eq!(NssStatus::Success as i32, 1);
}

#[test]
fn test_carrying_copies_the_value_into_the_variant() {
    assert_eq!(
        DomainError::carrying(DomainError::DottedName, "oh.marmalade"),
        DomainError::DottedName("oh.marmalade".to_string())
    );
    assert_eq!(
        DomainError::carrying(DomainError::InvalidPort, "0"),
        DomainError::InvalidPort("0".to_string())
    );
}

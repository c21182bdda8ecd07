use nss_kubernetes_domain::{DomainError, Protocol, ResolvedPort};

#[test]
fn test_valid_port() {
    let port = ResolvedPort::parse("6379", Protocol::Tcp).unwrap();

    assert_eq!(port.port(), 6379);
    assert_eq!(port.protocol(), Protocol::Tcp);
    assert_eq!(port.to_string(), "6379/tcp");
}

#[test]
fn test_port_bounds() {
    assert_eq!(ResolvedPort::parse("1", Protocol::Tcp).unwrap().port(), 1);
    assert_eq!(ResolvedPort::parse("65535", Protocol::Tcp).unwrap().port(), 65535);
}

#[test]
fn test_invalid_ports() {
    for raw in ["0", "65536", "99999999999", "", "80x", " 80", "80 ", "+80", "-1", "0x50"] {
        assert_eq!(
            ResolvedPort::parse(raw, Protocol::Tcp),
            Err(DomainError::InvalidPort(raw.to_string())),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_protocol_defaults_to_tcp() {
    assert_eq!(Protocol::parse(None), Ok(Protocol::Tcp));
    assert_eq!(Protocol::parse(Some("tcp")), Ok(Protocol::Tcp));
}

#[test]
fn test_other_protocols_are_unsupported() {
    for raw in ["udp", "TCP", "sctp", ""] {
        assert_eq!(
            Protocol::parse(Some(raw)),
            Err(DomainError::UnsupportedProtocol(raw.to_string()))
        );
    }
}

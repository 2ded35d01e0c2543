use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(port_from_env(None).unwrap(), DEFAULT_PORT);
    assert_eq!(port_from_env(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn port_parses_numeric_value() {
    assert_eq!(port_from_env(Some("8080")).unwrap(), 8080);
    assert_eq!(port_from_env(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn port_rejects_garbage() {
    let err = port_from_env(Some("http")).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref v) if v == "http"));
    assert_eq!(err.to_string(), "invalid PORT \"http\"");
}

#[test]
fn port_rejects_out_of_range() {
    assert!(port_from_env(Some("70000")).is_err());
}

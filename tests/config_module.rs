use formlink::config::{ConfigError, ExtensionConfig, LaunchMode, ParameterKey};
use std::fs;

#[test]
fn config_module_loads_yaml_with_defaults() {
    let config = ExtensionConfig::from_yaml_str(
        r#"
base_url: "https://forms.example.com/play/a/app?tenantId=t-1&amp;source=sharebutton"
"#,
    )
    .expect("config");

    assert_eq!(config.username_sheet, "Username");
    assert_eq!(config.readiness.timeout_ms, 10_000);
    assert_eq!(config.readiness.poll_interval_ms, 100);
    assert_eq!(config.launch_mode, LaunchMode::EmbeddedFrame);
    assert_eq!(
        config.parameters.get(&ParameterKey::IssuerName).map(String::as_str),
        Some("Issuer Name Param")
    );
    assert_eq!(
        config.effective_trusted_origin().as_deref(),
        Some("https://forms.example.com/")
    );
}

#[test]
fn config_module_reads_full_file_from_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("formlink.yaml");
    fs::write(
        &path,
        r#"
base_url: "https://forms.example.com/play/a/app?tenantId=t-1"
trusted_origin: "https://forms.example.com/play/"
username_sheet: "Viewer"
parameters:
  IssuerName: "Issuer"
  StartDate: "From"
  EndDate: "To"
readiness:
  timeout_ms: 2000
  poll_interval_ms: 50
launch_mode: new_window
username_fallback:
  use_display_name: true
  placeholder: "Unknown User"
"#,
    )
    .expect("write config");

    let config = ExtensionConfig::from_path(&path).expect("config");

    assert_eq!(config.username_sheet, "Viewer");
    assert_eq!(config.launch_mode, LaunchMode::NewWindow);
    assert_eq!(
        config.parameters.get(&ParameterKey::EndDate).map(String::as_str),
        Some("To")
    );
    assert_eq!(config.readiness.timeout_ms, 2_000);
    assert!(config.username_fallback.use_display_name);
    assert_eq!(config.username_fallback.placeholder, "Unknown User");
    assert_eq!(
        config.effective_trusted_origin().as_deref(),
        Some("https://forms.example.com/play/")
    );
}

#[test]
fn config_module_rejects_base_outside_trusted_origin() {
    let err = ExtensionConfig::from_yaml_str(
        r#"
base_url: "https://evil.example.net/play?a=1"
trusted_origin: "https://forms.example.com/"
"#,
    )
    .expect_err("untrusted base");

    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("does not start with trusted_origin"));
}

#[test]
fn config_module_rejects_poll_interval_above_timeout() {
    let err = ExtensionConfig::from_yaml_str(
        r#"
base_url: "https://forms.example.com/play?a=1"
readiness:
  timeout_ms: 100
  poll_interval_ms: 500
"#,
    )
    .expect_err("interval too long");

    assert!(err
        .to_string()
        .contains("readiness.poll_interval_ms (500) must not exceed readiness.timeout_ms (100)"));
}

#[test]
fn config_module_rejects_blank_parameter_binding() {
    let err = ExtensionConfig::from_yaml_str(
        r#"
base_url: "https://forms.example.com/play?a=1"
parameters:
  StartDate: "  "
"#,
    )
    .expect_err("blank binding");

    assert!(err.to_string().contains("parameter binding for `StartDate`"));
}

#[test]
fn config_module_reports_parse_and_read_errors() {
    let parse = ExtensionConfig::from_yaml_str("base_url: [").expect_err("bad yaml");
    assert!(matches!(parse, ConfigError::Parse { .. }));

    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.yaml");
    let read = ExtensionConfig::from_path(&missing).expect_err("missing file");
    assert!(matches!(read, ConfigError::Read { .. }));
}

#[test]
fn config_module_trusted_origin_ignores_whitespace_around_base() {
    let config = ExtensionConfig::from_yaml_str(
        r#"
base_url: "  https://forms.example.com/play?a=1"
"#,
    )
    .expect("config");

    assert_eq!(
        config.effective_trusted_origin().as_deref(),
        Some("https://forms.example.com/")
    );
}

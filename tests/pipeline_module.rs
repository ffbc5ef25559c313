use formlink::config::ExtensionConfig;
use formlink::host::scripted::ScriptedHost;
use formlink::logging::{LogLevel, Logger};
use formlink::pipeline::build_form_url;
use formlink::readiness::ReadinessState;

const BASE: &str = "https://forms.example.com/play/a/app?tenantId=t-1&source=sharebutton";

#[test]
fn pipeline_module_builds_reference_scenario() {
    let host = ScriptedHost::new()
        .with_dashboard("Q1 Report")
        .with_worksheet("Summary")
        .with_identity_sheet("Username", "jdoe@example.com", None)
        .with_unique_user_id("should-not-be-used")
        .with_parameter("Issuer Name Param", "Acme")
        .with_parameter("Start Date", "2026-01-01")
        .with_parameter("End Date", "2026-03-31");
    let mut logger = Logger::new();

    let result = build_form_url(
        &host,
        ReadinessState::Ready,
        &ExtensionConfig::new(BASE),
        &mut logger,
    )
    .expect("build succeeds");

    let expected = format!(
        "{BASE}&DashboardName=Q1%20Report&ViewName=Summary&IssuerName=Acme&StartDate=2026-01-01&EndDate=2026-03-31&Username=jdoe%40example.com"
    );
    assert_eq!(result.url, expected);
    assert_eq!(result.url.matches("sharebutton&DashboardName").count(), 1);
    assert_eq!(logger.count(LogLevel::Warn), 0);
}

#[test]
fn pipeline_module_unresolved_identity_still_builds() {
    let host = ScriptedHost::new()
        .with_dashboard("Q1 Report")
        .with_worksheet("Summary")
        .with_parameter("Issuer Name Param", "Acme")
        .with_parameter("Start Date", "2026-01-01")
        .with_parameter("End Date", "2026-03-31");
    let mut logger = Logger::new();

    let result = build_form_url(
        &host,
        ReadinessState::Ready,
        &ExtensionConfig::new(BASE),
        &mut logger,
    )
    .expect("build succeeds");

    assert!(result.url.ends_with("&Username="));
    assert_eq!(logger.count(LogLevel::Warn), 2);
}

#[test]
fn pipeline_module_missing_parameter_keeps_other_fields() {
    let host = ScriptedHost::new()
        .with_dashboard("Q1 Report")
        .with_worksheet("Summary")
        .with_unique_user_id("u-42")
        .with_parameter("Issuer Name Param", "Acme")
        .with_parameter("End Date", "2026-03-31");
    let mut logger = Logger::new();

    let result = build_form_url(
        &host,
        ReadinessState::Ready,
        &ExtensionConfig::new(BASE),
        &mut logger,
    )
    .expect("build succeeds");

    assert!(result.url.ends_with(
        "&DashboardName=Q1%20Report&ViewName=Summary&IssuerName=Acme&StartDate=&EndDate=2026-03-31&Username=u-42"
    ));
}

use crate::config::ParameterKey;
use crate::context::HostContext;
use crate::parameters::ParameterSet;

pub const QUERY_KEYS: [&str; 6] = [
    "DashboardName",
    "ViewName",
    "IssuerName",
    "StartDate",
    "EndDate",
    "Username",
];

/// Replaces HTML-escaped ampersands left over from pasting the base out of markup.
pub fn normalize_base(base: &str) -> String {
    base.replace("&amp;", "&")
}

pub fn query_pairs<'a>(
    context: &'a HostContext,
    params: &'a ParameterSet,
) -> [(&'static str, &'a str); 6] {
    [
        ("DashboardName", context.dashboard_name.as_str()),
        ("ViewName", context.view_name.as_str()),
        ("IssuerName", params.get(ParameterKey::IssuerName)),
        ("StartDate", params.get(ParameterKey::StartDate)),
        ("EndDate", params.get(ParameterKey::EndDate)),
        ("Username", context.username.as_str()),
    ]
}

pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn build_url(base: &str, context: &HostContext, params: &ParameterSet) -> String {
    let base = normalize_base(base.trim());
    let query = encode_query(&query_pairs(context, params));
    format!("{base}{}{query}", base_separator(&base))
}

fn base_separator(base: &str) -> &'static str {
    if base.ends_with('?') || base.ends_with('&') {
        ""
    } else if base.contains('?') {
        "&"
    } else {
        "?"
    }
}

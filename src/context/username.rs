use super::Resolution;
use crate::config::UsernameFallback;
use crate::host::{HostClient, HostEnvironment, SummaryDataOptions};
use crate::logging::Logger;

pub fn sheet_identity<H: HostClient>(host: &H, sheet_name: &str) -> Resolution {
    let sheets = match host.worksheets() {
        Ok(sheets) => sheets,
        Err(err) => return Resolution::unresolved("sheet_identity", err.to_string()),
    };
    if !sheets.iter().any(|sheet| sheet.name == sheet_name) {
        return Resolution::unresolved(
            "sheet_identity",
            format!("no worksheet named `{sheet_name}`"),
        );
    }

    let table =
        match host.summary_data(sheet_name, SummaryDataOptions::single_cell_ignoring_selection()) {
            Ok(table) => table,
            Err(err) => return Resolution::unresolved("sheet_identity", err.to_string()),
        };
    match table.first_cell() {
        Some(cell) if !cell.display().is_empty() => Resolution::Value(cell.display().to_string()),
        _ => Resolution::unresolved(
            "sheet_identity",
            format!("worksheet `{sheet_name}` returned no value"),
        ),
    }
}

fn environment_identifier(environment: &HostEnvironment) -> Resolution {
    match environment.unique_user_id.as_deref() {
        Some(id) if !id.is_empty() => Resolution::Value(id.to_string()),
        _ => Resolution::unresolved("environment_identifier", "no unique user id provided"),
    }
}

fn environment_display_name(environment: &HostEnvironment) -> Resolution {
    match environment.display_name.as_deref() {
        Some(name) if !name.is_empty() => Resolution::Value(name.to_string()),
        _ => Resolution::unresolved("environment_display_name", "no display name provided"),
    }
}

pub fn resolve_username<H: HostClient>(
    host: &H,
    sheet_name: &str,
    fallback: &UsernameFallback,
    logger: &mut Logger,
) -> String {
    if let Some(value) = first_match(sheet_identity(host, sheet_name), logger) {
        return value;
    }

    match host.environment() {
        Ok(environment) => {
            if let Some(value) = first_match(environment_identifier(&environment), logger) {
                return value;
            }
            if fallback.use_display_name {
                if let Some(value) = first_match(environment_display_name(&environment), logger) {
                    return value;
                }
            }
        }
        Err(err) => {
            Resolution::unresolved("environment", err.to_string()).log_unresolved(logger);
        }
    }

    if !fallback.placeholder.is_empty() {
        logger.info(
            "context.username_placeholder",
            format!("username unresolved; using `{}`", fallback.placeholder),
        );
    }
    fallback.placeholder.clone()
}

fn first_match(resolution: Resolution, logger: &mut Logger) -> Option<String> {
    if let Some(value) = resolution.non_empty() {
        return Some(value.to_string());
    }
    resolution.log_unresolved(logger);
    None
}

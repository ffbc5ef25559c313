pub mod config;
pub mod context;
pub mod host;
pub mod logging;
pub mod parameters;
pub mod pipeline;
pub mod readiness;
pub mod ui_gate;
pub mod url_builder;

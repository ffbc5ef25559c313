use super::{LogEntry, LogSurface};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonlFileSurface {
    path: PathBuf,
}

impl JsonlFileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LogSurface for JsonlFileSurface {
    fn append_line(&mut self, entry: &LogEntry) {
        let payload = serde_json::json!({
            "timestamp": entry.timestamp,
            "level": entry.level.as_str(),
            "event": entry.event,
            "message": entry.message,
        });

        let Ok(line) = serde_json::to_string(&payload) else {
            return;
        };

        if let Some(parent) = self.path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let Ok(mut file) = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        else {
            return;
        };
        let _ = writeln!(file, "{line}");
    }

    // the file keeps history only
    fn set_status(&mut self, _message: &str) {}
}

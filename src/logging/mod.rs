mod jsonl;
mod memory;

pub use jsonl::JsonlFileSurface;
pub use memory::MemorySurface;

use chrono::{SecondsFormat, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub event: String,
    pub message: String,
}

impl LogEntry {
    pub fn render(&self) -> String {
        format!(
            "[{}] {} {}",
            self.timestamp,
            self.level.as_str().to_ascii_uppercase(),
            self.message
        )
    }
}

pub trait LogSurface {
    fn append_line(&mut self, entry: &LogEntry);
    fn set_status(&mut self, message: &str);
}

#[derive(Default)]
pub struct Logger {
    surfaces: Vec<Box<dyn LogSurface>>,
    entries: Vec<LogEntry>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface(mut self, surface: impl LogSurface + 'static) -> Self {
        self.attach(surface);
        self
    }

    pub fn attach(&mut self, surface: impl LogSurface + 'static) {
        self.surfaces.push(Box::new(surface));
    }

    pub fn info(&mut self, event: &str, message: impl Into<String>) {
        self.record(LogLevel::Info, event, message.into());
    }

    pub fn warn(&mut self, event: &str, message: impl Into<String>) {
        self.record(LogLevel::Warn, event, message.into());
    }

    pub fn error(&mut self, event: &str, message: impl Into<String>) {
        self.record(LogLevel::Error, event, message.into());
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    pub fn status(&self) -> Option<&str> {
        self.entries.last().map(|e| e.message.as_str())
    }

    pub fn debug_text(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn record(&mut self, level: LogLevel, event: &str, message: String) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            level,
            event: event.to_string(),
            message,
        };
        for surface in &mut self.surfaces {
            surface.append_line(&entry);
            surface.set_status(&entry.message);
        }
        self.entries.push(entry);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("surfaces", &self.surfaces.len())
            .field("entries", &self.entries.len())
            .finish()
    }
}

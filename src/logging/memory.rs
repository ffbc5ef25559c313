use super::{LogEntry, LogSurface};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MemoryState {
    lines: Vec<String>,
    status: String,
}

/// In-memory debug text and status line. Clones share the same buffers, so a
/// handle kept by the caller observes what the logger wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.state.borrow().lines.join("\n")
    }

    pub fn lines(&self) -> Vec<String> {
        self.state.borrow().lines.clone()
    }

    pub fn status(&self) -> String {
        self.state.borrow().status.clone()
    }
}

impl LogSurface for MemorySurface {
    fn append_line(&mut self, entry: &LogEntry) {
        self.state.borrow_mut().lines.push(entry.render());
    }

    fn set_status(&mut self, message: &str) {
        self.state.borrow_mut().status = message.to_string();
    }
}

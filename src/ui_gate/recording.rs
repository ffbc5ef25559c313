use super::FormSurface;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    pub trigger_enabled: bool,
    pub trigger_history: Vec<bool>,
    pub frame_src: Option<String>,
    pub container_visible: bool,
    pub opened_windows: Vec<String>,
    pub missing: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_element(mut self, id: &str) -> Self {
        self.missing.push(id.to_string());
        self
    }
}

impl FormSurface for RecordingSurface {
    fn missing_elements(&self) -> Vec<String> {
        self.missing.clone()
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
        self.trigger_history.push(enabled);
    }

    fn navigate_frame(&mut self, url: &str) {
        self.frame_src = Some(url.to_string());
    }

    fn reveal_container(&mut self) {
        self.container_visible = true;
    }

    fn open_window(&mut self, url: &str) {
        self.opened_windows.push(url.to_string());
    }
}

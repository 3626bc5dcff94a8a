use crate::ports::Reporter;

/// Captures reporter output as `kind: message` events.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<(String, String)>,
    pub summary_rows: Vec<(String, String)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: &str, message: &str) {
        self.events.push((kind.to_string(), message.to_string()));
    }

    pub fn of_kind(&self, kind: &str) -> Vec<&str> {
        self.events.iter().filter(|(k, _)| k == kind).map(|(_, m)| m.as_str()).collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.of_kind("error")
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.of_kind("warning")
    }

    pub fn stages(&self) -> Vec<&str> {
        self.of_kind("stage")
    }
}

impl Reporter for RecordingReporter {
    fn header(&mut self, title: &str) {
        self.push("header", title);
    }

    fn stage(&mut self, index: usize, title: &str) {
        self.push("stage", &format!("{}. {}", index, title));
    }

    fn success(&mut self, message: &str) {
        self.push("success", message);
    }

    fn info(&mut self, message: &str) {
        self.push("info", message);
    }

    fn warning(&mut self, message: &str) {
        self.push("warning", message);
    }

    fn error(&mut self, message: &str) {
        self.push("error", message);
    }

    fn summary(&mut self, title: &str, rows: &[(String, String)]) {
        self.push("summary", title);
        self.summary_rows = rows.to_vec();
    }
}

use pkgdash::prelude::*;
use std::sync::Mutex;

/// Mock ProgressReporter that records every message for assertions
pub struct MockProgressReporter {
    messages: Mutex<Vec<String>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    fn record(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

impl Default for MockProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(&format!("[{}/{}] {}", current, total, message.unwrap_or("")));
    }

    fn report_error(&self, message: &str) {
        self.record(message);
    }

    fn report_completion(&self, message: &str) {
        self.record(message);
    }
}

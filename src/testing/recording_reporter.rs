use crate::ports::Reporter;
use std::sync::{Arc, Mutex};

/// Reporter that keeps every message, prefixed with its level.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    fn record(&self, level: &str, message: &str) {
        self.messages.lock().unwrap().push(format!("{}: {}", level, message));
    }
}

impl Reporter for RecordingReporter {
    fn step(&self, number: usize, message: &str) {
        self.record(&format!("step {}", number), message);
    }

    fn info(&self, message: &str) {
        self.record("info", message);
    }

    fn success(&self, message: &str) {
        self.record("success", message);
    }

    fn warn(&self, message: &str) {
        self.record("warn", message);
    }

    fn error(&self, message: &str) {
        self.record("error", message);
    }

    fn line(&self, message: &str) {
        self.record("line", message);
    }
}

//! Notifier seam
//!
//! The dashboard surfaces transient user-facing messages through an
//! external toast collaborator. This trait is that seam; every view
//! error and success passes through it instead of propagating.

use std::sync::Mutex;

/// Transient user-facing notifications
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that routes through tracing (headless use)
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "toast", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "toast", "{message}");
    }
}

/// Notifier that records every message, for tests and assertions
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().expect("notifier lock poisoned").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes
            .lock()
            .expect("notifier lock poisoned")
            .push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors
            .lock()
            .expect("notifier lock poisoned")
            .push(message.to_string());
    }
}

//! Notification sink injected into form handlers

use std::sync::{Arc, Mutex};

/// Fire-and-forget channel for user-visible messages
pub trait NotificationSink {
    fn notify_error(&self, message: &str);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify_error(&self, message: &str) {
        (**self).notify_error(message)
    }
}

/// Sink that records every message it receives
#[derive(Clone, Default)]
pub struct MemorySink {
    errors: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All error messages received so far
    pub fn errors(&self) -> Vec<String> {
        match self.errors.lock() {
            Ok(errors) => errors.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn was_notified(&self, message: &str) -> bool {
        self.errors().iter().any(|m| m == message)
    }
}

impl NotificationSink for MemorySink {
    fn notify_error(&self, message: &str) {
        match self.errors.lock() {
            Ok(mut errors) => errors.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.notify_error("first");
        sink.notify_error("second");

        assert_eq!(sink.errors(), vec!["first", "second"]);
        assert!(sink.was_notified("second"));
        assert!(!sink.was_notified("third"));
    }

    #[test]
    fn test_clones_share_the_same_log() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        handle.notify_error("shared");

        assert!(sink.was_notified("shared"));
    }
}

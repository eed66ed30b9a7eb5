// User-facing error notifications.
// The controller raises them through `Notifier`; the TUI shows them as toasts.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_LIFETIME_MS: i64 = 4500;

/// Receives failures the user should see.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// A notification with the time it was raised.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.raised_at) >= Duration::milliseconds(TOAST_LIFETIME_MS)
    }
}

/// Toasts waiting to be drawn, oldest first.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<VecDeque<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(toast);
    }

    /// Drop expired toasts and return the ones still showing.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        toasts.retain(|toast| !toast.is_expired(now));
        toasts.iter().cloned().collect()
    }
}

impl Notifier for ToastQueue {
    fn notify_error(&self, message: &str) {
        self.push(Toast::new(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_queues_toast() {
        let queue = ToastQueue::new();
        queue.notify_error("Failed to load students");

        let active = queue.active(Utc::now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "Failed to load students");
    }

    #[test]
    fn test_toasts_expire() {
        let queue = ToastQueue::new();
        let mut old = Toast::new("old");
        old.raised_at = Utc::now() - Duration::seconds(10);
        queue.push(old);
        queue.push(Toast::new("fresh"));

        let active = queue.active(Utc::now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "fresh");
    }
}

//! Notification side channel for user-visible feedback.
//!
//! Every mutation outcome - a confirmation or a validation failure - is
//! reported as a [`Notification`] through a [`Notifier`]. The concrete
//! surface (a toast, a chat reply, a log line) is the embedder's choice;
//! this crate ships a tracing-backed notifier for the demo binary and a
//! buffering one for tests and embedders that render later.

use serde::Serialize;
use strum::Display;

/// How a notification should be presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    /// The operation completed.
    Success,
    /// The operation was rejected; the message explains why.
    Error,
}

/// A user-visible message with a severity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Presentation severity
    pub severity: Severity,
    /// Human-readable message text
    pub message: String,
}

impl Notification {
    /// Builds a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// Builds an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Receives notifications emitted by dashboard operations.
pub trait Notifier {
    /// Delivers one notification to the user.
    fn notify(&mut self, notification: Notification);
}

/// Notifier that emits through `tracing`, used by the demo binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Success => tracing::info!("{}", notification.message),
            Severity::Error => tracing::error!("{}", notification.message),
        }
    }
}

/// Notifier that buffers everything it receives, newest last.
///
/// Used by tests to assert on emitted messages and by embedders that render
/// notifications on their own schedule.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, in delivery order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

//! UI state - status line and transient notifications

use std::time::{Duration, Instant};

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient notification that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    pub kind: NoticeKind,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, kind: NoticeKind, duration: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI state - status line, notifications and busy flags
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Persistent status line (card subtitle)
    pub status_message: String,
    /// Transient notification with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// Whether a generation request is in flight
    pub is_generating: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::default()
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show an informational notification
    pub fn notify(&mut self, text: impl Into<String>, duration: Duration) {
        self.transient_message = Some(TransientMessage::new(text, NoticeKind::Info, duration));
    }

    /// Show an error notification
    pub fn notify_error(&mut self, text: impl Into<String>, duration: Duration) {
        self.transient_message = Some(TransientMessage::new(text, NoticeKind::Error, duration));
    }

    pub fn clear_transient(&mut self) {
        self.transient_message = None;
    }

    /// Drop the notification once it has expired
    /// Returns true if one was removed (needs redraw)
    pub fn expire_transient(&mut self) -> bool {
        if self
            .transient_message
            .as_ref()
            .is_some_and(TransientMessage::is_expired)
        {
            self.transient_message = None;
            true
        } else {
            false
        }
    }

    /// Text of the current notification, if any
    pub fn notification_text(&self) -> Option<&str> {
        self.transient_message.as_ref().map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_replaces_previous() {
        let mut ui = UiState::new();
        ui.notify("um", Duration::from_secs(5));
        ui.notify_error("dois", Duration::from_secs(5));
        let message = ui.transient_message.as_ref().unwrap();
        assert_eq!(message.text, "dois");
        assert_eq!(message.kind, NoticeKind::Error);
    }

    #[test]
    fn test_expire_transient() {
        let mut ui = UiState::new();
        ui.notify("copiado", Duration::ZERO);
        assert!(ui.expire_transient());
        assert!(ui.notification_text().is_none());
        assert!(!ui.expire_transient());
    }
}

//! Edit session - edit mode and the pending token resolution
//!
//! The session is a short-lived overlay on top of a document. It refers to
//! the focused token by name only and owns at most one keystroke listener:
//! a one-shot subscription that resolves the focused token on the next edit.

/// Editable surface controller state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Read-only view (initial state)
    #[default]
    View,
    /// Content-editable, mutation commands enabled
    Edit,
}

/// Handle of a keystroke listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone)]
struct KeystrokeListener {
    id: ListenerId,
    token: String,
}

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    pub mode: EditMode,
    /// Token most recently navigated to (weak reference by name)
    pub focused_token: Option<String>,
    pending: Option<KeystrokeListener>,
    next_listener_id: u64,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Edit
    }

    /// Register a one-shot listener that resolves `token` on the next edit
    ///
    /// A listener still pending from an earlier navigation is revoked first and
    /// will never fire.
    pub fn subscribe_next_keystroke(&mut self, token: &str) -> ListenerId {
        self.revoke_pending();

        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.pending = Some(KeystrokeListener {
            id,
            token: token.to_string(),
        });
        tracing::debug!(target: "session", listener = id.0, %token, "keystroke listener armed");
        id
    }

    /// Detach the pending listener without firing it
    pub fn revoke_pending(&mut self) -> Option<ListenerId> {
        let listener = self.pending.take()?;
        tracing::debug!(
            target: "session",
            listener = listener.id.0,
            token = %listener.token,
            "keystroke listener revoked"
        );
        Some(listener.id)
    }

    /// Fire the pending listener for an edit keystroke
    ///
    /// Returns the token to resolve. The listener is detached as it fires, so
    /// later keystrokes return `None`.
    pub fn fire_keystroke(&mut self) -> Option<String> {
        let listener = self.pending.take()?;
        tracing::debug!(
            target: "session",
            listener = listener.id.0,
            token = %listener.token,
            "keystroke listener fired"
        );
        if self.focused_token.as_deref() == Some(listener.token.as_str()) {
            self.focused_token = None;
        }
        Some(listener.token)
    }

    /// Token awaiting its resolving keystroke, if any
    pub fn pending_token(&self) -> Option<&str> {
        self.pending.as_ref().map(|l| l.token.as_str())
    }

    pub fn pending_listener(&self) -> Option<ListenerId> {
        self.pending.as_ref().map(|l| l.id)
    }

    /// Number of attached keystroke listeners (never more than one)
    pub fn listener_count(&self) -> usize {
        usize::from(self.pending.is_some())
    }

    /// Back to VIEW with nothing focused or pending
    pub fn reset(&mut self) {
        self.revoke_pending();
        self.mode = EditMode::View;
        self.focused_token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_view() {
        let session = EditSession::new();
        assert_eq!(session.mode, EditMode::View);
        assert_eq!(session.listener_count(), 0);
    }

    #[test]
    fn test_listener_fires_once() {
        let mut session = EditSession::new();
        session.subscribe_next_keystroke("NOME");
        assert_eq!(session.fire_keystroke().as_deref(), Some("NOME"));
        assert_eq!(session.fire_keystroke(), None);
        assert_eq!(session.listener_count(), 0);
    }

    #[test]
    fn test_new_subscription_supersedes_previous() {
        let mut session = EditSession::new();
        let first = session.subscribe_next_keystroke("NOME");
        let second = session.subscribe_next_keystroke("CPF");

        assert_ne!(first, second);
        assert_eq!(session.listener_count(), 1);
        assert_eq!(session.pending_listener(), Some(second));
        assert_eq!(session.fire_keystroke().as_deref(), Some("CPF"));
        assert_eq!(session.fire_keystroke(), None);
    }

    #[test]
    fn test_repeated_focus_on_same_token_keeps_one_listener() {
        let mut session = EditSession::new();
        for _ in 0..5 {
            session.subscribe_next_keystroke("NOME");
        }
        assert_eq!(session.listener_count(), 1);
    }

    #[test]
    fn test_reset_revokes_listener() {
        let mut session = EditSession::new();
        session.mode = EditMode::Edit;
        session.focused_token = Some("NOME".to_string());
        session.subscribe_next_keystroke("NOME");

        session.reset();

        assert_eq!(session.mode, EditMode::View);
        assert_eq!(session.focused_token, None);
        assert_eq!(session.fire_keystroke(), None);
    }
}

//! Contact-form model: field values, the single-flight submission
//! latch, and the two terminal outcome states.

use crate::relay::ContactPayload;
use std::time::{Duration, Instant};

/// Submission lifecycle. `Sent` and `Failed` are terminal and mutually
/// exclusive; both decay back to `Idle` after the display window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactPhase {
    Idle,
    Submitting,
    Sent { shown_at: Instant },
    Failed { shown_at: Instant, error: String },
}

pub struct ContactState {
    pub(in crate::app) name: String,
    pub(in crate::app) email: String,
    pub(in crate::app) phone: String,
    pub(in crate::app) message: String,
    pub(in crate::app) phase: ContactPhase,
}

impl ContactState {
    pub(in crate::app) fn new() -> Self {
        ContactState {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            phase: ContactPhase::Idle,
        }
    }

    pub(in crate::app) fn is_submitting(&self) -> bool {
        matches!(self.phase, ContactPhase::Submitting)
    }

    /// Name, email, and message are required; phone is optional.
    pub(in crate::app) fn fields_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub(in crate::app) fn can_submit(&self) -> bool {
        !self.is_submitting() && self.fields_complete()
    }

    pub(in crate::app) fn payload(&self) -> ContactPayload {
        let phone = self.phone.trim();
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: self.message.trim().to_string(),
        }
    }

    /// Take the single-flight latch. Returns false when a submission
    /// is already in flight or the form is incomplete.
    pub(in crate::app) fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = ContactPhase::Submitting;
        true
    }

    /// Resolve the in-flight submission into one of the two terminal
    /// states. Success clears the form; failure keeps what the visitor
    /// typed so they can resubmit.
    pub(in crate::app) fn resolve(&mut self, error: Option<String>, now: Instant) {
        if !self.is_submitting() {
            return;
        }
        match error {
            None => {
                self.name.clear();
                self.email.clear();
                self.phone.clear();
                self.message.clear();
                self.phase = ContactPhase::Sent { shown_at: now };
            }
            Some(error) => {
                self.phase = ContactPhase::Failed {
                    shown_at: now,
                    error,
                };
            }
        }
    }

    /// Decay a terminal status back to idle once its display window
    /// has passed. Returns whether anything changed.
    pub(in crate::app) fn maybe_reset(&mut self, now: Instant, display: Duration) -> bool {
        let shown_at = match &self.phase {
            ContactPhase::Sent { shown_at } => *shown_at,
            ContactPhase::Failed { shown_at, .. } => *shown_at,
            _ => return false,
        };
        if now.saturating_duration_since(shown_at) >= display {
            self.phase = ContactPhase::Idle;
            true
        } else {
            false
        }
    }

    /// True while a timed status is on screen and the tick subscription
    /// must stay alive to clear it.
    pub(in crate::app) fn status_pending(&self) -> bool {
        matches!(
            self.phase,
            ContactPhase::Sent { .. } | ContactPhase::Failed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut contact = ContactState::new();
        contact.name = "Ada".to_string();
        contact.email = "ada@example.com".to_string();
        contact.message = "Hello".to_string();
        contact
    }

    #[test]
    fn incomplete_form_cannot_submit() {
        let mut contact = ContactState::new();
        assert!(!contact.begin_submit());
        contact.name = "Ada".to_string();
        contact.email = "ada@example.com".to_string();
        assert!(!contact.begin_submit());
        contact.message = "Hi".to_string();
        assert!(contact.begin_submit());
    }

    #[test]
    fn latch_blocks_duplicate_submissions() {
        let mut contact = filled();
        assert!(contact.begin_submit());
        // A second click while the request is in flight is a no-op.
        assert!(!contact.begin_submit());
        assert!(contact.is_submitting());
    }

    #[test]
    fn success_clears_the_form_and_shows_sent() {
        let mut contact = filled();
        let now = Instant::now();
        contact.begin_submit();
        contact.resolve(None, now);
        assert!(matches!(contact.phase, ContactPhase::Sent { .. }));
        assert!(contact.name.is_empty());
        assert!(contact.message.is_empty());
    }

    #[test]
    fn failure_keeps_the_form_for_resubmission() {
        let mut contact = filled();
        let now = Instant::now();
        contact.begin_submit();
        contact.resolve(Some("relay down".to_string()), now);
        match &contact.phase {
            ContactPhase::Failed { error, .. } => assert_eq!(error, "relay down"),
            other => panic!("expected failed phase, got {other:?}"),
        }
        assert_eq!(contact.name, "Ada");
        // Recoverable: the next submit can go out once idle again.
        assert!(contact.maybe_reset(now + Duration::from_secs(6), Duration::from_secs(5)));
        assert!(contact.begin_submit());
    }

    #[test]
    fn statuses_decay_after_the_display_window() {
        let mut contact = filled();
        let now = Instant::now();
        contact.begin_submit();
        contact.resolve(None, now);
        let display = Duration::from_secs(5);
        assert!(!contact.maybe_reset(now + Duration::from_secs(4), display));
        assert!(contact.status_pending());
        assert!(contact.maybe_reset(now + Duration::from_secs(5), display));
        assert_eq!(contact.phase, ContactPhase::Idle);
    }

    #[test]
    fn optional_phone_is_omitted_when_blank() {
        let mut contact = filled();
        assert_eq!(contact.payload().phone, None);
        contact.phone = " 555-0100 ".to_string();
        assert_eq!(contact.payload().phone.as_deref(), Some("555-0100"));
    }
}

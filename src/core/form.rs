use super::constants::{FORM_SENDING_MS, FORM_SENT_MS};
use smallvec::SmallVec;

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent!";
pub const SUCCESS_CLASS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

// JavaScript's `\s` also matches the byte-order mark.
#[inline]
fn is_js_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Same acceptance as `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@`, no whitespace,
/// a non-empty local part, and a domain with a dot that is neither its first
/// nor its last character.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_space) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    let n = chars.len();
    chars
        .iter()
        .enumerate()
        .any(|(i, &c)| c == '.' && i > 0 && i + 1 < n)
}

/// Raw field values as read from the page.
#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trimmed, validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitPhase {
    Idle,
    Sending { until_ms: f64 },
    Sent { until_ms: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEvent {
    ShowSending,
    /// Also clears the form fields.
    ShowSent,
    Restore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
    pub success: bool,
}

pub type SubmitEvents = SmallVec<[SubmitEvent; 2]>;

/// Timer deadlines for a sequence started at `started_ms`: "sent", then "restore".
pub fn timer_deadlines(started_ms: f64) -> [f64; 2] {
    let sent = started_ms + FORM_SENDING_MS;
    [sent, sent + FORM_SENT_MS]
}

/// Submit-button sequence idle → sending → sent → idle on an injected clock.
///
/// A submission while not idle restarts the sequence from "sending".
#[derive(Debug, Clone)]
pub struct SubmitMachine {
    original_label: String,
    phase: SubmitPhase,
}

impl SubmitMachine {
    pub fn new(original_label: impl Into<String>) -> Self {
        Self {
            original_label: original_label.into(),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Validate `fields` and, only if they pass, start the sequence.
    /// A rejection leaves the button state untouched.
    pub fn submit(
        &mut self,
        fields: &ContactFields,
        now_ms: f64,
    ) -> Result<SubmitEvent, ValidationError> {
        fields.validate()?;
        Ok(self.begin(now_ms))
    }

    pub fn begin(&mut self, now_ms: f64) -> SubmitEvent {
        self.phase = SubmitPhase::Sending {
            until_ms: now_ms + FORM_SENDING_MS,
        };
        SubmitEvent::ShowSending
    }

    /// Apply every transition due at `now_ms`, in order.
    pub fn poll(&mut self, now_ms: f64) -> SubmitEvents {
        let mut events = SubmitEvents::new();
        loop {
            match self.phase {
                SubmitPhase::Sending { until_ms } if now_ms >= until_ms => {
                    self.phase = SubmitPhase::Sent {
                        until_ms: until_ms + FORM_SENT_MS,
                    };
                    events.push(SubmitEvent::ShowSent);
                }
                SubmitPhase::Sent { until_ms } if now_ms >= until_ms => {
                    self.phase = SubmitPhase::Idle;
                    events.push(SubmitEvent::Restore);
                }
                _ => break,
            }
        }
        events
    }

    /// Handle a timer scheduled for `deadline_ms`.
    ///
    /// Browser clocks are coarsened, so the timer may observe a `now_ms`
    /// slightly before its deadline; the deadline still counts as reached.
    pub fn on_timer(&mut self, deadline_ms: f64, now_ms: f64) -> SubmitEvents {
        self.poll(now_ms.max(deadline_ms))
    }

    pub fn view(&self) -> ButtonView {
        match self.phase {
            SubmitPhase::Idle => ButtonView {
                label: self.original_label.clone(),
                disabled: false,
                success: false,
            },
            SubmitPhase::Sending { .. } => ButtonView {
                label: SENDING_LABEL.to_string(),
                disabled: true,
                success: false,
            },
            SubmitPhase::Sent { .. } => ButtonView {
                label: SENT_LABEL.to_string(),
                disabled: true,
                success: true,
            },
        }
    }
}

// Host-side tests for contact form validation and the submit sequence.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod form {
        include!("../src/core/form.rs");
    }
}

use site::constants::{FORM_SENDING_MS, FORM_SENT_MS};
use site::form::*;

fn fields(name: &str, email: &str, message: &str) -> ContactFields {
    ContactFields {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn email_pattern_accepts_common_addresses() {
    for ok in ["a@b.co", "user.name+tag@sub.domain.org", "x@y..z", "a.b@c.d.e"] {
        assert!(is_valid_email(ok), "expected valid: {ok:?}");
    }
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    for bad in [
        "a@b",
        "a b@c.com",
        "@b.com",
        "",
        "a@.com",
        "a@b.",
        "a@@b.com",
        "a@b@c.com",
        "a@b.c om",
        "a@b.com\t",
        "\u{feff}a@b.com",
    ] {
        assert!(!is_valid_email(bad), "expected invalid: {bad:?}");
    }
}

#[test]
fn validation_trims_and_returns_clean_submission() {
    let sub = fields("  Ada ", " ada@example.com ", "\nhello\n").validate().unwrap();
    assert_eq!(sub.name, "Ada");
    assert_eq!(sub.email, "ada@example.com");
    assert_eq!(sub.message, "hello");
}

#[test]
fn blank_or_whitespace_fields_are_missing() {
    let cases = [
        fields("", "a@b.co", "hi"),
        fields("Ada", "   ", "hi"),
        fields("Ada", "a@b.co", "   "),
        fields("\t", "", "\n"),
    ];
    for f in cases {
        assert_eq!(f.validate(), Err(ValidationError::MissingFields));
    }
}

#[test]
fn missing_fields_reported_before_bad_email() {
    assert_eq!(
        fields("", "not-an-email", "hi").validate(),
        Err(ValidationError::MissingFields)
    );
    assert_eq!(
        fields("Ada", "not-an-email", "hi").validate(),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn validation_errors_carry_alert_text() {
    assert_eq!(
        ValidationError::MissingFields.to_string(),
        "Please fill in all required fields."
    );
    assert_eq!(
        ValidationError::InvalidEmail.to_string(),
        "Please enter a valid email address."
    );
}

#[test]
fn rejected_submission_never_disables_button() {
    let mut m = SubmitMachine::new("Send Message");
    for f in [
        fields("", "", ""),
        fields("   ", "\t", "\n"),
        fields("Ada", "   ", "hi"),
        fields("Ada", "ada@nowhere", "hi"),
    ] {
        assert!(m.submit(&f, 1_000.0).is_err());
        assert_eq!(m.phase(), SubmitPhase::Idle);
        assert_eq!(
            m.view(),
            ButtonView {
                label: "Send Message".to_string(),
                disabled: false,
                success: false,
            }
        );
        assert!(m.poll(1e9).is_empty());
    }
}

#[test]
fn submit_reports_the_validation_error() {
    let mut m = SubmitMachine::new("Send");
    assert_eq!(
        m.submit(&fields(" ", "a@b.co", "hi"), 0.0),
        Err(ValidationError::MissingFields)
    );
    assert_eq!(
        m.submit(&fields("Ada", "a@b", "hi"), 0.0),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn accepted_submission_starts_sending() {
    let mut m = SubmitMachine::new("Send");
    assert_eq!(
        m.submit(&fields("Ada", "ada@example.com", "hello"), 500.0),
        Ok(SubmitEvent::ShowSending)
    );
    assert_eq!(
        m.phase(),
        SubmitPhase::Sending {
            until_ms: 500.0 + FORM_SENDING_MS
        }
    );
    assert!(m.view().disabled);
}

#[test]
fn submit_sequence_follows_virtual_clock() {
    let mut m = SubmitMachine::new("Send Message");
    let t0 = 1_000.0;
    assert_eq!(m.begin(t0), SubmitEvent::ShowSending);
    assert_eq!(
        m.view(),
        ButtonView {
            label: SENDING_LABEL.to_string(),
            disabled: true,
            success: false,
        }
    );

    assert!(m.poll(t0 + FORM_SENDING_MS - 1.0).is_empty());
    assert_eq!(m.poll(t0 + FORM_SENDING_MS).as_slice(), &[SubmitEvent::ShowSent]);
    let sent = m.view();
    assert_eq!(sent.label, SENT_LABEL);
    assert!(sent.disabled && sent.success);

    assert!(m.poll(t0 + FORM_SENDING_MS + FORM_SENT_MS - 1.0).is_empty());
    assert_eq!(
        m.poll(t0 + FORM_SENDING_MS + FORM_SENT_MS).as_slice(),
        &[SubmitEvent::Restore]
    );
    assert_eq!(
        m.view(),
        ButtonView {
            label: "Send Message".to_string(),
            disabled: false,
            success: false,
        }
    );
    assert!(m.poll(1e9).is_empty());
}

#[test]
fn late_poll_applies_every_due_transition_in_order() {
    let mut m = SubmitMachine::new("Send");
    m.begin(0.0);
    assert_eq!(
        m.poll(60_000.0).as_slice(),
        &[SubmitEvent::ShowSent, SubmitEvent::Restore]
    );
    assert_eq!(m.phase(), SubmitPhase::Idle);
}

#[test]
fn sent_deadline_counts_from_scheduled_transition() {
    let mut m = SubmitMachine::new("Send");
    m.begin(0.0);
    // polled late, but the restore deadline is still 1500 + 3000
    m.poll(2_000.0);
    assert_eq!(
        m.phase(),
        SubmitPhase::Sent {
            until_ms: FORM_SENDING_MS + FORM_SENT_MS
        }
    );
}

#[test]
fn resubmitting_restarts_from_sending() {
    let mut m = SubmitMachine::new("Send");
    m.begin(0.0);
    m.poll(FORM_SENDING_MS);
    assert!(m.view().success);
    m.begin(2_000.0);
    assert_eq!(
        m.phase(),
        SubmitPhase::Sending {
            until_ms: 2_000.0 + FORM_SENDING_MS
        }
    );
    // the first chain's restore deadline no longer applies
    assert_eq!(
        m.poll(FORM_SENDING_MS + FORM_SENT_MS).as_slice(),
        &[SubmitEvent::ShowSent]
    );
    assert_eq!(m.view().label, SENT_LABEL);
    assert!(m.poll(2_000.0 + FORM_SENDING_MS + FORM_SENT_MS - 1.0).is_empty());
    assert_eq!(
        m.poll(2_000.0 + FORM_SENDING_MS + FORM_SENT_MS).as_slice(),
        &[SubmitEvent::Restore]
    );
}

#[test]
fn timer_deadlines_follow_sequence_durations() {
    assert_eq!(
        timer_deadlines(1_000.0),
        [
            1_000.0 + FORM_SENDING_MS,
            1_000.0 + FORM_SENDING_MS + FORM_SENT_MS
        ]
    );
}

#[test]
fn timers_reading_an_early_clock_still_advance() {
    let mut m = SubmitMachine::new("Send");
    let started = 1_000.0;
    let [sent_at, restore_at] = timer_deadlines(started);
    m.begin(started);
    assert_eq!(
        m.on_timer(sent_at, sent_at - 0.1).as_slice(),
        &[SubmitEvent::ShowSent]
    );
    assert_eq!(m.view().label, SENT_LABEL);
    assert_eq!(
        m.on_timer(restore_at, restore_at - 0.1).as_slice(),
        &[SubmitEvent::Restore]
    );
    assert_eq!(m.phase(), SubmitPhase::Idle);
    assert!(!m.view().disabled);
}

#[test]
fn late_timer_uses_the_current_clock() {
    let mut m = SubmitMachine::new("Send");
    let [sent_at, restore_at] = timer_deadlines(0.0);
    m.begin(0.0);
    assert_eq!(
        m.on_timer(sent_at, restore_at + 10.0).as_slice(),
        &[SubmitEvent::ShowSent, SubmitEvent::Restore]
    );
}

#[test]
fn stale_timers_do_not_cut_a_resubmission_short() {
    let mut m = SubmitMachine::new("Send");
    let [first_sent, first_restore] = timer_deadlines(0.0);
    m.begin(0.0);
    m.on_timer(first_sent, first_sent);
    let [second_sent, second_restore] = timer_deadlines(2_000.0);
    m.begin(2_000.0);
    assert!(second_sent < first_restore);
    // the first sequence's restore timer fires while the second is running
    assert_eq!(
        m.on_timer(first_restore, first_restore).as_slice(),
        &[SubmitEvent::ShowSent]
    );
    assert!(m.view().disabled);
    assert!(m.on_timer(second_sent, second_sent).is_empty());
    assert_eq!(
        m.on_timer(second_restore, second_restore - 0.1).as_slice(),
        &[SubmitEvent::Restore]
    );
}

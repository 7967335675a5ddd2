mod helpers;

use std::sync::Arc;

use helpers::{FailingSink, controller_with, type_ada};
use waitlist::{
    application::submit_signup::{
        dto::{FormState, SubmitOutcome},
        use_case::build_submission,
    },
    domain::signup::{errors::DomainError, field::Field},
    infrastructure::{security::validate, sinks::RecordingSink},
};

#[test]
fn test_end_to_end_signup_reaches_sink() {
    let sink = Arc::new(RecordingSink::new());
    let mut controller = controller_with(sink.clone());
    type_ada(&mut controller);

    assert_eq!(controller.fields().pin, "1234-5678-9012-3456");
    assert!(validate(controller.fields()).is_empty());

    let expected = build_submission(controller.fields());
    assert_eq!(expected.cost_guess, "$199");
    assert_eq!(expected.pin, "1234-5678-9012-3456");
    assert_eq!(expected.first_name, "Ada");
    assert_eq!(expected.email, "ada@example.com");

    let receipt = match controller.submit().unwrap() {
        SubmitOutcome::Submitted(receipt) => receipt,
        SubmitOutcome::Rejected(errors) => panic!("unexpected rejection: {errors}"),
    };
    assert_eq!(receipt.submission, expected);
    assert_eq!(receipt.session_id, controller.session_id());
    assert_eq!(sink.submissions(), vec![expected]);
    assert_eq!(controller.state(), FormState::Submitted);
}

#[test]
fn test_typing_past_sixteen_digits_is_ignored() {
    let mut controller = controller_with(Arc::new(RecordingSink::new()));
    for digit in "12345678901234567".chars() {
        let typed = format!("{}{}", controller.fields().pin, digit);
        controller.handle_pin_change(&typed);
    }
    assert_eq!(controller.fields().pin, "1234-5678-9012-3456");
}

#[test]
fn test_all_messages_reported_at_once() {
    let sink = Arc::new(RecordingSink::new());
    let mut controller = controller_with(sink.clone());
    controller.handle_input_change(Field::Email, "bad");
    controller.handle_pin_change("123");

    let errors = match controller.submit().unwrap() {
        SubmitOutcome::Rejected(errors) => errors,
        SubmitOutcome::Submitted(_) => panic!("incomplete form was submitted"),
    };
    assert_eq!(errors.len(), 6);
    assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
    assert_eq!(errors.get(Field::Pin), Some("PIN must be exactly 16 digits"));
    assert_eq!(errors.get(Field::CostGuess), Some("Cost guess is required"));
    assert!(sink.is_empty());
}

#[test]
fn test_sink_failure_is_surfaced_without_retry() {
    let sink = Arc::new(FailingSink::default());
    let mut controller = controller_with(sink.clone());
    type_ada(&mut controller);

    let err = controller.submit().unwrap_err();
    assert!(matches!(err, DomainError::Sink(_)));
    assert_eq!(sink.attempts(), 1);
    assert_eq!(controller.state(), FormState::Editing);
    assert_eq!(controller.fields().cost_guess, "199");

    // the caller decides to try again
    assert!(controller.submit().is_err());
    assert_eq!(sink.attempts(), 2);
}

#[test]
fn test_cost_guess_only_stores_digits() {
    let mut controller = controller_with(Arc::new(RecordingSink::new()));
    controller.handle_cost_change("$ 2,499.");
    assert_eq!(controller.fields().cost_guess, "2499");
    assert!(!controller.handle_cost_change("abc2499"));
}

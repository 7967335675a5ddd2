use std::io::Cursor;
use std::sync::Arc;

use waitlist::{
    application::submit_signup::{dto::FormState, use_case::FormController},
    infrastructure::sinks::RecordingSink,
    presentation::terminal::{TerminalForm, TerminalOptions},
};

fn run(input: &str, options: TerminalOptions) -> (usize, String, Arc<RecordingSink>, FormState) {
    let sink = Arc::new(RecordingSink::new());
    let controller = FormController::new(sink.clone());
    let mut output = Vec::new();
    let mut form = TerminalForm::new(Cursor::new(input.to_string()), &mut output, controller, options);
    let accepted = form.run().unwrap();
    let state = form.controller().state();
    drop(form);
    (accepted, String::from_utf8(output).unwrap(), sink, state)
}

const ADA: &str = "Ada\nLovelace\n5551234567\nada@example.com\n$199\n1234567890123456\n";

#[test]
fn test_complete_session_submits_once() {
    let (accepted, output, sink, state) = run(ADA, TerminalOptions::default());
    assert_eq!(accepted, 1);
    assert_eq!(state, FormState::Submitted);
    assert!(output.starts_with("Reserve Your Spidr Air Fryer\n"));
    assert!(output.contains("Thanks Ada! You're on the Spidr Air Fryer waitlist."));

    let submissions = sink.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].cost_guess, "$199");
    assert_eq!(submissions[0].pin, "1234-5678-9012-3456");
}

#[test]
fn test_failing_fields_are_prompted_again() {
    let input = "Ada\nLovelace\n5551234567\nnot-an-email\n199\n1234\nada@example.com\n1234567890123456\n";
    let (accepted, output, sink, _) = run(input, TerminalOptions::default());
    assert_eq!(accepted, 1);
    assert!(output.contains("Email Address: Please enter a valid email address"));
    assert!(output.contains("Very, Very Secret 16-Digit Spidr PIN: PIN must be exactly 16 digits"));
    assert_eq!(output.matches("First Name (").count(), 1);
    assert_eq!(output.matches("Email Address (").count(), 2);
    assert_eq!(sink.submissions()[0].email, "ada@example.com");
}

#[test]
fn test_end_of_input_stops_without_submitting() {
    let (accepted, _, sink, state) = run("Ada\nLovelace\n", TerminalOptions::default());
    assert_eq!(accepted, 0);
    assert!(sink.is_empty());
    assert_eq!(state, FormState::Editing);
}

#[test]
fn test_overlong_pin_keeps_previous_value() {
    let input = "Ada\nLovelace\n5551234567\nada@example.com\n199\n12345678901234567\n1234567890123456\n";
    let (accepted, output, sink, _) = run(input, TerminalOptions::default());
    assert!(output.contains("PIN holds at most 16 digits"));
    assert!(output.contains("Spidr PIN is required"));
    assert_eq!(accepted, 1);
    assert_eq!(sink.submissions()[0].pin, "1234-5678-9012-3456");
}

#[test]
fn test_reset_allows_another_signup() {
    let options = TerminalOptions {
        product_name: "Spidr Toaster".to_string(),
        reset_after_submit: true,
    };
    let input = format!("{ADA}y\n{ADA}n\n");
    let (accepted, output, sink, _) = run(&input, options);
    assert_eq!(accepted, 2);
    assert_eq!(sink.len(), 2);
    assert!(output.starts_with("Reserve Your Spidr Toaster\n"));
}

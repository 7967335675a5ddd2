use std::sync::{Arc, Mutex};

use waitlist::{
    application::submit_signup::use_case::FormController,
    domain::signup::{entity::Submission, field::Field, sink::SubmissionSink},
};

/// Sink that refuses every submission, counting attempts.
#[derive(Default)]
pub struct FailingSink {
    attempts: Mutex<usize>,
}

impl FailingSink {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl SubmissionSink for FailingSink {
    fn submit(&self, _submission: &Submission) -> anyhow::Result<()> {
        *self.attempts.lock().unwrap() += 1;
        anyhow::bail!("waitlist endpoint unreachable")
    }
}

pub fn controller_with(sink: Arc<dyn SubmissionSink>) -> FormController {
    FormController::new(sink)
}

/// Types the reference signup into the form, one event per field.
pub fn type_ada(controller: &mut FormController) {
    controller.handle_input_change(Field::FirstName, "Ada");
    controller.handle_input_change(Field::LastName, "Lovelace");
    controller.handle_input_change(Field::Phone, "5551234567");
    controller.handle_input_change(Field::Email, "ada@example.com");
    controller.handle_cost_change("199");
    controller.handle_pin_change("1234567890123456");
}

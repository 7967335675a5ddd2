use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::dto::{FormState, SubmissionReceipt, SubmitOutcome};
use crate::domain::signup::{
    entity::{FormFields, Submission},
    errors::{DomainError, FieldErrors},
    field::Field,
    normalizers::{format_pin, normalize_digits},
    sink::SubmissionSink,
};
use crate::infrastructure::security::SignupValidator;

/// Assembles the record handed to the sink from validated fields.
pub fn build_submission(fields: &FormFields) -> Submission {
    Submission::from(fields)
}

/// Owns one form-fill session: field values, the last error map and the
/// submission state.
///
/// # Lifecycle
/// 1. **Editing** - field handlers normalize and store keystrokes
/// 2. **Validating** - entered by [`FormController::submit`]
/// 3. back to **Editing** when validation or the sink fails, or
///    **Submitted** once the sink accepts the record
///
/// `Submitted` is terminal until the caller invokes [`FormController::reset`].
pub struct FormController {
    fields: FormFields,
    errors: FieldErrors,
    state: FormState,
    session_id: Uuid,
    validator: SignupValidator,
    sink: Arc<dyn SubmissionSink>,
}

impl FormController {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        let session_id = Uuid::now_v7();
        info!(%session_id, "Starting waitlist form session");
        Self {
            fields: FormFields::default(),
            errors: FieldErrors::new(),
            state: FormState::Editing,
            session_id,
            validator: SignupValidator::new(),
            sink,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Applies one raw input event to `field`.
    ///
    /// Cost guesses are stripped to digits and PINs are regrouped; the other
    /// fields are stored verbatim. Returns whether the stored value changed,
    /// which is `false` for a rejected overlong PIN and for any edit after
    /// submission.
    pub fn handle_input_change(&mut self, field: Field, raw: &str) -> bool {
        if self.state == FormState::Submitted {
            warn!(session_id = %self.session_id, %field, "Ignoring edit on submitted form");
            return false;
        }

        let next = match field {
            Field::CostGuess => normalize_digits(raw),
            Field::Pin => format_pin(raw, &self.fields.pin),
            _ => raw.to_string(),
        };

        if next == self.fields.get(field) {
            return false;
        }
        self.fields.set(field, next);
        true
    }

    pub fn handle_cost_change(&mut self, raw: &str) -> bool {
        self.handle_input_change(Field::CostGuess, raw)
    }

    pub fn handle_pin_change(&mut self, raw: &str) -> bool {
        self.handle_input_change(Field::Pin, raw)
    }

    /// Recomputes the error map from scratch and reports whether it is empty.
    pub fn validate(&mut self) -> bool {
        self.errors = self.validator.validate(&self.fields);
        self.errors.is_empty()
    }

    /// Validates and, on success, hands the assembled record to the sink.
    ///
    /// # Errors
    /// - [`DomainError::AlreadySubmitted`] when the session already completed
    /// - [`DomainError::Sink`] when the sink refuses the record; the fields
    ///   are kept and the session returns to editing
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn submit(&mut self) -> Result<SubmitOutcome, DomainError> {
        if self.state == FormState::Submitted {
            return Err(DomainError::AlreadySubmitted);
        }

        self.state = FormState::Validating;
        if !self.validate() {
            self.state = FormState::Editing;
            info!(failed = self.errors.len(), "Submission rejected by validation");
            return Ok(SubmitOutcome::Rejected(self.errors.clone()));
        }

        let submission = build_submission(&self.fields);
        if let Err(err) = self.sink.submit(&submission) {
            error!(error = %err, "Submission sink failed");
            self.state = FormState::Editing;
            return Err(DomainError::Sink(err.to_string()));
        }

        self.state = FormState::Submitted;
        info!("Waitlist submission accepted");
        Ok(SubmitOutcome::Submitted(SubmissionReceipt {
            session_id: self.session_id,
            submitted_at: Utc::now(),
            submission,
        }))
    }

    /// Starts a fresh session with empty fields.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.errors.clear();
        self.state = FormState::Editing;
        self.session_id = Uuid::now_v7();
        info!(session_id = %self.session_id, "Form reset");
    }
}

use tracing::{debug, instrument};

use crate::domain::signup::{
    entity::FormFields,
    errors::FieldErrors,
    field::Field,
    normalizers::canonical_pin,
    value_objects::{CanonicalPin, EmailAddress},
    whitespace::trim_js,
};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_PIN_MESSAGE: &str = "PIN must be exactly 16 digits";

/// Field validation for the waitlist form.
///
/// Every rule runs on every pass and they write into one map, so a later rule
/// replaces the message of an earlier one for the same field:
///
/// 1. required, on the trimmed value of all six fields (browser whitespace,
///    see [`crate::domain::signup::whitespace`])
/// 2. email shape, on the raw value when non-empty
/// 3. PIN length, on the digits of the raw value when non-empty
///
/// A whitespace-only email therefore reports the shape message rather than
/// the required one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignupValidator;

impl SignupValidator {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip_all)]
    pub fn validate(&self, fields: &FormFields) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for field in Field::ALL {
            if trim_js(fields.get(field)).is_empty() {
                errors.insert(field, field.required_message());
            }
        }

        if !fields.email.is_empty() && EmailAddress::new(fields.email.clone()).is_err() {
            errors.insert(Field::Email, INVALID_EMAIL_MESSAGE);
        }

        if !fields.pin.is_empty() && CanonicalPin::new(canonical_pin(&fields.pin)).is_err() {
            errors.insert(Field::Pin, INVALID_PIN_MESSAGE);
        }

        if !errors.is_empty() {
            let failed: Vec<&str> = errors.iter().map(|(field, _)| field.key()).collect();
            debug!(?failed, "Signup validation failed");
        }

        errors
    }
}

/// Validates with a default [`SignupValidator`].
pub fn validate(fields: &FormFields) -> FieldErrors {
    SignupValidator::new().validate(fields)
}

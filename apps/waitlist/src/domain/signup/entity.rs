use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::Field;

/// Live values of one form-fill session.
///
/// # Invariants
/// - `cost_guess` holds ASCII digits only, empty means unset
/// - `pin` is dash grouped and at most 19 characters long
///
/// Both invariants are maintained by the normalizers on the way in; callers
/// that write fields directly through [`FormFields::set`] bypass them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub cost_guess: String,
    pub pin: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::CostGuess => &self.cost_guess,
            Field::Pin => &self.pin,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::CostGuess => &mut self.cost_guess,
            Field::Pin => &mut self.pin,
        };
        *slot = value;
    }
}

/// Record handed to a submission sink once the form validates.
///
/// Identical to [`FormFields`] except `cost_guess`, which carries a leading
/// `$` when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub cost_guess: String,
    pub pin: String,
}

impl From<&FormFields> for Submission {
    fn from(fields: &FormFields) -> Self {
        let cost_guess = if fields.cost_guess.is_empty() {
            String::new()
        } else {
            format!("${}", fields.cost_guess)
        };

        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            phone: fields.phone.clone(),
            email: fields.email.clone(),
            cost_guess,
            pin: fields.pin.clone(),
        }
    }
}

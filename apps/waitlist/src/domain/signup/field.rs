use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The six inputs of the waitlist form, in display order.
///
/// Ordering of the variants is significant: error maps and rendered views
/// iterate fields in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    FirstName,
    LastName,
    Phone,
    Email,
    CostGuess,
    Pin,
}

/// HTML input type a renderer should use for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum InputKind {
    Text,
    Tel,
    Email,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Phone,
        Field::Email,
        Field::CostGuess,
        Field::Pin,
    ];

    /// Wire key used in payloads and error maps.
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::CostGuess => "costGuess",
            Field::Pin => "pin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Phone => "Phone Number",
            Field::Email => "Email Address",
            Field::CostGuess => "Air Fryer Cost Guess",
            Field::Pin => "Very, Very Secret 16-Digit Spidr PIN",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "Enter your first name",
            Field::LastName => "Enter your last name",
            Field::Phone => "(123) 456-7890",
            Field::Email => "your@email.com",
            Field::CostGuess => "$$$",
            Field::Pin => "####-####-####-####",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Field::Phone => InputKind::Tel,
            Field::Email => InputKind::Email,
            _ => InputKind::Text,
        }
    }

    /// Rendered length cap, only the PIN has one.
    pub fn max_length(self) -> Option<usize> {
        match self {
            Field::Pin => Some(crate::domain::signup::normalizers::PIN_FORMATTED_MAX_LEN),
            _ => None,
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Field::FirstName => "First name is required",
            Field::LastName => "Last name is required",
            Field::Phone => "Phone number is required",
            Field::Email => "Email is required",
            Field::CostGuess => "Cost guess is required",
            Field::Pin => "Spidr PIN is required",
        }
    }

    /// Looks a field up by its wire key.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

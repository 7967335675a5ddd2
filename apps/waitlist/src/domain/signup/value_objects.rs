use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::whitespace::JS_WHITESPACE_CLASS;

lazy_static! {
    // Structure only, the domain is never resolved.
    static ref EMAIL_REGEX: regex::Regex = {
        let part = format!("[^{JS_WHITESPACE_CLASS}@]+");
        regex::Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
    };
    static ref CANONICAL_PIN_REGEX: regex::Regex = regex::Regex::new(r"^\d{16}$").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailAddress {
    #[validate(regex(path = *EMAIL_REGEX))]
    pub value: String,
}

impl EmailAddress {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let email = Self { value };
        email.validate()?;
        Ok(email)
    }
}

/// A PIN with separators removed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CanonicalPin {
    #[validate(regex(path = *CANONICAL_PIN_REGEX))]
    pub value: String,
}

impl CanonicalPin {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let pin = Self { value };
        pin.validate()?;
        Ok(pin)
    }
}

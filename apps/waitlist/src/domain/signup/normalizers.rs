//! Keystroke normalizers applied before a value is stored on the form.

/// Digits in a complete PIN.
pub const PIN_DIGITS: usize = 16;

/// Digits between separators.
pub const PIN_GROUP_SIZE: usize = 4;

/// 16 digits plus 3 separators.
pub const PIN_FORMATTED_MAX_LEN: usize = 19;

/// Strips every character that is not an ASCII digit.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reformats raw PIN input into dash separated groups of four.
///
/// When the formatted value would exceed [`PIN_FORMATTED_MAX_LEN`] the edit
/// is rejected and `previous` is returned as-is. Pasting an overlong value
/// therefore leaves the field untouched instead of clamping it.
pub fn format_pin(raw: &str, previous: &str) -> String {
    let digits = normalize_digits(raw);
    let mut formatted = String::with_capacity(digits.len() + digits.len() / PIN_GROUP_SIZE);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && i % PIN_GROUP_SIZE == 0 {
            formatted.push('-');
        }
        formatted.push(digit);
    }

    if formatted.len() > PIN_FORMATTED_MAX_LEN {
        previous.to_string()
    } else {
        formatted
    }
}

/// Digits-only projection of a formatted PIN.
pub fn canonical_pin(pin: &str) -> String {
    normalize_digits(pin)
}

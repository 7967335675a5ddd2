use waitlist::domain::signup::{
    field::Field,
    normalizers::{format_pin, normalize_digits},
    value_objects::{CanonicalPin, EmailAddress},
};

#[test]
fn email_address_checks_structure_only() {
    assert!(EmailAddress::new("ada@example.com".to_string()).is_ok());
    assert!(EmailAddress::new("ada@nonexistent.invalid".to_string()).is_ok());
    assert!(EmailAddress::new("ada@example".to_string()).is_err());
    assert!(EmailAddress::new("ada example@x.io".to_string()).is_err());
}

#[test]
fn canonical_pin_requires_sixteen_digits() {
    assert!(CanonicalPin::new("1234567890123456".to_string()).is_ok());
    assert!(CanonicalPin::new("123456789012345".to_string()).is_err());
    assert!(CanonicalPin::new("1234-5678-9012-3456".to_string()).is_err());
}

#[test]
fn normalized_digits_preserve_relative_order() {
    let samples = ["", "a1b2c3", "9-8-7", "  0 0 1 ", "$1,999.99", "no digits"];
    for s in samples {
        let out = normalize_digits(s);
        assert!(out.chars().all(|c| c.is_ascii_digit()));
        let expected: String = s.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(out, expected);
    }
}

#[test]
fn formatted_pin_is_bounded_or_unchanged() {
    let previous = "1234-5";
    let inputs = [
        "",
        "1",
        "12345678",
        "1234-5678-9012-3456",
        "1234-5678-9012-34567",
        "abcd",
        "----",
        "99999999999999999999",
    ];
    for raw in inputs {
        let out = format_pin(raw, previous);
        assert!(out == previous || out.len() <= 19, "{raw:?} -> {out:?}");
        assert!(!out.contains("--"));
        assert!(!out.starts_with('-') && !out.ends_with('-'));
    }
}

#[test]
fn field_catalogue_is_in_display_order() {
    let keys: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(
        keys,
        ["firstName", "lastName", "phone", "email", "costGuess", "pin"]
    );
}

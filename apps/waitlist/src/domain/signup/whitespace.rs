//! Whitespace as browsers see it.
//!
//! Form values are trimmed and shape-checked with the ECMAScript WhiteSpace
//! and LineTerminator sets, not Unicode `White_Space`. The two differ on
//! U+FEFF (whitespace here) and U+0085 (not whitespace here).

/// Regex class body listing every whitespace code point, for use inside `[...]`.
pub const JS_WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim_js(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

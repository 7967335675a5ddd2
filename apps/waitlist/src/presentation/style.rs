//! Visual states of form controls as plain data.
//!
//! Renderers look styles up from the control state instead of mutating
//! element styles in focus, blur and hover handlers.

use serde::Serialize;
use ts_rs::TS;

pub const ACCENT_FOCUS: &str = "rgba(71, 157, 175, 0.8)";
pub const ACCENT_HOVER: &str = "rgba(71, 157, 175, 0.9)";
pub const ERROR_RED: &str = "#ef4444";
pub const IDLE_BORDER: &str = "rgba(255, 255, 255, 0.2)";
pub const ERROR_BACKGROUND: &str = "rgba(239, 68, 68, 0.1)";
pub const IDLE_BACKGROUND: &str = "rgba(255, 255, 255, 0.1)";
pub const WHITE: &str = "#fff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldVisualState {
    pub has_error: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldStyle {
    pub border_color: &'static str,
    pub background_color: &'static str,
}

impl FieldVisualState {
    pub fn new(has_error: bool, focused: bool) -> Self {
        Self { has_error, focused }
    }

    /// Focus wins over the error border; the error tint stays either way.
    pub fn style(self) -> FieldStyle {
        match (self.has_error, self.focused) {
            (true, true) => FieldStyle {
                border_color: ACCENT_FOCUS,
                background_color: ERROR_BACKGROUND,
            },
            (true, false) => FieldStyle {
                border_color: ERROR_RED,
                background_color: ERROR_BACKGROUND,
            },
            (false, true) => FieldStyle {
                border_color: ACCENT_FOCUS,
                background_color: IDLE_BACKGROUND,
            },
            (false, false) => FieldStyle {
                border_color: IDLE_BORDER,
                background_color: IDLE_BACKGROUND,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ButtonStyle {
    pub border_color: &'static str,
    pub text_color: &'static str,
    pub background_color: &'static str,
}

pub fn submit_button_style(hovered: bool) -> ButtonStyle {
    if hovered {
        ButtonStyle {
            border_color: ACCENT_HOVER,
            text_color: ACCENT_HOVER,
            background_color: "rgba(0, 0, 0, 0.3)",
        }
    } else {
        ButtonStyle {
            border_color: WHITE,
            text_color: WHITE,
            background_color: "transparent",
        }
    }
}

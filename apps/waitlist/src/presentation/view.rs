use serde::Serialize;
use ts_rs::TS;

use super::style::{ButtonStyle, FieldStyle, FieldVisualState, submit_button_style};
use crate::application::submit_signup::{dto::FormState, use_case::FormController};
use crate::domain::signup::field::{Field, InputKind};

/// Heading shown above the form for the product being reserved.
pub fn heading(product_name: &str) -> String {
    format!("Reserve Your {product_name}")
}

pub const INTRO: [&str; 2] = [
    "We are very excited to announce our brand new Spidr Design Air Fryer.",
    "Please fill out the interest form below to get added to our waitlist.",
];

/// Everything a renderer needs to draw one input.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_kind: InputKind,
    pub max_length: Option<usize>,
    pub value: String,
    pub error: Option<String>,
    pub style: FieldStyle,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormView {
    pub heading: String,
    pub intro: Vec<&'static str>,
    pub state: FormState,
    pub fields: Vec<FieldView>,
    pub submit_button: ButtonStyle,
}

impl FormView {
    /// Snapshot of the controller for rendering.
    ///
    /// `focused` and `hovered` come from the renderer; the controller does
    /// not track pointer or focus state.
    pub fn build(
        controller: &FormController,
        product_name: &str,
        focused: Option<Field>,
        hovered: bool,
    ) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| {
                let error = controller.errors().get(field).map(str::to_string);
                let visual = FieldVisualState::new(error.is_some(), focused == Some(field));
                FieldView {
                    field,
                    label: field.label(),
                    placeholder: field.placeholder(),
                    input_kind: field.input_kind(),
                    max_length: field.max_length(),
                    value: controller.fields().get(field).to_string(),
                    error,
                    style: visual.style(),
                }
            })
            .collect();

        Self {
            heading: heading(product_name),
            intro: INTRO.to_vec(),
            state: controller.state(),
            fields,
            submit_button: submit_button_style(hovered),
        }
    }

    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldView> {
        self.fields.iter().filter(|view| view.error.is_some())
    }
}

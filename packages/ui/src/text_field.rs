//! Labelled text input that echoes what the user types.

use std::fmt;

use dioxus::prelude::*;

use crate::Label;

/// The value a [`TextField`] currently shows.
///
/// Starts at the field's initial value and is replaced by every edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState(String);

impl DisplayState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self(initial.into())
    }

    /// Replace the shown value. No trimming, no length limit.
    pub fn edit(&mut self, value: String) {
        self.0 = value;
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text input with a label bound to `id`.
///
/// `value` only seeds the display state; later prop changes do not reset it.
#[component]
pub fn TextField(
    id: String,
    name: String,
    value: String,
    placeholder: String,
    label_text: String,
    /// Message shown after the input. Empty means no error.
    #[props(default)]
    error: String,
) -> Element {
    let mut display = use_signal(|| DisplayState::new(value));

    rsx! {
        Label { for_id: id.clone(), text: label_text }
        input {
            r#type: "text",
            id: "{id}",
            name: "{name}",
            value: "{display}",
            placeholder: "{placeholder}",
            oninput: move |evt: FormEvent| display.write().edit(evt.value()),
        }
        if !error.is_empty() {
            span { class: "FieldError", "{error}" }
        }
    }
}

use account::{FieldDescriptor, FieldKind};
use dioxus::prelude::*;

use crate::{PasswordField, TextField};

/// Render the input component a descriptor asks for.
#[component]
pub fn Field(descriptor: FieldDescriptor, #[props(default)] error: String) -> Element {
    let FieldDescriptor {
        id,
        name,
        initial_value,
        placeholder,
        label_text,
        kind,
    } = descriptor;

    match kind {
        FieldKind::Text => rsx! {
            TextField { id, name, value: initial_value, placeholder, label_text, error }
        },
        FieldKind::Password => rsx! {
            PasswordField { id, name, placeholder, label_text, error }
        },
    }
}

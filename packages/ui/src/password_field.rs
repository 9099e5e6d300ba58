use dioxus::prelude::*;

use crate::Label;

/// Masked input with a label bound to `id`.
///
/// The browser owns the typed content; nothing mirrors it into component state.
#[component]
pub fn PasswordField(
    id: String,
    name: String,
    placeholder: String,
    label_text: String,
    #[props(default)] error: String,
) -> Element {
    rsx! {
        Label { for_id: id.clone(), text: label_text }
        input {
            r#type: "password",
            id: "{id}",
            name: "{name}",
            placeholder: "{placeholder}",
        }
        if !error.is_empty() {
            span { class: "FieldError", "{error}" }
        }
    }
}

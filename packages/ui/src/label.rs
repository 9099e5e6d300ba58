use dioxus::prelude::*;

/// Caption bound to the input whose id is `for_id`.
#[component]
pub fn Label(for_id: String, text: String) -> Element {
    rsx! {
        label {
            r#for: "{for_id}",
            class: "Label",
            "{text}"
        }
    }
}

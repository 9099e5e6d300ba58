//! Account sign-up route.

use dioxus::prelude::*;
use ui::RegistrationForm;

/// Sign-up page: the registration form with the default submit handler.
#[component]
pub fn AccountSignUp() -> Element {
    rsx! {
        RegistrationForm {}
    }
}

//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod label;
pub use label::Label;

mod text_field;
pub use text_field::{DisplayState, TextField};

mod password_field;
pub use password_field::PasswordField;

mod field;
pub use field::Field;

pub mod views;
pub use views::RegistrationForm;

pub const INPUT_OUTPUT_CSS: Asset = asset!("/assets/input-output.css");

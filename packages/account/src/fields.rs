//! Field descriptors for the sign-up form.

/// Which input component renders a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
}

/// Static configuration of one labelled input.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    /// DOM id, shared by the input and its label.
    pub id: String,
    /// Form `name`; also the key in [`crate::RegistrationRecord`].
    pub name: String,
    /// Ignored for password fields.
    pub initial_value: String,
    pub placeholder: String,
    pub label_text: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn text(id: &str, name: &str, placeholder: &str, label_text: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            initial_value: String::new(),
            placeholder: placeholder.to_string(),
            label_text: label_text.to_string(),
            kind: FieldKind::Text,
        }
    }

    pub fn password(id: &str, name: &str, placeholder: &str, label_text: &str) -> Self {
        Self {
            kind: FieldKind::Password,
            ..Self::text(id, name, placeholder, label_text)
        }
    }

    /// Builder method to set the initial value of a text field.
    pub fn with_initial_value(mut self, value: &str) -> Self {
        self.initial_value = value.to_string();
        self
    }
}

/// The fields of the account sign-up form, in display order.
pub fn sign_up_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("sign-up-email-id", "email", "Username", "Email: "),
        FieldDescriptor::password("sign-up-password-id", "password", "Password", "Password: "),
        FieldDescriptor::text("sign-up-name-id", "name", "Name", "Name: "),
        FieldDescriptor::text("sign-up-surname-id", "surname", "Surname", "Surname: "),
        FieldDescriptor::text("sign-up-gender-id", "gender", "Gender", "Gender: "),
        FieldDescriptor::text("sign-up-dob-id", "date_of_birth", "Date of Birth", "DOB: "),
    ]
}

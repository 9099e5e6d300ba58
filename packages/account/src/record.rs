//! # Registration record
//!
//! One [`RegistrationRecord`] is produced per submission of the sign-up form. Its serde
//! field names are the form `name` attributes, so the same struct serialises straight
//! into the `application/x-www-form-urlencoded` body the registration endpoint expects.
//!
//! The record is never persisted. `Debug` redacts the password so the record can be
//! written to the diagnostic log without leaking it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Form field names, in the order they appear on the page and in the encoded body.
pub const REGISTRATION_FIELDS: [&str; 6] = [
    "email",
    "password",
    "name",
    "surname",
    "gender",
    "date_of_birth",
];

/// Values collected from the sign-up form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub email: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub gender: String,
    pub date_of_birth: String,
}

impl RegistrationRecord {
    /// Store a value by its form field name. Returns `false` for unknown names.
    pub fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "email" => &mut self.email,
            "password" => &mut self.password,
            "name" => &mut self.name,
            "surname" => &mut self.surname,
            "gender" => &mut self.gender,
            "date_of_birth" => &mut self.date_of_birth,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

impl fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRecord")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("gender", &self.gender)
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

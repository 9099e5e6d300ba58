//! # Form binding
//!
//! [`FormBinding`] is the glue between the rendered form and the application: it knows
//! which field names are registered, collects their values from a submit event into a
//! [`RegistrationRecord`], and carries the per-field error slot the page renders.
//!
//! Submission always follows the same order:
//!
//! 1. the page suppresses native navigation,
//! 2. [`FormBinding::submit`] collects the record and runs the handler exactly once,
//! 3. the handler's [`SubmitDecision`] says whether the record is posted.
//!
//! No validation rules exist. Empty values are collected as empty strings.

use std::collections::BTreeMap;

use crate::fields::{sign_up_fields, FieldDescriptor};
use crate::record::RegistrationRecord;

/// Validation messages keyed by form field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Answer of the application submit handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Post the record to the registration endpoint.
    #[default]
    Proceed,
    /// Keep the record in the page; nothing is posted.
    Veto,
}

/// Outcome of one submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub record: RegistrationRecord,
    pub decision: SubmitDecision,
}

impl Submission {
    /// The record to post, if the handler let it through.
    pub fn into_post(self) -> Option<RegistrationRecord> {
        match self.decision {
            SubmitDecision::Proceed => Some(self.record),
            SubmitDecision::Veto => None,
        }
    }
}

/// Aggregates named field values into a [`RegistrationRecord`].
#[derive(Clone, Debug, PartialEq)]
pub struct FormBinding {
    fields: Vec<FieldDescriptor>,
    errors: FieldErrors,
}

impl Default for FormBinding {
    fn default() -> Self {
        Self::new(sign_up_fields())
    }
}

impl FormBinding {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            errors: FieldErrors::new(),
        }
    }

    /// Builder method to attach caller-supplied error messages.
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = errors;
        self
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Error message for one field, if any.
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    fn is_registered(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Build a record from submitted `(name, value)` pairs.
    ///
    /// Unregistered names are ignored, registered fields that were not submitted stay
    /// empty. A repeated name keeps its last value.
    pub fn collect<I, K, V>(&self, values: I) -> RegistrationRecord
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = RegistrationRecord::default();
        for (name, value) in values {
            let name = name.as_ref();
            if !self.is_registered(name) {
                tracing::debug!("Ignoring unregistered form field {}", name);
                continue;
            }
            record.set(name, value.into());
        }
        record
    }

    /// Collect the record and hand it to `handler`, which runs exactly once.
    pub fn submit<I, K, V, F>(&self, values: I, handler: F) -> Submission
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
        F: FnOnce(&RegistrationRecord) -> SubmitDecision,
    {
        let record = self.collect(values);
        let decision = handler(&record);
        if decision == SubmitDecision::Veto {
            tracing::debug!("Submit handler vetoed the registration post");
        }
        Submission { record, decision }
    }
}

/// The default submit handler: write the record to the diagnostic log and proceed.
pub fn log_submission(record: &RegistrationRecord) -> SubmitDecision {
    tracing::info!("Registration form submitted: {:?}", record);
    SubmitDecision::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldDescriptor;

    fn filled() -> Vec<(&'static str, &'static str)> {
        vec![
            ("email", "a@b.com"),
            ("password", "x"),
            ("name", "N"),
            ("surname", "S"),
            ("gender", "G"),
            ("date_of_birth", "2020-01-01"),
        ]
    }

    fn expected() -> RegistrationRecord {
        RegistrationRecord {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            name: "N".to_string(),
            surname: "S".to_string(),
            gender: "G".to_string(),
            date_of_birth: "2020-01-01".to_string(),
        }
    }

    #[test]
    fn test_submit_calls_handler_once_with_record() {
        let binding = FormBinding::default();
        let mut calls = Vec::new();

        let submission = binding.submit(filled(), |record| {
            calls.push(record.clone());
            SubmitDecision::Proceed
        });

        assert_eq!(calls, vec![expected()]);
        assert_eq!(submission.record, expected());
        assert_eq!(submission.into_post(), Some(expected()));
    }

    #[test]
    fn test_submit_ignores_field_order() {
        let binding = FormBinding::default();
        let mut reversed = filled();
        reversed.reverse();

        let mut seen = None;
        binding.submit(reversed, |record| {
            seen = Some(record.clone());
            SubmitDecision::Proceed
        });

        assert_eq!(seen, Some(expected()));
    }

    #[test]
    fn test_empty_form_is_not_blocked() {
        let binding = FormBinding::default();
        let empty: Vec<(&str, &str)> = binding
            .fields()
            .iter()
            .map(|f| (f.name.as_str(), ""))
            .collect();

        let mut calls = 0;
        let submission = binding.submit(empty, |record| {
            calls += 1;
            assert_eq!(*record, RegistrationRecord::default());
            SubmitDecision::Proceed
        });

        assert_eq!(calls, 1);
        assert_eq!(submission.into_post(), Some(RegistrationRecord::default()));
    }

    #[test]
    fn test_veto_suppresses_post() {
        let binding = FormBinding::default();
        let submission = binding.submit(filled(), |_| SubmitDecision::Veto);
        assert_eq!(submission.record, expected());
        assert_eq!(submission.into_post(), None);
    }

    #[test]
    fn test_collect_skips_unregistered_and_missing() {
        let binding = FormBinding::new(vec![FieldDescriptor::text("e", "email", "", "")]);
        let record = binding.collect([("email", "a@b.com"), ("surname", "S"), ("csrf", "t")]);
        assert_eq!(record.email, "a@b.com");
        assert_eq!(record.surname, "");
    }

    #[test]
    fn test_collect_keeps_last_repeated_value() {
        let binding = FormBinding::default();
        let record = binding.collect([("name", "first"), ("name", "second")]);
        assert_eq!(record.name, "second");
    }

    #[test]
    fn test_errors_are_empty_unless_supplied() {
        let binding = FormBinding::default();
        assert!(binding.fields().iter().all(|f| binding.error_for(&f.name).is_none()));

        let mut errors = FieldErrors::new();
        errors.insert("email".to_string(), "Already registered".to_string());
        let binding = binding.with_errors(errors);
        assert_eq!(binding.error_for("email"), Some("Already registered"));
        assert_eq!(binding.error_for("password"), None);
    }

    #[test]
    fn test_default_handler_proceeds() {
        assert_eq!(log_submission(&expected()), SubmitDecision::Proceed);
    }
}

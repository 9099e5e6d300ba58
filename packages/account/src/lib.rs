//! # Account crate — registration contract for the customer website
//!
//! Everything the sign-up page needs that is not a Dioxus component lives here, so it
//! can be exercised without a renderer.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`fields`] | Field descriptors and the ordered list of sign-up fields |
//! | [`record`] | The [`RegistrationRecord`] produced by one submission and its form-encoded body |
//! | [`binding`] | [`FormBinding`]: collects submitted values, holds the per-field error slot, applies the submit policy |
//! | [`sink`] | [`RegistrationSink`] seam with the HTTP and in-memory implementations, and [`FormSink`] choosing between them |
//! | [`config`] | [`FrontendConfig`] loaded from `customer_website.toml` |
//! | [`error`] | The crate-wide [`Error`] type |
//!
//! ## Submission flow
//!
//! The page hands the submitted `(name, value)` pairs to [`FormBinding::submit`], which
//! builds the record and runs the application handler first. Only when the handler
//! answers [`SubmitDecision::Proceed`] does the page post the record through a
//! [`RegistrationSink`].

pub mod binding;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;
pub mod sink;

pub use binding::{log_submission, FieldErrors, FormBinding, SubmitDecision, Submission};
pub use config::{AccountConfig, FrontendConfig};
pub use error::Error;
pub use fields::{sign_up_fields, FieldDescriptor, FieldKind};
pub use record::{RegistrationRecord, REGISTRATION_FIELDS};
pub use sink::{deliver, FormSink, HttpSink, MemorySink, RegistrationSink};

//! Account sign-up page.

use account::{
    deliver, log_submission, sign_up_fields, FieldDescriptor, FieldErrors, FormBinding,
    FormSink, FrontendConfig, RegistrationRecord, RegistrationSink, SubmitDecision, Submission,
};
use dioxus::html::FormValue;
use dioxus::prelude::*;

use crate::Field;

/// Registration form with one field per record attribute.
///
/// Native form navigation is always suppressed. The record goes to `on_submit` first
/// (the default writes it to the log); unless that answers [`SubmitDecision::Veto`],
/// the record is posted form-encoded to the configured endpoint, or kept in memory when
/// the configuration is offline.
#[component]
pub fn RegistrationForm(
    /// Messages rendered next to their fields, keyed by field name.
    #[props(default)]
    errors: FieldErrors,
    on_submit: Option<Callback<RegistrationRecord, SubmitDecision>>,
) -> Element {
    let config = try_use_context::<FrontendConfig>().unwrap_or_default();
    let endpoint = config.register_endpoint().to_string();
    let binding = FormBinding::new(sign_up_fields()).with_errors(errors);

    let rows: Vec<(String, FieldDescriptor, String)> = binding
        .fields()
        .iter()
        .map(|f| {
            let error = binding.error_for(&f.name).unwrap_or_default().to_string();
            (f.id.clone(), f.clone(), error)
        })
        .collect();

    let sink = use_hook(|| FormSink::from_config(&config));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let values = submitted_values(&evt);
        let binding = binding.clone();
        let sink = sink.clone();
        spawn(async move {
            let handler = |record: &RegistrationRecord| match on_submit {
                Some(handler) => handler.call(record.clone()),
                None => log_submission(record),
            };
            submit_form(&binding, values, handler, &sink).await;
        });
    };

    rsx! {
        form {
            class: "RegistrationForm",
            action: "{endpoint}",
            method: "post",
            onsubmit: onsubmit,

            for (key, descriptor, error) in rows {
                Field { key: "{key}", descriptor, error }
                br {}
            }

            button {
                r#type: "submit",
                class: "mt-6 bg-blue-500 text-white p-2 rounded",
                "Submit"
            }
        }
    }
}

/// Run one submission: collect the record, call `handler` once, post unless vetoed.
async fn submit_form<S, F>(
    binding: &FormBinding,
    values: Vec<(String, String)>,
    handler: F,
    sink: &S,
) -> Submission
where
    S: RegistrationSink,
    F: FnOnce(&RegistrationRecord) -> SubmitDecision,
{
    let submission = binding.submit(values, handler);
    if let Some(record) = submission.clone().into_post() {
        deliver(sink, record).await;
    }
    submission
}

/// Text values of a submit event; file inputs are skipped.
fn submitted_values(evt: &FormEvent) -> Vec<(String, String)> {
    evt.values()
        .into_iter()
        .filter_map(|(name, value)| match value {
            FormValue::Text(text) => Some((name, text)),
            _ => None,
        })
        .collect()
}

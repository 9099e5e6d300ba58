//! Delivery of registration records to the account backend.

use std::sync::{Arc, Mutex};

use reqwest::header::CONTENT_TYPE;

use crate::config::FrontendConfig;
use crate::error::{Error, Result};
use crate::record::RegistrationRecord;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Where a submitted record goes once the handler lets it through.
pub trait RegistrationSink {
    fn post(
        &self,
        record: &RegistrationRecord,
    ) -> impl std::future::Future<Output = Result<()>>;
}

/// Posts records form-encoded to the registration endpoint.
#[derive(Clone, Debug)]
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(config.register_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RegistrationSink for HttpSink {
    async fn post(&self, record: &RegistrationRecord) -> Result<()> {
        let body = record.to_form_body()?;
        tracing::debug!("Posting registration form to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// In-memory sink for tests and offline previews.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    posted: Arc<Mutex<Vec<RegistrationRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records posted so far, oldest first.
    pub fn posted(&self) -> Vec<RegistrationRecord> {
        self.posted.lock().unwrap().clone()
    }
}

impl RegistrationSink for MemorySink {
    async fn post(&self, record: &RegistrationRecord) -> Result<()> {
        self.posted.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// The sink a page posts through, chosen once from the configuration.
#[derive(Clone, Debug)]
pub enum FormSink {
    Http(HttpSink),
    Memory(MemorySink),
}

impl FormSink {
    pub fn from_config(config: &FrontendConfig) -> Self {
        if config.is_offline() {
            tracing::info!("Offline mode: registration records stay in memory");
            Self::Memory(MemorySink::new())
        } else {
            Self::Http(HttpSink::from_config(config))
        }
    }
}

impl RegistrationSink for FormSink {
    async fn post(&self, record: &RegistrationRecord) -> Result<()> {
        match self {
            Self::Http(sink) => sink.post(record).await,
            Self::Memory(sink) => sink.post(record).await,
        }
    }
}

/// Post a record and log the outcome. Failures are not reported to the caller.
pub async fn deliver<S: RegistrationSink>(sink: &S, record: RegistrationRecord) {
    match sink.post(&record).await {
        Ok(()) => tracing::debug!("Registration form delivered"),
        Err(e) => tracing::warn!("Registration form was not delivered: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> RegistrationRecord {
        RegistrationRecord {
            email: email.to_string(),
            ..RegistrationRecord::default()
        }
    }

    #[tokio::test]
    async fn test_memory_sink_records_posts_in_order() {
        let sink = MemorySink::new();
        assert!(sink.posted().is_empty());

        sink.post(&record("one@b.com")).await.unwrap();
        sink.post(&record("two@b.com")).await.unwrap();

        let posted = sink.posted();
        assert_eq!(posted.len(), 2);
        assert_eq!(posted[0].email, "one@b.com");
        assert_eq!(posted[1].email, "two@b.com");
    }

    #[tokio::test]
    async fn test_deliver_forwards_to_sink() {
        let sink = MemorySink::new();
        deliver(&sink, record("a@b.com")).await;
        assert_eq!(sink.posted(), vec![record("a@b.com")]);
    }

    #[tokio::test]
    async fn test_memory_sink_clones_share_storage() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        deliver(&handle, record("a@b.com")).await;
        assert_eq!(sink.posted().len(), 1);
    }

    #[test]
    fn test_http_sink_uses_configured_endpoint() {
        let sink = HttpSink::from_config(&FrontendConfig::default());
        assert_eq!(sink.endpoint(), "https://localhost:50050/api/v1/account/register");

        let config = FrontendConfig::default().with_register_endpoint("http://127.0.0.1:9/register");
        assert_eq!(HttpSink::from_config(&config).endpoint(), "http://127.0.0.1:9/register");
    }

    #[test]
    fn test_form_sink_follows_offline_switch() {
        let online = FormSink::from_config(&FrontendConfig::default());
        assert!(matches!(online, FormSink::Http(ref s) if s.endpoint() == "https://localhost:50050/api/v1/account/register"));

        let config = FrontendConfig::from_toml("[account]\noffline = true\n").unwrap();
        assert!(matches!(FormSink::from_config(&config), FormSink::Memory(_)));
    }

    #[tokio::test]
    async fn test_offline_form_sink_keeps_records() {
        let memory = MemorySink::new();
        let sink = FormSink::Memory(memory.clone());
        deliver(&sink, record("a@b.com")).await;
        assert_eq!(memory.posted(), vec![record("a@b.com")]);
    }
}

use async_trait::async_trait;
use eyre::WrapErr;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use sihra_core::errors::{SihraError, SihraResult};
use sihra_core::models::{
    envelope::ApiEnvelope,
    group::Group,
    session::Credential,
    time_slot::{RecordId, TimeSlot},
};
use tracing::debug;

use crate::config::ClientConfig;
use crate::source::ScheduleSource;

/// Client for the SIHRA REST API bound to one bearer credential.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SihraApi {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl SihraApi {
    /// Build a client with its own connection pool.
    pub fn new(config: &ClientConfig, credential: Credential) -> eyre::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self::with_client(http, &config.base_url, credential))
    }

    /// Reuse an existing connection pool, e.g. one shared by a server
    /// handling many callers.
    pub fn with_client(http: reqwest::Client, base_url: &str, credential: Credential) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        }
    }

    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> SihraResult<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(self.credential.token())
            .send()
            .await
            .wrap_err_with(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &url, &error_text));
        }

        let envelope = response
            .json::<ApiEnvelope<T>>()
            .await
            .wrap_err_with(|| format!("Unexpected response body from {}", url))?;

        Ok(envelope.into_inner())
    }
}

fn status_error(status: StatusCode, url: &str, body: &str) -> SihraError {
    let detail = if body.trim().is_empty() {
        format!("{} returned {}", url, status)
    } else {
        format!("{} returned {}: {}", url, status, body.trim())
    };

    match status {
        StatusCode::UNAUTHORIZED => SihraError::Authentication(detail),
        StatusCode::FORBIDDEN => SihraError::Authorization(detail),
        StatusCode::NOT_FOUND => SihraError::NotFound(detail),
        _ => SihraError::Upstream(eyre::eyre!(detail)),
    }
}

#[async_trait]
impl ScheduleSource for SihraApi {
    async fn teacher_groups(&self, teacher_id: &str) -> SihraResult<Vec<Group>> {
        self.get_json(self.url(&["teachers", teacher_id, "groups"])).await
    }

    async fn group_schedule(&self, group_id: &RecordId) -> SihraResult<Vec<TimeSlot>> {
        self.get_json(self.url(&["groups", group_id.as_str(), "schedules"])).await
    }
}

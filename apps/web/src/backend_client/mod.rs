/// Backend client: the single point of entry for calls to the external
/// portfolio backend (resume parsing, portfolios, profiles).
///
/// No other module issues HTTP requests. Handlers depend on the
/// `PortfolioBackend` trait so flows can run against an in-memory fake.
use std::time::Duration;

use anyhow::{bail, Context};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::portfolio::{Portfolio, PortfolioPayload, PublishState};
use crate::models::profile::{Profile, ProfileUpdate};
use crate::models::resume::ParsedResume;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to connect to the server. Make sure the backend is running.")]
    Connect(#[source] reqwest::Error),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Not found")]
    NotFound,

    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,

    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

/// A validated file on its way to the parse endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

#[async_trait]
pub trait PortfolioBackend: Send + Sync {
    /// `POST /resumes`
    async fn upload_resume(&self, token: &str, file: ResumeFile) -> Result<ParsedResume, BackendError>;

    /// `GET /portfolios/`, newest first as the backend orders them.
    async fn list_portfolios(&self, token: &str) -> Result<Vec<Portfolio>, BackendError>;

    async fn get_portfolio(&self, token: &str, id: &str) -> Result<Portfolio, BackendError>;

    async fn create_portfolio(
        &self,
        token: &str,
        payload: &PortfolioPayload,
    ) -> Result<Portfolio, BackendError>;

    async fn update_portfolio(
        &self,
        token: &str,
        id: &str,
        payload: &PortfolioPayload,
    ) -> Result<Portfolio, BackendError>;

    async fn delete_portfolio(&self, token: &str, id: &str) -> Result<(), BackendError>;

    /// `PATCH /portfolios/{id}/publish`
    async fn toggle_publish(&self, token: &str, id: &str) -> Result<PublishState, BackendError>;

    /// `None` when the user has not created a profile yet.
    async fn get_profile(&self, token: &str) -> Result<Option<Profile>, BackendError>;

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<Profile, BackendError>;
}

/// Updates `current_id` when set, creating a new portfolio instead if the
/// backend no longer knows it.
pub async fn save_portfolio(
    backend: &dyn PortfolioBackend,
    token: &str,
    current_id: Option<&str>,
    payload: &PortfolioPayload,
) -> Result<Portfolio, BackendError> {
    let Some(id) = current_id else {
        return backend.create_portfolio(token, payload).await;
    };
    match backend.update_portfolio(token, id, payload).await {
        Err(BackendError::NotFound) => {
            warn!("Portfolio {id} no longer exists, creating a new one");
            backend.create_portfolio(token, payload).await
        }
        other => other,
    }
}

/// Shape of the parse endpoint's answer. A 2xx may still carry `error`.
#[derive(Debug, Deserialize)]
struct ParseEnvelope {
    #[serde(default)]
    data: Option<ParsedResume>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid backend URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            bail!("Backend URL '{base_url}' cannot carry a path");
        }
        Ok(Self { client, base_url })
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    /// A trailing `""` yields a trailing slash.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends the request and maps non-2xx statuses onto `BackendError`.
    async fn send(&self, request: RequestBuilder, token: &str) -> Result<Response, BackendError> {
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(BackendError::Connect)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::NOT_FOUND => Err(BackendError::NotFound),
            StatusCode::UNAUTHORIZED => Err(BackendError::Unauthorized),
            _ => {
                let body = response.text().await.unwrap_or_default();
                warn!("Backend returned {status}: {body}");
                Err(BackendError::Server {
                    status: status.as_u16(),
                    message: error_message(&body)
                        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
                })
            }
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: &str,
    ) -> Result<T, BackendError> {
        let response = self.send(request, token).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

/// The backend's own explanation: `error` or `detail`, verbatim.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "detail"].into_iter().find_map(|key| match value.get(key)? {
        Value::String(message) => Some(message.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

#[async_trait]
impl PortfolioBackend for BackendClient {
    async fn upload_resume(&self, token: &str, file: ResumeFile) -> Result<ParsedResume, BackendError> {
        let size = file.bytes.len();
        let part = multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(BackendError::Connect)?;
        let form = multipart::Form::new().part("file", part);
        let request = self.client.post(self.url(&["resumes"])).multipart(form);

        let envelope: ParseEnvelope = self.send_json(request, token).await?;
        if let Some(message) = envelope.error {
            return Err(BackendError::Server {
                status: 200,
                message,
            });
        }
        let resume = envelope
            .data
            .ok_or_else(|| BackendError::Decode("parse response carried no data".to_string()))?;
        debug!("Parsed resume upload of {size} bytes");
        Ok(resume)
    }

    async fn list_portfolios(&self, token: &str) -> Result<Vec<Portfolio>, BackendError> {
        self.send_json(self.client.get(self.url(&["portfolios", ""])), token)
            .await
    }

    async fn get_portfolio(&self, token: &str, id: &str) -> Result<Portfolio, BackendError> {
        self.send_json(self.client.get(self.url(&["portfolios", id])), token)
            .await
    }

    async fn create_portfolio(
        &self,
        token: &str,
        payload: &PortfolioPayload,
    ) -> Result<Portfolio, BackendError> {
        self.send_json(self.client.post(self.url(&["portfolios", ""])).json(payload), token)
            .await
    }

    async fn update_portfolio(
        &self,
        token: &str,
        id: &str,
        payload: &PortfolioPayload,
    ) -> Result<Portfolio, BackendError> {
        let request = self
            .client
            .put(self.url(&["portfolios", id]))
            .json(payload);
        self.send_json(request, token).await
    }

    async fn delete_portfolio(&self, token: &str, id: &str) -> Result<(), BackendError> {
        self.send(self.client.delete(self.url(&["portfolios", id])), token)
            .await?;
        Ok(())
    }

    async fn toggle_publish(&self, token: &str, id: &str) -> Result<PublishState, BackendError> {
        let request = self
            .client
            .patch(self.url(&["portfolios", id, "publish"]));
        self.send_json(request, token).await
    }

    async fn get_profile(&self, token: &str) -> Result<Option<Profile>, BackendError> {
        self.send_json(self.client.get(self.url(&["profiles", "me"])), token)
            .await
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<Profile, BackendError> {
        self.send_json(self.client.put(self.url(&["profiles", "me"])).json(update), token)
            .await
    }
}

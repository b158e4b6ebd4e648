use crate::domain::model::EntityId;
use crate::domain::ports::ConfigProvider;
use crate::domain::resource::{Action, Resource};
use crate::utils::error::{FailureKind, RentalError, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_USER_AGENT: &str = concat!("vhs-rental-client/", env!("CARGO_PKG_VERSION"));

// Longest slice of an error body kept as diagnostic detail.
const DETAIL_LIMIT: usize = 512;

/// Shared HTTP access to the rental backend. Cloning is cheap and clones share
/// the connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::build(base_url, None, DEFAULT_USER_AGENT)
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::build(
            config.api_base_url(),
            config.request_timeout(),
            config.user_agent(),
        )
    }

    fn build(base_url: &str, timeout: Option<Duration>, user_agent: &str) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent.to_string());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| RentalError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn collection_url<R: Resource>(&self) -> Result<Url> {
        self.join(R::PATH)
    }

    pub fn item_url<R: Resource>(&self, id: EntityId) -> Result<Url> {
        self.join(&format!("{}/{}", R::PATH, id))
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| RentalError::ConfigError {
                message: format!("Cannot build URL for '{}': {}", path, e),
            })
    }

    fn request(&self, action: Action, url: Url) -> RequestBuilder {
        self.client.request(action.method(), url)
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let url = self.collection_url::<R>()?;
        let body = self.execute::<R>(Action::List, self.request(Action::List, url)).await?;
        decode::<R, Vec<R>>(Action::List, &body)
    }

    pub async fn fetch<R: Resource>(&self, id: EntityId) -> Result<Option<R>> {
        let url = self.item_url::<R>(id)?;
        let body = self.execute::<R>(Action::Get, self.request(Action::Get, url)).await?;

        if is_blank(&body) {
            tracing::debug!("{} {} not found (empty body)", R::PATH, id);
            return Ok(None);
        }

        let value = decode::<R, Value>(Action::Get, &body)?;
        let value = match value {
            Value::Null => None,
            // Some backends answer a lookup with the query's row set.
            Value::Array(mut rows) if rows.len() <= 1 => rows.pop(),
            other => Some(other),
        };

        match value {
            None => {
                tracing::debug!("{} {} not found", R::PATH, id);
                Ok(None)
            }
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| invalid_response::<R>(Action::Get, e)),
        }
    }

    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R> {
        let url = self.collection_url::<R>()?;
        let request = self.request(Action::Create, url).json(draft);
        let body = self.execute::<R>(Action::Create, request).await?;
        decode::<R, R>(Action::Create, &body)
    }

    pub async fn update<R: Resource>(&self, entity: &R) -> Result<R> {
        let url = self.item_url::<R>(entity.id())?;
        let request = self.request(Action::Update, url).json(entity);
        let body = self.execute::<R>(Action::Update, request).await?;
        decode::<R, R>(Action::Update, &body)
    }

    pub async fn delete<R: Resource>(&self, id: EntityId) -> Result<()> {
        let url = self.item_url::<R>(id)?;
        self.execute::<R>(Action::Delete, self.request(Action::Delete, url))
            .await?;
        Ok(())
    }

    /// Sends the request once and returns the body of a 2xx response.
    async fn execute<R: Resource>(&self, action: Action, request: RequestBuilder) -> Result<Vec<u8>> {
        let request = request
            .build()
            .map_err(|e| transport_failure::<R>(action, e))?;
        tracing::debug!("{} {}", request.method(), request.url());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| transport_failure::<R>(action, e))?;

        let status = response.status();
        tracing::debug!("{} {} -> {}", action.method(), R::PATH, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_failure::<R>(action, status, &body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_failure::<R>(action, e))?;
        Ok(body.to_vec())
    }
}

fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| RentalError::InvalidConfigValueError {
        field: "api_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    // Url::join replaces the last segment unless the base ends with '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(|b| b.is_ascii_whitespace())
}

fn truncate(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(DETAIL_LIMIT) {
        Some((end, _)) => format!("{}…", &body[..end]),
        None => body.to_string(),
    }
}

fn decode<R: Resource, T: DeserializeOwned>(action: Action, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| invalid_response::<R>(action, e))
}

fn invalid_response<R: Resource>(action: Action, error: serde_json::Error) -> RentalError {
    tracing::warn!(
        "{} {}: undecodable response body: {}",
        action.method(),
        R::PATH,
        error
    );
    RentalError::operation(
        FailureKind::InvalidResponse,
        action.failure_message::<R>(),
        None,
        error.to_string(),
    )
}

fn transport_failure<R: Resource>(action: Action, error: reqwest::Error) -> RentalError {
    let kind = FailureKind::from_transport(&error);
    tracing::warn!("{} {} failed ({:?}): {}", action.method(), R::PATH, kind, error);
    RentalError::operation(
        kind,
        action.failure_message::<R>(),
        error.status(),
        error.to_string(),
    )
}

fn status_failure<R: Resource>(action: Action, status: StatusCode, body: &str) -> RentalError {
    let detail = if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, truncate(body))
    };
    tracing::warn!("{} {} failed: {}", action.method(), R::PATH, detail);
    RentalError::operation(
        FailureKind::from_status(status),
        action.failure_message::<R>(),
        Some(status),
        detail,
    )
}

use std::{future::Future, time::Duration};

use api_types::{
    category::{CategoryDto, CategoryRequest},
    error::ErrorBody,
};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

use crate::error::{AppError, Result};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error("server responded {status}")]
    Response {
        status: StatusCode,
        /// Parsed payload; `None` when the body was not JSON.
        body: Option<ErrorBody>,
    },
    #[error("server not reachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Error payload sent by the server, if the failure carried one.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Response { body, .. } => body.as_ref(),
            Self::Endpoint(_) | Self::Transport(_) => None,
        }
    }
}

/// Remote operations the category editor depends on.
pub trait CategoryService: Clone + Send + Sync + 'static {
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = std::result::Result<CategoryDto, ClientError>> + Send;

    fn update(
        &self,
        request: CategoryRequest,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // `Url::join` replaces the last segment unless the base ends with '/'.
        let base_url = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&base_url)
            .map_err(|err| AppError::Terminal(format!("invalid base_url: {err}")))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Endpoint(format!("{path}: {err}")))
    }
}

impl CategoryService for Client {
    async fn find_by_id(&self, id: i64) -> std::result::Result<CategoryDto, ClientError> {
        let endpoint = self.endpoint(&format!("categorias/{id}"))?;
        tracing::debug!(%endpoint, "fetching category");

        let res = self.http.get(endpoint).send().await?;
        if res.status().is_success() {
            return Ok(res.json::<CategoryDto>().await?);
        }

        Err(error_from_response(res).await)
    }

    async fn update(&self, request: CategoryRequest) -> std::result::Result<(), ClientError> {
        let builder = match request.id() {
            Some(id) => self.http.put(self.endpoint(&format!("categorias/{id}"))?),
            None => self.http.post(self.endpoint("categorias")?),
        };
        tracing::debug!(id = ?request.id(), "saving category");

        let res = builder.json(&request).send().await?;
        if res.status().is_success() {
            return Ok(());
        }

        Err(error_from_response(res).await)
    }
}

async fn error_from_response(res: reqwest::Response) -> ClientError {
    let status = res.status();
    let body = match res.bytes().await {
        Ok(bytes) => serde_json::from_slice::<Value>(&bytes)
            .ok()
            .map(|value| ErrorBody::from_json(&value)),
        Err(err) => {
            tracing::warn!("failed to read error body: {err}");
            None
        }
    };
    tracing::warn!(%status, "category request rejected");
    ClientError::Response { status, body }
}

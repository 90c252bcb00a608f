use std::marker::PhantomData;

use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::TriviaError;

/// Issues GET requests and hands back the whole body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, TriviaError>;
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub url: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TriviaError> {
        let response = self.client.get(url).send().await?;

        tracing::info!("GET {}: {}", response.url(), response.status());

        let status = response.status();
        let url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, url, body })
    }
}

/// A response whose body is expected to be JSON of type `T`.
///
/// The body is only parsed when [`TypedResponse::json`] is called.
#[derive(Debug)]
pub struct TypedResponse<T> {
    raw: RawResponse,
    body_type: PhantomData<fn() -> T>,
}

impl<T> TypedResponse<T> {
    pub fn new(raw: RawResponse) -> Self {
        Self {
            raw,
            body_type: PhantomData,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.raw.status
    }

    pub fn url(&self) -> &str {
        &self.raw.url
    }

    pub fn bytes(&self) -> &[u8] {
        &self.raw.body
    }
}

impl<T: DeserializeOwned> TypedResponse<T> {
    pub fn json(&self) -> Result<T, TriviaError> {
        Ok(serde_json::from_slice(&self.raw.body)?)
    }
}

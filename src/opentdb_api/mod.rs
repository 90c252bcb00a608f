pub mod error;
pub mod model;
pub mod params;
pub mod transport;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::query::ToQuery;

use self::{
    error::TriviaError,
    model::{TokenResponse, TriviaResponse},
    params::{TokenParams, TriviaParams},
    transport::{HttpTransport, Transport, TypedResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

const QUESTIONS_PATH: &str = "/api.php";
const TOKEN_PATH: &str = "/api_token.php";

/// Client for the OpenTDB question and session token endpoints.
///
/// Question text is returned exactly as the API encoded it. A non-success
/// `response_code` is not an error, callers have to check it.
#[derive(Debug, Clone)]
pub struct TriviaClient<T = HttpTransport> {
    transport: T,
    base_url: Arc<String>,
}

impl TriviaClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(), base_url)
    }
}

impl Default for TriviaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> TriviaClient<T> {
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Self {
            transport,
            base_url: Arc::new(base_url),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_questions(
        &self,
        params: &TriviaParams,
    ) -> Result<TypedResponse<TriviaResponse>, TriviaError> {
        self.get(QUESTIONS_PATH, params).await
    }

    pub async fn fetch_token(
        &self,
        params: &TokenParams,
    ) -> Result<TypedResponse<TokenResponse>, TriviaError> {
        self.get(TOKEN_PATH, params).await
    }

    pub async fn request_token(&self) -> Result<TokenResponse, TriviaError> {
        self.fetch_token(&TokenParams::Request).await?.json()
    }

    pub async fn reset_token(&self, token: &str) -> Result<TokenResponse, TriviaError> {
        self.fetch_token(&TokenParams::Reset {
            token: token.to_owned(),
        })
        .await?
        .json()
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &impl ToQuery,
    ) -> Result<TypedResponse<R>, TriviaError> {
        let url = format!("{}{}?{}", self.base_url, path, params.to_query());

        let raw = self.transport.get(&url).await?;

        Ok(TypedResponse::new(raw))
    }
}

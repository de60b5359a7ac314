use crate::api::ApiError;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, IntoUrl, RequestBuilder, StatusCode, Url,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON over HTTP against one base URL, authenticated with a bearer token.
#[derive(Clone, Debug)]
pub struct Http {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Error body returned by Jira and Tempo.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    message: Option<String>,
}

impl Http {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Same client, authenticating with `token`.
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token.to_string()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `path` followed by `segments`, each percent-encoded as a single path
    /// segment.
    pub fn segment_url(&self, path: &str, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.url(path)).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .extend(segments);
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        self.get_json_url(self.url(path), query).await
    }

    pub async fn get_json_url<T: DeserializeOwned, U: IntoUrl>(&self, url: U, query: &[(&str, String)]) -> Result<T, ApiError> {
        let request = self.client.get(url).query(query);
        self.send(request).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("HTTP {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(error_for(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn error_for(status: StatusCode, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = if !parsed.error_messages.is_empty() {
        parsed.error_messages.join("; ")
    } else if let Some(message) = parsed.message {
        message
    } else {
        status.canonical_reason().unwrap_or("request failed").to_string()
    };

    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

// Student API HTTP client.
// Attaches the static API key and maps response status codes to errors.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{Result, RosterError};

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Student API client bound to one base URL and API key.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for `base_url` authenticating with `api_key`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut key =
            HeaderValue::from_str(api_key).map_err(|e| RosterError::Other(e.to_string()))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("roster-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(RosterError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request to the student API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RosterError::Network)?;

        check_response(response).await
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(RosterError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(RosterError::NotFound(url))
        }
        status => Err(RosterError::Http {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        }),
    }
}

use crate::models::auth::Credentials;
use crate::{
    ClientError, ClientResult, LoginResponse, RegisterResponse, RemoteDirectory, RemoteUser,
    UserEnvelope, UserPage,
};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Header carrying the directory's API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the remote user directory REST API
pub struct HttpDirectoryClient {
    pub base_url: String,
    pub api_key: Option<String>,
    client: ReqwestClient,
}

impl HttpDirectoryClient {
    /// Create a new client with reqwest's default (unbounded) timeout
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://reqres.in/api")
    /// * `api_key` - Optional key sent in the `x-api-key` header
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self::with_client(base_url, api_key, ReqwestClient::new())
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, api_key, client))
    }

    fn with_client(base_url: &str, api_key: Option<&str>, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()).map(String::from),
            client,
        }
    }

    /// Build a request with the API key header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref api_key) = self.api_key {
            req = req.header(API_KEY_HEADER, api_key);
        }

        req
    }

    /// Execute request, turning non-2xx responses into `ClientError::Api`
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            debug!("Remote directory returned {}: {}", status, text);
            return Err(ClientError::api_error(
                status.as_u16(),
                Self::error_message(&text),
            ));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Pull a message out of `{"error": "..."}` or `{"error": {"message": "..."}}`.
    pub(crate) fn error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        let error = value.get("error")?;

        match error {
            Value::String(message) => Some(message.clone()),
            Value::Object(fields) => fields
                .get("message")
                .and_then(|m| m.as_str())
                .map(String::from),
            _ => None,
        }
    }
}

#[async_trait]
impl RemoteDirectory for HttpDirectoryClient {
    async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let req = self
            .request(Method::POST, "/login")
            .json(&Credentials { email, password });
        self.execute(req).await
    }

    async fn register(&self, email: &str, password: &str) -> ClientResult<RegisterResponse> {
        let req = self
            .request(Method::POST, "/register")
            .json(&Credentials { email, password });
        self.execute(req).await
    }

    async fn list_users(&self, page: u32) -> ClientResult<UserPage> {
        let req = self.request(Method::GET, &format!("/users?page={}", page));
        self.execute(req).await
    }

    async fn get_user(&self, id: i64) -> ClientResult<RemoteUser> {
        let req = self.request(Method::GET, &format!("/users/{}", id));
        let envelope: UserEnvelope = self.execute(req).await?;
        Ok(envelope.data)
    }
}

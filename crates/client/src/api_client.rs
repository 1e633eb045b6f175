//! HTTP client for the console API.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serverdeck_shared::{ApiError, Group, GroupFormData, Server};

/// HTTP client for JSON requests against the console API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        if self.base_url.is_empty() {
            format!("/{path}")
        } else {
            format!("{}/{path}", self.base_url.trim_end_matches('/'))
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Send a request and decode the JSON response. An empty body decodes as `null`.
    async fn send_json<TRes: DeserializeOwned>(rb: RequestBuilder) -> Result<TRes, ApiError> {
        let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        Self::send_json(self.request(Method::GET, path)).await
    }

    pub async fn put_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body = serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;
        let rb = self
            .request(Method::PUT, path)
            .header("Content-Type", "application/json")
            .body(body);
        Self::send_json(rb).await
    }

    // --- Group/Server API methods ---

    pub async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        self.get_json("/api/groups").await
    }

    pub async fn list_servers(&self) -> Result<Vec<Server>, ApiError> {
        self.get_json("/api/servers").await
    }

    /// Replace a group's name, description and server list.
    ///
    /// Returns the updated group when the backend echoes it back.
    pub async fn update_group(
        &self,
        id: &str,
        data: &GroupFormData,
    ) -> Result<Option<Group>, ApiError> {
        self.put_json(&group_path(id), data).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn group_path(id: &str) -> String {
    format!("/api/groups/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new().with_base_url("https://console.example.com/");
        assert_eq!(client.url("/api/servers"), "https://console.example.com/api/servers");
        assert_eq!(client.url("api/servers"), "https://console.example.com/api/servers");
    }

    #[test]
    fn absolute_urls_bypass_the_base() {
        let client = ApiClient::new().with_base_url("https://console.example.com");
        assert_eq!(client.url("https://other.example/api"), "https://other.example/api");
    }

    #[test]
    fn config_base_url_feeds_the_client() {
        let config = ClientConfig {
            api_base_url: "localhost:8080".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new().with_base_url(config.base_url());
        assert_eq!(client.url("/api/groups/g1"), "http://localhost:8080/api/groups/g1");
    }

    #[test]
    fn url_without_base_is_relative() {
        assert_eq!(ApiClient::new().url("api/groups"), "/api/groups");
    }

    #[test]
    fn group_ids_are_percent_encoded() {
        assert_eq!(group_path("g1"), "/api/groups/g1");
        assert_eq!(group_path("eu/west 1"), "/api/groups/eu%2Fwest%201");
    }
}

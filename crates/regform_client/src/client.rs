//! JSON REST client.

use crate::{ClientConfig, ClientError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const JSON: &str = "application/json";

/// Client for a JSON REST endpoint.
///
/// Every request sends `Content-Type` and `Accept` set to
/// `application/json`, then the configured headers, then per-call extra
/// headers; a later header replaces an earlier one with the same name.
/// There is no timeout and no retry: a failed call is reported once.
///
/// # Example
///
/// ```no_run
/// use regform_client::{ApiClient, ClientConfig};
/// use regform_core::UserResponse;
///
/// # async fn run() -> regform_client::Result<()> {
/// let client = ApiClient::new(ClientConfig::new("http://localhost:8080"))?;
/// let users: Vec<UserResponse> = client.get("/api/users", &[]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    headers: HeaderMap,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        for (name, value) in &config.headers {
            let (name, value) = header_pair(name, value)?;
            headers.insert(name, value);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
            http: reqwest::Client::new(),
        })
    }

    /// The server base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `GET {path}` and decodes the JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        extra_headers: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.request(Method::GET, path, extra_headers)?;
        self.send(request).await
    }

    /// Sends `POST {path}` with a JSON body and decodes the JSON response.
    pub async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        extra_headers: &[(&str, &str)],
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)?;
        let request = self.request(Method::POST, path, extra_headers)?.body(body);
        self.send(request).await
    }

    /// Sends `DELETE {path}/{id}` and decodes the JSON response.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        id: u64,
        extra_headers: &[(&str, &str)],
    ) -> Result<T> {
        let path = format!("{}/{}", path.trim_end_matches('/'), id);
        let request = self.request(Method::DELETE, &path, extra_headers)?;
        self.send(request).await
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        extra_headers: &[(&str, &str)],
    ) -> Result<RequestBuilder> {
        let url = self.url(path);
        debug!("{} {}", method, url);
        Ok(self
            .http
            .request(method, url)
            .headers(self.apply_headers(extra_headers)?))
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn apply_headers(&self, extra_headers: &[(&str, &str)]) -> Result<HeaderMap> {
        let mut headers = self.headers.clone();
        for (name, value) in extra_headers {
            let (name, value) = header_pair(name, value)?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = status.canonical_reason().unwrap_or_default();
            warn!("Request failed with status {}", status);
            return Err(ClientError::status(status.as_u16(), message));
        }

        let bytes = response.bytes().await?;
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };

        serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ClientError::InvalidHeader(name.to_string()))?;
    let header_value =
        HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader(name.to_string()))?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ClientConfig::new("http://localhost:8080/")).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = client();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/users"), "http://localhost:8080/api/users");
        assert_eq!(client.url("api/users"), "http://localhost:8080/api/users");
    }

    #[test]
    fn test_extra_headers_override_defaults() {
        let headers = client()
            .apply_headers(&[("Accept", "text/plain"), ("X-Trace", "1")])
            .unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "text/plain");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), JSON);
        assert_eq!(headers.get("x-trace").unwrap(), "1");
    }

    #[test]
    fn test_invalid_header_rejected() {
        assert!(matches!(
            client().apply_headers(&[("bad header", "v")]),
            Err(ClientError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_configured_headers_applied() {
        let config = ClientConfig::builder()
            .base_url("http://localhost")
            .header("Authorization", "Bearer t")
            .build()
            .unwrap();
        let client = ApiClient::new(config).unwrap();

        let headers = client.apply_headers(&[]).unwrap();
        assert_eq!(headers.get("authorization").unwrap(), "Bearer t");
    }
}

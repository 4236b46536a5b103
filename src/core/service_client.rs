// src/core/service_client.rs
//! HTTP client for the jobs API

use anyhow::{Context, Result};
use reqwest::Url;
use std::time::Duration;
use tracing::{error, info, trace};

use super::jobs_api::{ApiRequest, JobsApi};
use super::config_manager::ApiConfig;

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).with_context(|| format!("Invalid API base URL: {}", base_url))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a request. The raw path is handed to the URL parser
    /// as-is, which percent-encodes whatever it has to.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, request.path());
        Url::parse(&raw).with_context(|| format!("Failed to build URL from {}", raw))
    }
}

#[rocket::async_trait]
impl JobsApi for ServiceClient {
    async fn get_json(&self, request: &ApiRequest, token: &str) -> Result<serde_json::Value> {
        let url = self.url_for(request)?;

        info!("Calling jobs API: {}", url);

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(token)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            response
                .json::<serde_json::Value>()
                .await
                .context("Failed to parse JSON response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Jobs API error response {}: {}", status, error_text);
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FilterSelection;

    fn client(base_url: &str) -> ServiceClient {
        ServiceClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: Some(5),
            token: None,
        })
        .unwrap()
    }

    #[test]
    fn test_search_url_matches_api_shape() {
        let mut filters = FilterSelection::new();
        filters.set_search("engineer");

        let url = client("https://apis.ccbp.in/")
            .url_for(&ApiRequest::Jobs(filters.to_query()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://apis.ccbp.in/jobs?employment_type=&minimum_package=&search=engineer"
        );
    }

    #[test]
    fn test_parser_encodes_spaces_only() {
        let filters = FilterSelection::from_params("FULLTIME,INTERNSHIP", "1000000", "data analyst");
        let url = client("https://apis.ccbp.in")
            .url_for(&ApiRequest::Jobs(filters.to_query()))
            .unwrap();
        assert_eq!(
            url.query(),
            Some("employment_type=FULLTIME,INTERNSHIP&minimum_package=1000000&search=data%20analyst")
        );
    }

    /// Serve one canned HTTP response on a local port and hand back the
    /// raw request head that was received
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&head).into_owned()
        });

        (base_url, handle)
    }

    #[tokio::test]
    async fn test_get_json_sends_bearer_token() {
        let (base_url, server) = serve_once("200 OK", r#"{"jobs":[],"total":0}"#).await;
        let filters = FilterSelection::from_params("FULLTIME", "", "rust dev");

        let body = client(&base_url)
            .get_json(&ApiRequest::Jobs(filters.to_query()), "abc.def.ghi")
            .await
            .unwrap();
        assert_eq!(body, serde_json::json!({ "jobs": [], "total": 0 }));

        let head = server.await.unwrap();
        assert!(head.starts_with(
            "GET /jobs?employment_type=FULLTIME&minimum_package=&search=rust%20dev HTTP/1.1\r\n"
        ));
        assert!(head
            .to_ascii_lowercase()
            .contains("authorization: bearer abc.def.ghi\r\n"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let (base_url, server) =
            serve_once("401 Unauthorized", r#"{"error_msg":"invalid token"}"#).await;

        let err = client(&base_url)
            .get_json(&ApiRequest::Profile, "expired")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("401"));
        assert!(server.await.unwrap().starts_with("GET /profile HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_an_error() {
        let (base_url, server) = serve_once("200 OK", "<html>not json</html>").await;

        let result = client(&base_url)
            .get_json(&ApiRequest::JobDetails { id: "abc".to_string() }, "jwt")
            .await;
        assert!(result.is_err());
        assert!(server.await.unwrap().starts_with("GET /jobs/abc HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_an_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let result = client(&base_url).get_json(&ApiRequest::Profile, "jwt").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = ServiceClient::new(&ApiConfig {
            base_url: "not a url".to_string(),
            timeout_seconds: None,
            token: None,
        });
        assert!(result.is_err());
    }
}

//! HTTP transport seam
//!
//! Fetchers talk to the network through the `HttpClient` trait so that the
//! transport can be swapped out in tests. The real implementation wraps
//! `reqwest` with a shared timeout and user agent; redirects are followed
//! transparently by reqwest's default policy.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::NetworkError;

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and return the response body as text.
    async fn get(&self, url: &str) -> Result<String, NetworkError>;
}

pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(user_agent: &str, timeout_seconds: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(user_agent.to_string())
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<String, NetworkError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                NetworkError::Timeout
            } else {
                NetworkError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| NetworkError::InvalidResponse {
            reason: format!("failed to read body: {}", e),
        })
    }
}

/// Escape a query component for substitution into a URL template.
pub fn url_escape(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// In-memory transport: routes requests by URL substring, records every
    /// URL it sees so tests can assert on request counts and ordering.
    pub struct StubHttpClient {
        routes: Vec<(String, std::result::Result<String, String>)>,
        pub requests: Mutex<Vec<String>>,
    }

    impl StubHttpClient {
        pub fn new() -> Self {
            Self {
                routes: Vec::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_body(mut self, url_fragment: &str, body: &str) -> Self {
            self.routes
                .push((url_fragment.to_string(), Ok(body.to_string())));
            self
        }

        pub fn with_failure(mut self, url_fragment: &str, reason: &str) -> Self {
            self.routes
                .push((url_fragment.to_string(), Err(reason.to_string())));
            self
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HttpClient for StubHttpClient {
        async fn get(&self, url: &str) -> Result<String, NetworkError> {
            self.requests.lock().unwrap().push(url.to_string());

            for (fragment, response) in &self.routes {
                if url.contains(fragment.as_str()) {
                    return match response {
                        Ok(body) => Ok(body.clone()),
                        Err(reason) => Err(NetworkError::InvalidResponse {
                            reason: reason.clone(),
                        }),
                    };
                }
            }

            Err(NetworkError::Status {
                status: 404,
                url: url.to_string(),
            })
        }
    }
}

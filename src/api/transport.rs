use crate::error::AppError;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

const API_KEY_HEADER: &str = "X-Riot-Token";

/// Bound and cooldown for the 429 retry loop. Only rate-limit responses are
/// ever retried; every other failure propagates on the first attempt.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub cooldown: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 5,
            cooldown: Duration::from_secs(60),
        }
    }
}

/// One shared HTTP client carrying the API key header and per-attempt timeout.
pub struct Transport {
    http: reqwest::Client,
    retry: RetryPolicy,
}

impl Transport {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, AppError> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| AppError::Config("API key contains invalid header characters".into()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Transport {
            http,
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// GET `url` and decode the JSON body. On 429, waits out the cooldown and
    /// reissues the same request, up to `max_attempts` total tries. The
    /// timeout applies per attempt, not across retries.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        for attempt in 1..=self.retry.max_attempts {
            let response = self
                .http
                .get(url)
                .query(query)
                .send()
                .await
                .map_err(|e| AppError::Transport {
                    endpoint: url.to_string(),
                    source: e,
                })?;

            let status = response.status();

            if status.is_success() {
                let body = response.text().await.map_err(|e| AppError::Transport {
                    endpoint: url.to_string(),
                    source: e,
                })?;
                return serde_json::from_str(&body).map_err(|e| AppError::Decode {
                    endpoint: url.to_string(),
                    source: e,
                });
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!(
                    "rate limit exceeded at {}, waiting {}s before retry (attempt {}/{})",
                    url,
                    self.retry.cooldown.as_secs(),
                    attempt,
                    self.retry.max_attempts
                );
                tokio::time::sleep(self.retry.cooldown).await;
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Status {
                endpoint: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Err(AppError::RateLimitExhausted {
            endpoint: url.to_string(),
            attempts: self.retry.max_attempts,
        })
    }
}

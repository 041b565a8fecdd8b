use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("rate limit exceeded at {endpoint} after {attempts} attempts")]
    RateLimitExhausted { endpoint: String, attempts: u32 },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

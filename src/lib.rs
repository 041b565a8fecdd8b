pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;

pub use api::client::RiotApiClient;
pub use config::Config;
pub use error::AppError;

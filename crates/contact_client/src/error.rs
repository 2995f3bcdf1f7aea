use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid contact endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("contact request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("contact endpoint responded with status {0}")]
    Status(u16),
    #[error("contact delivery task stopped before the request finished")]
    Interrupted,
}

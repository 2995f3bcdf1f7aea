use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::ContactPayload;
use url::Url;

use crate::error::DeliveryError;

#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Sends one submission. Any non-success outcome is an error.
    async fn deliver(&self, endpoint: &str, payload: &ContactPayload) -> Result<(), DeliveryError>;
}

/// POSTs the payload as `application/json`; relative endpoints resolve against `base_url`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: Option<Url>,
}

impl HttpTransport {
    pub fn new(base_url: Option<Url>) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn with_timeout(base_url: Option<Url>, timeout: Duration) -> Result<Self, DeliveryError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn resolve(&self, endpoint: &str) -> Result<Url, DeliveryError> {
        match Url::parse(endpoint) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let Some(base) = &self.base_url else {
                    return Err(DeliveryError::InvalidEndpoint {
                        endpoint: endpoint.to_string(),
                        reason: "relative endpoint without a base url".into(),
                    });
                };
                base.join(endpoint)
                    .map_err(|error| DeliveryError::InvalidEndpoint {
                        endpoint: endpoint.to_string(),
                        reason: error.to_string(),
                    })
            }
            Err(error) => Err(DeliveryError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: error.to_string(),
            }),
        }
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn deliver(&self, endpoint: &str, payload: &ContactPayload) -> Result<(), DeliveryError> {
        let url = self.resolve(endpoint)?;
        let response = self.http.post(url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }
        Ok(())
    }
}

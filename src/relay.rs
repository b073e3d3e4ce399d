//! Outbound email relay. The page only knows the contract "accept a payload,
//! eventually succeed or fail"; delivery itself belongs to the provider.

use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactPayload;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials and endpoint for the relay. Defaults are baked in at compile
/// time and can be overridden with `EMAILJS_*` variables during the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: option_env!("EMAILJS_ENDPOINT")
                .unwrap_or(EMAILJS_ENDPOINT)
                .to_string(),
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or("service_wy5bmoi")
                .to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .unwrap_or("template_xte2q15")
                .to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .unwrap_or("-bKs_FcAEJPR75lKh")
                .to_string(),
        }
    }
}

impl RelayConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = service_id.into();
        self
    }

    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = template_id.into();
        self
    }

    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = public_key.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReceipt {
    pub status: u16,
    pub text: String,
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected message ({status}): {text}")]
    Rejected { status: u16, text: String },
}

/// Anything that can deliver a contact payload. Futures are not `Send` so the
/// browser fetch backend fits.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<RelayReceipt, RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// EmailJS REST client.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<RelayReceipt, RelayError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        };
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok(RelayReceipt {
                status: status.as_u16(),
                text,
            })
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
                text,
            })
        }
    }
}

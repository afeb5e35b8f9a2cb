use odds_logging::{odds_debug, odds_warn};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;

use crate::{Accepted, ClientSettings, SubmitError};

/// Request body of `POST /api/odds/fetch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchRequest<'a> {
    pub url: &'a str,
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, url: &str) -> Result<Accepted, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl ReqwestSubmitter {
    /// No request timeout is set; a hung backend keeps the submission pending.
    pub fn new(settings: &ClientSettings) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| SubmitError::TransportFailure(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: settings.endpoint(),
        })
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, url: &str) -> Result<Accepted, SubmitError> {
        let body = serde_json::to_vec(&FetchRequest { url })
            .map_err(|err| SubmitError::TransportFailure(err.to_string()))?;

        odds_debug!("POST {} url={}", self.endpoint, url);
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        odds_debug!("response status={} body_len={}", status, bytes.len());

        // The body is parsed before the status is looked at, so a non-JSON
        // error page surfaces as a malformed response.
        let parsed: Value = serde_json::from_slice(&bytes).map_err(|err| {
            odds_warn!("response body is not JSON (status {}): {}", status, err);
            SubmitError::MalformedResponse(err.to_string())
        })?;
        let message = response_message(&parsed);

        if !status.is_success() {
            return Err(SubmitError::RequestRejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Accepted {
            status: status.as_u16(),
            message,
        })
    }
}

/// The non-empty string `message` field of an object body, if any.
fn response_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_decode() {
        return SubmitError::MalformedResponse(err.to_string());
    }
    SubmitError::TransportFailure(err.to_string())
}

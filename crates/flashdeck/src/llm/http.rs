//! Blocking HTTP plumbing shared by the networked providers.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{FlashdeckError, Result};

/// Request timeout for hosted services.
pub(super) const HOSTED_TIMEOUT: Duration = Duration::from_secs(60);

/// Local models can be much slower.
pub(super) const LOCAL_TIMEOUT: Duration = Duration::from_secs(120);

/// One chat turn as the chat-style APIs expect it.
#[derive(Debug, Serialize)]
pub(super) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn system(content: &'a str) -> Self {
        Self {
            role: "system",
            content,
        }
    }

    pub fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

/// How a request went wrong, before it is turned into a [`FlashdeckError`].
#[derive(Debug)]
pub(super) enum Failure {
    /// The service could not be reached.
    Connect(reqwest::Error),
    /// Any other transport problem, including a malformed request.
    Transport(reqwest::Error),
    /// The service answered with a non-success status.
    Status(StatusCode, String),
    /// The reply was not the expected JSON.
    Decode(reqwest::Error),
}

impl Failure {
    pub fn into_error(self, service: &str) -> FlashdeckError {
        let message = match self {
            Failure::Connect(e) => format!("could not reach {}: {}", service, e),
            Failure::Transport(e) => format!("{} request failed: {}", service, e),
            Failure::Status(status, body) => {
                format!("{} returned {}: {}", service, status, body.trim())
            }
            Failure::Decode(e) => format!("unreadable {} reply: {}", service, e),
        };
        FlashdeckError::Completion(message)
    }
}

pub(super) fn client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FlashdeckError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Send `request` and decode its JSON reply.
pub(super) fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> std::result::Result<T, Failure> {
    let response = request.send().map_err(|e| {
        if e.is_connect() {
            Failure::Connect(e)
        } else {
            Failure::Transport(e)
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Failure::Status(status, response.text().unwrap_or_default()));
    }

    response.json().map_err(Failure::Decode)
}

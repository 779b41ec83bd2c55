//! Loopback HTTP transport for the interface daemon.
//!
//! Every capability in this crate is one POST against the daemon listening
//! on 127.0.0.1. Responses come back in one of three shapes: nothing worth
//! reading, a `{"value": ...}` envelope, or a `{"replyFilename": ...}`
//! pointer to a file the daemon has already written the answer into.

pub(crate) mod body;
pub mod prompt;
mod reply;

pub use reply::Reply;

use crate::error::{Error, Result};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::env;
use std::fs;
use tracing::debug;

const ENV_PORT: &str = "SDK_SPEAK_PORT";
const MISSING_DAEMON_MSG: &str =
    "The interface daemon does not appear to be running (SDK_SPEAK_PORT is unset or not a port number)";

/// Blocking client for the co-located interface daemon.
#[derive(Clone)]
pub struct Daemon {
    client: Client,
    port: u16,
}

impl Daemon {
    /// Creates a transport against an explicit loopback port.
    pub fn new(port: u16) -> Self {
        Self {
            client: Client::new(),
            port,
        }
    }

    /// Creates a transport from the port named by `SDK_SPEAK_PORT`.
    ///
    /// # Panics
    ///
    /// Panics if the variable is unset or not a port number. Without the
    /// daemon's port no request can ever succeed, so this is treated as a
    /// broken runtime environment rather than a recoverable error.
    pub fn from_env() -> Self {
        let port = env::var(ENV_PORT)
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or_else(|| panic!("{}", MISSING_DAEMON_MSG));
        Self::new(port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn url(&self, endpoint: &str) -> String {
        format!("http://127.0.0.1:{}/{}", self.port, endpoint)
    }

    /// Performs the POST exchange and classifies the response status.
    ///
    /// Statuses of 400 and above are decoded for a JSON diagnostic body and
    /// reported as errors; everything else is handed back for the caller to
    /// interpret.
    fn exchange<B: Serialize>(&self, endpoint: &str, request_body: &B) -> Result<Response> {
        let url = self.url(endpoint);
        debug!(%url, "daemon request");

        let response = self.client.post(&url).json(request_body).send()?;

        let status = response.status().as_u16();
        if status >= 400 {
            let text = response.text()?;
            return Err(match serde_json::from_str::<Value>(&text) {
                Ok(diagnostic) => Error::Status { status, diagnostic },
                Err(_) => Error::StatusOpaque { status, body: text },
            });
        }

        Ok(response)
    }

    /// Fire-and-forget dispatch: the response body is discarded.
    pub fn notify<B: Serialize>(&self, endpoint: &str, request_body: &B) -> Result<()> {
        self.exchange(endpoint, request_body)?;
        Ok(())
    }

    /// Synchronous dispatch: decodes the response as a `{"value": ...}`
    /// envelope and returns the value, which may be any JSON shape.
    pub fn request_value<B: Serialize>(&self, endpoint: &str, request_body: &B) -> Result<Value> {
        let response = self.exchange(endpoint, request_body)?;
        let envelope: ValueEnvelope = decode(response)?;
        Ok(envelope.value)
    }

    /// Asynchronous dispatch: the response names a reply file the daemon has
    /// finished writing before it answered, so a single read picks up the
    /// answer map. There is no polling or retry.
    pub fn request_via_reply_file<B: Serialize>(
        &self,
        endpoint: &str,
        request_body: &B,
    ) -> Result<Reply> {
        let response = self.exchange(endpoint, request_body)?;
        let envelope: ReplyEnvelope = decode(response)?;

        debug!(path = %envelope.reply_filename, "reading reply file");
        let raw = fs::read_to_string(&envelope.reply_filename).map_err(|source| {
            Error::ReplyFile {
                path: envelope.reply_filename.clone(),
                source,
            }
        })?;

        let values: Map<String, Value> = serde_json::from_str(&raw)?;
        Ok(Reply::new(values))
    }
}

#[derive(Deserialize)]
struct ValueEnvelope {
    #[serde(default)]
    value: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyEnvelope {
    reply_filename: String,
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text()?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_endpoint_on_loopback() {
        let daemon = Daemon::new(4567);
        assert_eq!(daemon.url("config/get"), "http://127.0.0.1:4567/config/get");
        assert_eq!(daemon.url("prompt"), "http://127.0.0.1:4567/prompt");
    }

    #[test]
    fn test_value_envelope_tolerates_missing_value() {
        let envelope: ValueEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.value, Value::Null);
    }
}

//! Daemon-backed configuration, state, secrets, and telemetry, plus the
//! environment the daemon exports to workflow processes.

use std::collections::HashMap;
use std::env;

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::daemon::body::{
    EventsBody, GetSecretBody, KeyBody, KeyValueBody, SetSecretBody, TrackBody,
};
use crate::daemon::Daemon;
use crate::error::{Error, Result};

pub(crate) const ENV_INTERFACE_TYPE: &str = "SDK_INTERFACE_TYPE";
const ENV_HOST_PLATFORM: &str = "OPS_HOST_PLATFORM";
const ENV_HOME_DIR: &str = "SDK_HOME_DIR";
const ENV_STATE_DIR: &str = "SDK_STATE_DIR";
const ENV_CONFIG_DIR: &str = "SDK_CONFIG_DIR";

fn env_or(name: &str, fallback: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}

/// Platform the daemon reports running on, `unknown` when unset.
pub fn host_os() -> String {
    env_or(ENV_HOST_PLATFORM, "unknown")
}

/// Interface the daemon renders on, `terminal` unless overridden.
pub fn interface_type() -> String {
    env_or(ENV_INTERFACE_TYPE, "terminal")
}

/// Home directory of the account the daemon runs under.
pub fn home_dir() -> String {
    env_or(ENV_HOME_DIR, "/root")
}

/// Directory reserved for this workflow's state files.
///
/// Panics when the daemon did not export `SDK_STATE_DIR`. Prefer
/// [`Sdk::get_state`] and [`Sdk::set_state`], which keep the data with the
/// daemon instead of on local disk.
pub fn state_path() -> String {
    env::var(ENV_STATE_DIR)
        .ok()
        .filter(|dir| !dir.is_empty())
        .unwrap_or_else(|| {
            panic!("State directory not found in environment var {}", ENV_STATE_DIR)
        })
}

/// Directory reserved for this workflow's config files.
///
/// Panics when the daemon did not export `SDK_CONFIG_DIR`. Prefer
/// [`Sdk::get_config`] and [`Sdk::set_config`].
pub fn config_path() -> String {
    env::var(ENV_CONFIG_DIR)
        .ok()
        .filter(|dir| !dir.is_empty())
        .unwrap_or_else(|| {
            panic!("Config directory not found in environment var {}", ENV_CONFIG_DIR)
        })
}

/// Key/value storage and telemetry delegated to the daemon.
pub struct Sdk {
    daemon: Daemon,
}

impl Sdk {
    /// Connect using the port the daemon exported to this process.
    ///
    /// Panics when `SDK_SPEAK_PORT` is unset or not a port number.
    pub fn new() -> Self {
        Self {
            daemon: Daemon::from_env(),
        }
    }

    pub fn with_daemon(daemon: Daemon) -> Self {
        Self { daemon }
    }

    /// Read one config value. Missing keys come back as an empty string.
    pub fn get_config(&self, key: &str) -> Result<String> {
        let value = self
            .daemon
            .request_value("config/get", &KeyBody { key: key.to_string() })?;
        match value {
            Value::Null => Ok(String::new()),
            Value::String(text) => Ok(text),
            other => Err(Error::UnexpectedReply {
                expected: "string",
                value: other,
            }),
        }
    }

    /// All config entries for this workflow.
    pub fn get_all_config(&self) -> Result<HashMap<String, String>> {
        let value = self.daemon.request_value("config/get-all", &json!({}))?;
        let entries = match value {
            Value::Object(entries) => entries,
            other => {
                return Err(Error::UnexpectedReply {
                    expected: "object",
                    value: other,
                })
            }
        };
        let mut configs = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            match value {
                Value::String(text) => {
                    configs.insert(key, text);
                }
                other => {
                    return Err(Error::UnexpectedReply {
                        expected: "string",
                        value: other,
                    })
                }
            }
        }
        Ok(configs)
    }

    pub fn set_config(&self, key: &str, value: &str) -> Result<()> {
        let body = KeyValueBody {
            key: key.to_string(),
            value: Value::String(value.to_string()),
        };
        self.daemon.notify("config/set", &body)
    }

    /// Delete one config key, returning whether the daemon removed it.
    pub fn delete_config(&self, key: &str) -> Result<bool> {
        let value = self
            .daemon
            .request_value("config/delete", &KeyBody { key: key.to_string() })?;
        match value {
            Value::Bool(deleted) => Ok(deleted),
            other => Err(Error::UnexpectedReply {
                expected: "boolean",
                value: other,
            }),
        }
    }

    /// Read one state entry as raw JSON, `Value::Null` when unset.
    pub fn get_state(&self, key: &str) -> Result<Value> {
        self.daemon
            .request_value("state/get", &KeyBody { key: key.to_string() })
    }

    /// All state entries for this workflow.
    pub fn get_all_state(&self) -> Result<Map<String, Value>> {
        let value = self.daemon.request_value("state/get-all", &json!({}))?;
        match value {
            Value::Object(entries) => Ok(entries),
            other => Err(Error::UnexpectedReply {
                expected: "object",
                value: other,
            }),
        }
    }

    /// Store one state entry. Anything serializable goes; the daemon keeps
    /// the JSON as-is.
    pub fn set_state<V: Serialize>(&self, key: &str, value: V) -> Result<()> {
        let body = KeyValueBody {
            key: key.to_string(),
            value: serde_json::to_value(value)?,
        };
        self.daemon.notify("state/set", &body)
    }

    /// Fetch a secret, prompting the user through the daemon when the
    /// store has no entry for `key` yet.
    pub fn get_secret(&self, key: &str) -> Result<String> {
        self.request_secret(key, false)
    }

    /// Like [`get_secret`](Self::get_secret) but the daemon obscures the
    /// value while the user types it.
    pub fn get_secret_hidden(&self, key: &str) -> Result<String> {
        self.request_secret(key, true)
    }

    fn request_secret(&self, key: &str, hidden: bool) -> Result<String> {
        let body = GetSecretBody {
            key: key.to_string(),
            hidden,
        };
        let reply = self.daemon.request_via_reply_file("secret/get", &body)?;
        reply.string(key)
    }

    /// Store a secret. When the store already holds `key` the daemon asks
    /// the user whether to overwrite it. Returns the key the daemon stored
    /// the value under; the reply names it under `"key"`.
    pub fn set_secret(&self, key: &str, value: &str) -> Result<String> {
        let body = SetSecretBody {
            key: key.to_string(),
            value: value.to_string(),
        };
        let reply = self.daemon.request_via_reply_file("secret/set", &body)?;
        match reply.get("key") {
            Some(Value::String(stored)) => Ok(stored.clone()),
            None | Some(Value::Null) => Err(Error::SecretSetFailed(key.to_string())),
            Some(other) => Err(Error::UnexpectedReply {
                expected: "string",
                value: other.clone(),
            }),
        }
    }

    /// Record a telemetry event. Daemon failures are logged and swallowed
    /// so telemetry never interrupts workflow logic.
    pub fn track(&self, tags: &[&str], event: &str, metadata: Map<String, Value>) -> Result<()> {
        let body = TrackBody {
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            event: event.to_string(),
            metadata,
        };
        if let Err(error) = self.daemon.notify("track", &body) {
            debug!(%error, "track event dropped");
        }
        Ok(())
    }

    /// Daemon-recorded events between two dates. The daemon owns the date
    /// format.
    pub fn events(&self, start: &str, end: &str) -> Result<Vec<Map<String, Value>>> {
        let body = EventsBody {
            start: start.to_string(),
            end: end.to_string(),
        };
        let value = self.daemon.request_value("events", &body)?;
        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                return Err(Error::UnexpectedReply {
                    expected: "array",
                    value: other,
                })
            }
        };
        let mut events = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                Value::Object(event) => events.push(event),
                other => {
                    return Err(Error::UnexpectedReply {
                        expected: "object",
                        value: other,
                    })
                }
            }
        }
        Ok(events)
    }
}

impl Default for Sdk {
    fn default() -> Self {
        Self::new()
    }
}

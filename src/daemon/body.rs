//! Request bodies for the daemon's command endpoints.
//!
//! Optional fields are dropped from the wire entirely when unset; the
//! daemon reads key presence as meaning.

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize)]
pub struct PrintBody {
    pub text: String,
}

pub type SpinnerStartBody = PrintBody;

#[derive(Debug, Clone, Serialize)]
pub struct SpinnerStopBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

pub type ProgressBarStopBody = SpinnerStopBody;

#[derive(Debug, Clone, Serialize)]
pub struct ProgressBarStartBody {
    pub length: i64,
    pub initial: i64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressBarAdvanceBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetSecretBody {
    pub key: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetSecretBody {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyBody {
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyValueBody {
    pub key: String,
    pub value: Value,
}

/// Telemetry event body. Metadata entries are merged into the top level of
/// the serialized object alongside `tags` and `event`.
#[derive(Debug, Clone, Serialize)]
pub struct TrackBody {
    pub tags: Vec<String>,
    pub event: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventsBody {
    pub start: String,
    pub end: String,
}

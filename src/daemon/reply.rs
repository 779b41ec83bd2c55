use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Decoded contents of a daemon reply file.
///
/// Values are keyed by the name of the prompt (or request field) that
/// produced them. The accessors enforce the type each call site expects and
/// report missing keys and mismatched shapes as errors.
#[derive(Debug, Clone)]
pub struct Reply {
    values: Map<String, Value>,
}

impl Reply {
    pub(crate) fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Consumes the reply, returning the raw key/value map.
    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }

    fn require(&self, key: &str) -> Result<&Value> {
        self.values
            .get(key)
            .ok_or_else(|| Error::MissingReplyKey(key.to_string()))
    }

    pub fn string(&self, key: &str) -> Result<String> {
        match self.require(key)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(unexpected("string", other)),
        }
    }

    /// Integer accessor. The daemon may carry whole numbers in a fractional
    /// representation; those are truncated toward zero.
    pub fn integer(&self, key: &str) -> Result<i64> {
        match self.require(key)? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i)
                } else if let Some(f) = n.as_f64() {
                    Ok(f as i64)
                } else {
                    Err(unexpected("number", &Value::Number(n.clone())))
                }
            }
            other => Err(unexpected("number", other)),
        }
    }

    pub fn boolean(&self, key: &str) -> Result<bool> {
        match self.require(key)? {
            Value::Bool(b) => Ok(*b),
            other => Err(unexpected("boolean", other)),
        }
    }

    /// Accessor for replies that are a sequence of strings, as produced by
    /// checkbox prompts. Any non-string entry fails the whole lookup.
    pub fn strings(&self, key: &str) -> Result<Vec<String>> {
        match self.require(key)? {
            Value::Array(entries) => entries
                .iter()
                .map(|entry| match entry {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(unexpected("string", other)),
                })
                .collect(),
            other => Err(unexpected("array", other)),
        }
    }

    /// Accessor for RFC 3339 timestamp replies.
    pub fn timestamp(&self, key: &str) -> Result<DateTime<Utc>> {
        let raw = self.string(key)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|_| Error::InvalidTimestamp(raw))
    }
}

fn unexpected(expected: &'static str, value: &Value) -> Error {
    Error::UnexpectedReply {
        expected,
        value: value.clone(),
    }
}

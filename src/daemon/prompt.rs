//! Serializable prompt definitions.
//!
//! Each prompt kind carries the common envelope (name, message, optional
//! CLI flag) plus its own fields, and serializes under a `type` tag the
//! daemon dispatches on. Optional fields that were never set are left out
//! of the wire body entirely: the daemon reads key presence as meaning, so
//! an absent `default` and a `default` of zero are different prompts.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A prompt definition ready to send to the daemon.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PromptDefinition {
    Input(InputPrompt),
    Number(NumberPrompt),
    Secret(SecretPrompt),
    Password(PasswordPrompt),
    Confirm(ConfirmPrompt),
    List(ListPrompt),
    Autocomplete(ListPrompt),
    Checkbox(CheckboxPrompt),
    Editor(EditorPrompt),
    Datetime(DatetimePrompt),
}

impl PromptDefinition {
    /// The key the daemon files this prompt's answer under.
    pub fn name(&self) -> &str {
        match self {
            PromptDefinition::Input(p) => &p.name,
            PromptDefinition::Number(p) => &p.name,
            PromptDefinition::Secret(p) => &p.name,
            PromptDefinition::Password(p) => &p.name,
            PromptDefinition::Confirm(p) => &p.name,
            PromptDefinition::List(p) => &p.name,
            PromptDefinition::Autocomplete(p) => &p.name,
            PromptDefinition::Checkbox(p) => &p.name,
            PromptDefinition::Editor(p) => &p.name,
            PromptDefinition::Datetime(p) => &p.name,
        }
    }
}

/// Single-line text prompt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputPrompt {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub allow_empty: bool,
}

impl InputPrompt {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            flag: None,
            default: None,
            allow_empty: false,
        }
    }

    /// Set the command-line flag matched to this prompt.
    pub fn flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }

    /// Set the value offered when the user just presses enter.
    pub fn default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    /// Accept an empty line as an answer. Has no effect once a default is
    /// set.
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }
}

/// Numeric prompt with optional bounds.
///
/// `default`, `maximum`, and `minimum` are tri-state: leaving one unset is
/// not the same as setting it to zero, and only set fields reach the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberPrompt {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
}

impl NumberPrompt {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            flag: None,
            default: None,
            maximum: None,
            minimum: None,
        }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }

    pub fn default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }

    pub fn maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

/// Secret-store entry prompt. The name doubles as the store key offered to
/// the user as the default source.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretPrompt {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl SecretPrompt {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            flag: None,
        }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }
}

/// Obscured-input prompt, optionally asking for re-entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPrompt {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub confirm: bool,
}

impl PasswordPrompt {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            flag: None,
            confirm: false,
        }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }

    /// Ask the user to type the password twice.
    pub fn confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }
}

/// Yes/no prompt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPrompt {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub default: bool,
}

impl ConfirmPrompt {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            flag: None,
            default: false,
        }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }

    pub fn default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

/// A list default is either a literal choice value or an index into the
/// choices, never both.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ListDefault {
    Value(String),
    Index(usize),
}

/// Pick-one prompt over a fixed, ordered set of choices.
///
/// `autocomplete(true)` switches the daemon to its autocomplete rendering;
/// the definition shape is identical either way, only the `type` tag
/// changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPrompt {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ListDefault>,
    #[serde(skip)]
    pub autocomplete: bool,
}

impl ListPrompt {
    pub fn new(name: &str, message: &str, choices: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            flag: None,
            choices: choices.iter().map(|c| c.to_string()).collect(),
            default: None,
            autocomplete: false,
        }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }

    /// Default by literal choice value.
    pub fn default_value(mut self, value: &str) -> Self {
        self.default = Some(ListDefault::Value(value.to_string()));
        self
    }

    /// Default by position in the choices.
    pub fn default_index(mut self, index: usize) -> Self {
        self.default = Some(ListDefault::Index(index));
        self
    }

    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = autocomplete;
        self
    }
}

/// A checkbox default selects by choice values or by indices, never both.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CheckboxDefault {
    Values(Vec<String>),
    Indices(Vec<usize>),
}

/// Pick-many prompt; the reply is a sequence of the selected choices.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxPrompt {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<CheckboxDefault>,
}

impl CheckboxPrompt {
    pub fn new(name: &str, message: &str, choices: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            flag: None,
            choices: choices.iter().map(|c| c.to_string()).collect(),
            default: None,
        }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }

    pub fn default_values(mut self, values: &[&str]) -> Self {
        self.default = Some(CheckboxDefault::Values(
            values.iter().map(|v| v.to_string()).collect(),
        ));
        self
    }

    pub fn default_indices(mut self, indices: &[usize]) -> Self {
        self.default = Some(CheckboxDefault::Indices(indices.to_vec()));
        self
    }
}

/// Multi-line prompt opened in an editor on terminal interfaces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorPrompt {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl EditorPrompt {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            flag: None,
            default: None,
        }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }

    /// Seed the editor buffer, e.g. with a template to fill in.
    pub fn default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }
}

/// Which picker the daemon shows for a datetime prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatetimeVariant {
    Datetime,
    Date,
    Time,
}

/// Date and/or time picker prompt. Timestamps cross the wire as RFC 3339
/// strings; unset bounds are omitted rather than sent as a zero time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatetimePrompt {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub variant: DatetimeVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<DateTime<Utc>>,
}

impl DatetimePrompt {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            flag: None,
            variant: DatetimeVariant::Datetime,
            default: None,
            maximum: None,
            minimum: None,
        }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }

    pub fn variant(mut self, variant: DatetimeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn default(mut self, default: DateTime<Utc>) -> Self {
        self.default = Some(default);
        self
    }

    pub fn maximum(mut self, maximum: DateTime<Utc>) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn minimum(mut self, minimum: DateTime<Utc>) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

impl From<InputPrompt> for PromptDefinition {
    fn from(prompt: InputPrompt) -> Self {
        PromptDefinition::Input(prompt)
    }
}

impl From<NumberPrompt> for PromptDefinition {
    fn from(prompt: NumberPrompt) -> Self {
        PromptDefinition::Number(prompt)
    }
}

impl From<SecretPrompt> for PromptDefinition {
    fn from(prompt: SecretPrompt) -> Self {
        PromptDefinition::Secret(prompt)
    }
}

impl From<PasswordPrompt> for PromptDefinition {
    fn from(prompt: PasswordPrompt) -> Self {
        PromptDefinition::Password(prompt)
    }
}

impl From<ConfirmPrompt> for PromptDefinition {
    fn from(prompt: ConfirmPrompt) -> Self {
        PromptDefinition::Confirm(prompt)
    }
}

impl From<ListPrompt> for PromptDefinition {
    fn from(prompt: ListPrompt) -> Self {
        if prompt.autocomplete {
            PromptDefinition::Autocomplete(prompt)
        } else {
            PromptDefinition::List(prompt)
        }
    }
}

impl From<CheckboxPrompt> for PromptDefinition {
    fn from(prompt: CheckboxPrompt) -> Self {
        PromptDefinition::Checkbox(prompt)
    }
}

impl From<EditorPrompt> for PromptDefinition {
    fn from(prompt: EditorPrompt) -> Self {
        PromptDefinition::Editor(prompt)
    }
}

impl From<DatetimePrompt> for PromptDefinition {
    fn from(prompt: DatetimePrompt) -> Self {
        PromptDefinition::Datetime(prompt)
    }
}

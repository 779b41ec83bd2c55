//! Interactive prompts rendered by the daemon.
//!
//! Every method here blocks until the user has answered: the daemon
//! acknowledges the prompt with a reply-file path and only responds once
//! the answer is durably written, so a single file read completes the
//! exchange.

use chrono::{DateTime, Utc};

use crate::daemon::prompt::{
    CheckboxPrompt, ConfirmPrompt, DatetimePrompt, EditorPrompt, InputPrompt, ListPrompt,
    NumberPrompt, PasswordPrompt, PromptDefinition, SecretPrompt,
};
use crate::daemon::{Daemon, Reply};
use crate::error::Result;

/// Asks the user questions through the daemon's interface.
///
/// ```no_run
/// use roadie::{InputPrompt, Prompt};
///
/// let prompt = Prompt::new();
/// let color = prompt.input(InputPrompt::new("color", "Favorite color?").default("teal"))?;
/// # Ok::<(), roadie::Error>(())
/// ```
pub struct Prompt {
    daemon: Daemon,
}

impl Prompt {
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

    /// Ask for a line of text.
    pub fn input(&self, prompt: InputPrompt) -> Result<String> {
        let definition = PromptDefinition::from(prompt);
        let reply = self.ask(&definition)?;
        reply.string(definition.name())
    }

    /// Ask for an integer, bounded if the definition set bounds.
    pub fn number(&self, prompt: NumberPrompt) -> Result<i64> {
        let definition = PromptDefinition::from(prompt);
        let reply = self.ask(&definition)?;
        reply.integer(definition.name())
    }

    /// Ask for a secret-store entry by name.
    pub fn secret(&self, prompt: SecretPrompt) -> Result<String> {
        let definition = PromptDefinition::from(prompt);
        let reply = self.ask(&definition)?;
        reply.string(definition.name())
    }

    /// Ask for a password with obscured input.
    pub fn password(&self, prompt: PasswordPrompt) -> Result<String> {
        let definition = PromptDefinition::from(prompt);
        let reply = self.ask(&definition)?;
        reply.string(definition.name())
    }

    /// Ask a yes/no question.
    pub fn confirm(&self, prompt: ConfirmPrompt) -> Result<bool> {
        let definition = PromptDefinition::from(prompt);
        let reply = self.ask(&definition)?;
        reply.boolean(definition.name())
    }

    /// Ask the user to pick one choice. A definition built with
    /// `autocomplete(true)` renders as a filter-as-you-type list instead.
    pub fn list(&self, prompt: ListPrompt) -> Result<String> {
        let definition = PromptDefinition::from(prompt);
        let reply = self.ask(&definition)?;
        reply.string(definition.name())
    }

    /// Ask the user to pick any number of choices.
    pub fn checkbox(&self, prompt: CheckboxPrompt) -> Result<Vec<String>> {
        let definition = PromptDefinition::from(prompt);
        let reply = self.ask(&definition)?;
        reply.strings(definition.name())
    }

    /// Open the user's editor and return the saved buffer.
    pub fn editor(&self, prompt: EditorPrompt) -> Result<String> {
        let definition = PromptDefinition::from(prompt);
        let reply = self.ask(&definition)?;
        reply.string(definition.name())
    }

    /// Ask for a date and/or time.
    pub fn datetime(&self, prompt: DatetimePrompt) -> Result<DateTime<Utc>> {
        let definition = PromptDefinition::from(prompt);
        let reply = self.ask(&definition)?;
        reply.timestamp(definition.name())
    }

    fn ask(&self, definition: &PromptDefinition) -> Result<Reply> {
        self.daemon.request_via_reply_file("prompt", definition)
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

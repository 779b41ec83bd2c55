//! One handle over every daemon capability.

use crate::daemon::Daemon;
use crate::prompt::Prompt;
use crate::sdk::Sdk;
use crate::ux::Ux;

/// Bundles the prompt, UX, and SDK facades over one daemon connection.
///
/// ```no_run
/// use roadie::{Client, ConfirmPrompt};
///
/// let client = Client::new();
/// client.ux.print("Checking the release branch")?;
/// if client.prompt.confirm(ConfirmPrompt::new("deploy", "Deploy now?"))? {
///     client.sdk.set_state("lastDeploy", "2024-06-01")?;
/// }
/// # Ok::<(), roadie::Error>(())
/// ```
pub struct Client {
    pub prompt: Prompt,
    pub ux: Ux,
    pub sdk: Sdk,
}

impl Client {
    /// Connect using the port the daemon exported to this process.
    ///
    /// Panics when `SDK_SPEAK_PORT` is unset or not a port number.
    pub fn new() -> Self {
        Self::with_daemon(Daemon::from_env())
    }

    pub fn with_daemon(daemon: Daemon) -> Self {
        Self {
            prompt: Prompt::with_daemon(daemon.clone()),
            ux: Ux::with_daemon(daemon.clone()),
            sdk: Sdk::with_daemon(daemon),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

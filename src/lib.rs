//! Workflow SDK for the Ops interface daemon.
//!
//! Workflows run as child processes of the daemon and reach back to it
//! over loopback HTTP for everything user-facing: prompts, printed
//! output, spinners and progress bars, plus config, state, secret, and
//! telemetry storage. The daemon exports the port to call back on in
//! `SDK_SPEAK_PORT`; any facade constructed with `new()` connects
//! through it.
//!
//! [`Client`] bundles the three capability facades; each is also usable
//! on its own.

pub mod client;
pub mod daemon;
pub mod error;
pub mod prompt;
pub mod sdk;
pub mod ux;

pub use client::Client;
pub use daemon::prompt::{
    CheckboxDefault, CheckboxPrompt, ConfirmPrompt, DatetimePrompt, DatetimeVariant, EditorPrompt,
    InputPrompt, ListDefault, ListPrompt, NumberPrompt, PasswordPrompt, PromptDefinition,
    SecretPrompt,
};
pub use daemon::{Daemon, Reply};
pub use error::{Error, Result};
pub use prompt::Prompt;
pub use sdk::Sdk;
pub use ux::{InterfaceKind, Ux};

//! Non-interactive output rendered by the daemon.

use crate::daemon::body::{
    PrintBody, ProgressBarAdvanceBody, ProgressBarStartBody, ProgressBarStopBody,
    SpinnerStartBody, SpinnerStopBody,
};
use crate::daemon::Daemon;
use crate::error::Result;
use crate::sdk;

/// How the daemon renders output to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    Terminal,
    Slack,
}

impl InterfaceKind {
    /// Detect the interface from `SDK_INTERFACE_TYPE`. Anything other than
    /// `slack` renders as a terminal.
    pub fn from_env() -> Self {
        match sdk::interface_type().as_str() {
            "slack" => InterfaceKind::Slack,
            _ => InterfaceKind::Terminal,
        }
    }
}

/// Prints, spinners, and progress bars drawn by the daemon.
pub struct Ux {
    daemon: Daemon,
    interface: InterfaceKind,
}

impl Ux {
    /// Connect using the port the daemon exported to this process.
    ///
    /// Panics when `SDK_SPEAK_PORT` is unset or not a port number.
    pub fn new() -> Self {
        Self {
            daemon: Daemon::from_env(),
            interface: InterfaceKind::from_env(),
        }
    }

    pub fn with_daemon(daemon: Daemon) -> Self {
        Self {
            daemon,
            interface: InterfaceKind::from_env(),
        }
    }

    pub fn with_interface(daemon: Daemon, interface: InterfaceKind) -> Self {
        Self { daemon, interface }
    }

    /// Wrap `text` in the interface's bold markup.
    pub fn bold(&self, text: &str) -> String {
        match self.interface {
            InterfaceKind::Terminal => format!("\x1b[1m{}\x1b[0m", text),
            InterfaceKind::Slack => format!("*{}*", text),
        }
    }

    /// Wrap `text` in the interface's italic markup.
    pub fn italic(&self, text: &str) -> String {
        match self.interface {
            InterfaceKind::Terminal => format!("\x1b[3m{}\x1b[23m", text),
            InterfaceKind::Slack => format!("_{}_", text),
        }
    }

    /// Show `text` to the user.
    pub fn print(&self, text: &str) -> Result<()> {
        let body = PrintBody {
            text: text.to_string(),
        };
        self.daemon.notify("print", &body)
    }

    pub fn spinner_start(&self, text: &str) -> Result<()> {
        let body = SpinnerStartBody {
            text: text.to_string(),
        };
        self.daemon.notify("start-spinner", &body)
    }

    /// Stop the spinner, optionally replacing its text with a final
    /// message.
    pub fn spinner_stop(&self, text: Option<&str>) -> Result<()> {
        let body = SpinnerStopBody {
            text: text.map(|text| text.to_string()),
        };
        self.daemon.notify("stop-spinner", &body)
    }

    pub fn progress_bar_start(&self, length: i64, initial: i64, text: &str) -> Result<()> {
        let body = ProgressBarStartBody {
            length,
            initial,
            text: text.to_string(),
        };
        self.daemon.notify("progress-bar/start", &body)
    }

    /// Advance the progress bar, by one step when `increment` is unset.
    pub fn progress_bar_advance(&self, increment: Option<i64>) -> Result<()> {
        let body = ProgressBarAdvanceBody { increment };
        self.daemon.notify("progress-bar/advance", &body)
    }

    pub fn progress_bar_stop(&self, text: Option<&str>) -> Result<()> {
        let body = ProgressBarStopBody {
            text: text.map(|text| text.to_string()),
        };
        self.daemon.notify("progress-bar/stop", &body)
    }
}

impl Default for Ux {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_markup() {
        let ux = Ux::with_interface(Daemon::new(1), InterfaceKind::Terminal);
        assert_eq!(ux.bold("loud"), "\x1b[1mloud\x1b[0m");
        assert_eq!(ux.italic("soft"), "\x1b[3msoft\x1b[23m");
    }

    #[test]
    fn test_slack_markup() {
        let ux = Ux::with_interface(Daemon::new(1), InterfaceKind::Slack);
        assert_eq!(ux.bold("loud"), "*loud*");
        assert_eq!(ux.italic("soft"), "_soft_");
    }
}

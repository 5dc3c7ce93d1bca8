//! Outcome reporting for a publish.

use tracing::{error, info};

use crate::api::PublishError;

/// Something that can show a short-lived message to the user.
pub trait Notifier {
    fn notice(&self, message: &str);
}

/// Shows notices on stdout. Logs go to stderr, so the two never interleave
/// in a pipe.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notice(&self, message: &str) {
        println!("{}", message);
    }
}

/// Log the message, log the error if there is one, then show the message.
pub fn notify(notifier: &impl Notifier, err: Option<&PublishError>, message: &str) {
    info!("{}", message);

    if let Some(e) = err {
        error!(error = ?e, "{}", e);
    }

    notifier.notice(message);
}

use business::domain::notifier::Notifier;
use tracing::{info, warn};

/// Notifier for headless runs: user-facing messages end up in the log.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "Inventory -- notify", "{}", message);
    }
    fn failure(&self, message: &str) {
        warn!(target: "Inventory -- notify", "{}", message);
    }
}

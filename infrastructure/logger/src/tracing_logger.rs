use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`, so business messages share the
/// subscriber and `RUST_LOG` filtering of the rest of the service.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "call_panel", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "call_panel", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "call_panel", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "call_panel", "{}", message);
    }
}

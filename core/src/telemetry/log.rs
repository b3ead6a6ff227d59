use log::debug;

/// Thin wrapper over the `log` facade for per-computation summaries.
///
/// Simulation calls arrive at slider rate, so summaries go out at debug level.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        debug!("{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

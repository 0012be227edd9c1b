use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_REPLY_DELAY_MS;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// How long a simulated agent "thinks" before its reply is delivered
    pub reply_delay: Duration,
    /// Directory the attachment picker opens in; `None` falls back to home
    pub start_dir: Option<PathBuf>,
}

impl CoreConfig {
    pub fn new(reply_delay_ms: u64) -> Self {
        Self {
            reply_delay: Duration::from_millis(reply_delay_ms),
            start_dir: None,
        }
    }

    pub fn with_start_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.start_dir = Some(dir.into());
        self
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY_MS)
    }
}

//! Preview scheduling configuration.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Default debounce window after the last edit, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;

/// Configuration for [`PreviewScheduler`](super::PreviewScheduler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct PreviewConfig {
    /// Quiet period after the last request before the provider is called.
    #[cfg_attr(
        feature = "config",
        arg(long = "preview-debounce-ms", env = "PREVIEW_DEBOUNCE_MS", default_value = "400")
    )]
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl PreviewConfig {
    /// Sets the debounce window.
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Returns the debounce window as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

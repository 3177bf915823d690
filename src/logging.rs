//! Tracing setup and log-safe rendering of credentials.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Number of key id characters that may appear in logs and diagnostics.
pub const KEY_ID_VISIBLE_CHARS: usize = 12;

/// Install the global subscriber. `RUST_LOG` wins over `LOG_LEVEL` when set.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .with_target(true)
            .try_init(),
        LogFormat::Plain => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {}", e);
    }
}

/// Leading characters of a key id followed by `...`. At most
/// [`KEY_ID_VISIBLE_CHARS`] are shown, and never the whole id: ids that short
/// show only their first half.
pub fn mask_key_id(key_id: &str) -> String {
    let len = key_id.chars().count();
    let visible = if len > KEY_ID_VISIBLE_CHARS {
        KEY_ID_VISIBLE_CHARS
    } else {
        len / 2
    };
    let prefix: String = key_id.chars().take(visible).collect();
    format!("{}...", prefix)
}

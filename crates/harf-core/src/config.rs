//! Global label cache configuration
//!
//! The label cache is **disabled by default**. Turn it on with
//! `set_caching_enabled(true)` or the `HARF_CACHE=1` environment variable.
//!
//! ```
//! use harf_core::config;
//!
//! config::set_caching_enabled(true);
//! assert!(config::is_caching_enabled());
//! config::set_caching_enabled(false);
//! ```
//!
//! ```bash
//! HARF_CACHE=1 harf process "مرحبا"
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Environment variable consulted on first use
pub const CACHE_ENV_VAR: &str = "HARF_CACHE";

static CACHING_ENABLED: AtomicBool = AtomicBool::new(false);

static ENV_CHECKED: OnceLock<()> = OnceLock::new();

fn check_env() {
    ENV_CHECKED.get_or_init(|| {
        if let Ok(val) = std::env::var(CACHE_ENV_VAR) {
            if parse_flag(&val) {
                CACHING_ENABLED.store(true, Ordering::SeqCst);
                log::info!("harf label cache enabled via {} env var", CACHE_ENV_VAR);
            }
        }
    });
}

/// Interpret an environment flag value
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Check if the label cache is globally enabled
///
/// Reads `HARF_CACHE` once; runtime calls to [`set_caching_enabled`]
/// take precedence afterwards.
pub fn is_caching_enabled() -> bool {
    check_env();
    CACHING_ENABLED.load(Ordering::SeqCst)
}

/// Enable or disable the label cache at runtime
pub fn set_caching_enabled(enabled: bool) {
    check_env();
    CACHING_ENABLED.store(enabled, Ordering::SeqCst);
    log::debug!(
        "harf label cache {} via runtime call",
        if enabled { "enabled" } else { "disabled" }
    );
}

//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and output directories are read separately from
//! `[package.metadata.leptos]` (overridable with `LEPTOS_*` variables).

/// Default log directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter directive, e.g. `wrapjoy=debug,tower_http=info`
    pub log_filter: Option<String>,

    /// Whether responses are compressed (brotli, gzip)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("RUST_LOG").ok(),
            compression: parse_flag(std::env::var("WRAPJOY_COMPRESSION").ok().as_deref(), true),
        }
    }

    /// Log filter directive, falling back to [`DEFAULT_LOG_FILTER`]
    pub fn log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Interpret an on/off environment value. Unrecognized values keep the default.
fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("1" | "true" | "on" | "yes") => true,
        Some("0" | "false" | "off" | "no") => false,
        _ => default,
    }
}

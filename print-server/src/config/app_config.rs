//! Runtime configuration loaded from environment variables.

use std::time::Duration;

use super::validation::validate_setting;

/// Runtime configuration for the print service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_port: u16,
    /// Printer resolution used when a request does not name one.
    pub default_dpi: u32,
    pub default_threshold: u8,
    /// Deadline for a single image conversion.
    pub convert_timeout_ms: u64,
    /// Upper bound on the decoded source image.
    pub max_image_bytes: usize,
    /// Upper bound on target width x height, in dots.
    pub max_label_dots: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            default_dpi: 203,
            default_threshold: label_bitmap::DEFAULT_THRESHOLD,
            convert_timeout_ms: 5000,
            max_image_bytes: 10 * 1024 * 1024,
            max_label_dots: 4096 * 4096,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load configuration from a key lookup. Missing or invalid values keep defaults.
    pub fn load(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let g = |key: &str| -> Option<String> {
            let value = get(key)?;
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            match validate_setting(key, value) {
                Ok(()) => Some(value.to_string()),
                Err(e) => {
                    tracing::warn!("Ignoring {key}={value}: {e}");
                    None
                }
            }
        };

        Self {
            server_port: parse_or(g("SERVER_PORT"), defaults.server_port),
            default_dpi: parse_or(g("DEFAULT_DPI"), defaults.default_dpi),
            default_threshold: parse_or(g("DEFAULT_THRESHOLD"), defaults.default_threshold),
            convert_timeout_ms: parse_or(g("CONVERT_TIMEOUT_MS"), defaults.convert_timeout_ms),
            max_image_bytes: parse_or(g("MAX_IMAGE_BYTES"), defaults.max_image_bytes),
            max_label_dots: parse_or(g("MAX_LABEL_DOTS"), defaults.max_label_dots),
        }
    }

    pub fn convert_timeout(&self) -> Duration {
        Duration::from_millis(self.convert_timeout_ms)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

//! HTTP front end for TSPL label printing.
//!
//! Accepts a print request carrying a Base64 image and label geometry,
//! converts the image to a 1-bit bitmap sized for the label and returns
//! the TSPL byte stream for the printer.

pub mod app;
pub mod config;
pub mod error;
pub mod request;
pub mod server;
pub mod services;

use config::{AppConfig, load_dotenv};

/// Load `.env` and build the runtime configuration.
pub fn init_foundation() -> AppConfig {
    load_dotenv();

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.server_port,
        default_dpi = config.default_dpi,
        default_threshold = config.default_threshold,
        convert_timeout_ms = config.convert_timeout_ms,
        max_image_bytes = config.max_image_bytes,
        max_label_dots = config.max_label_dots,
        "Configuration loaded"
    );
    config
}

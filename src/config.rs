//! Environment-driven host configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_POLL_MS: u64 = 100;
const DEFAULT_CAMERA_POLL_MS: u64 = 5000;
const DEFAULT_CONTAINER_WIDTH: f64 = 1280.0;
const DEFAULT_PAGE_WIDTH: f64 = 960.0;
const DEFAULT_PAGE_HEIGHT: f64 = 540.0;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server root for the detector endpoints.
    pub base_url: String,
    /// Full command-poll URL; derived from `base_url` unless overridden.
    pub command_url: String,
    /// Source document URL. Empty means no document was provided.
    pub pdf_url: String,
    /// CSRF token forwarded on detector control requests.
    pub csrf_token: Option<String>,
    pub poll_interval: Duration,
    pub camera_poll_interval: Duration,
    /// Width the document is fit to, in pixels.
    pub container_width: f64,
    /// Document geometry, supplied out-of-band by the presentation server.
    pub page_count: u32,
    pub page_width: f64,
    pub page_height: f64,
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env_or("HANDDECK_BASE_URL", DEFAULT_BASE_URL);
        let command_url = std::env::var("HANDDECK_COMMAND_URL")
            .unwrap_or_else(|_| format!("{base_url}/presentaciones/comando_gesto/"));
        Self {
            command_url,
            pdf_url: env_or("HANDDECK_PDF_URL", ""),
            csrf_token: std::env::var("HANDDECK_CSRF_TOKEN").ok(),
            poll_interval: Duration::from_millis(env_parse("HANDDECK_POLL_MS", DEFAULT_POLL_MS)),
            camera_poll_interval: Duration::from_millis(env_parse(
                "HANDDECK_CAMERA_POLL_MS",
                DEFAULT_CAMERA_POLL_MS,
            )),
            container_width: env_parse("HANDDECK_CONTAINER_WIDTH", DEFAULT_CONTAINER_WIDTH),
            page_count: env_parse("HANDDECK_PAGE_COUNT", 0),
            page_width: env_parse("HANDDECK_PAGE_WIDTH", DEFAULT_PAGE_WIDTH),
            page_height: env_parse("HANDDECK_PAGE_HEIGHT", DEFAULT_PAGE_HEIGHT),
            base_url,
        }
    }

    /// Detector stop endpoint.
    #[must_use]
    pub fn stop_url(&self) -> String {
        format!("{}/presentaciones/detector/detener/", self.base_url)
    }

    /// Detector start endpoint.
    #[must_use]
    pub fn start_url(&self) -> String {
        format!("{}/presentaciones/detector/iniciar/", self.base_url)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

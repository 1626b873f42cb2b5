//! HTTP client for the gesture detector endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Connectivity failures and non-2xx responses are distinct: the poll
//! loop swallows the former with capped logging and surfaces the latter
//! as a status line. Nothing here is ever fatal.

#[cfg(test)]
#[path = "detector_test.rs"]
mod detector_test;

use std::time::Duration;

use serde::Deserialize;

use crate::config::Config;

/// Pause between stopping and restarting the detector process.
const RESTART_PAUSE: Duration = Duration::from_millis(1000);

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}")]
    Status { status: u16 },
}

/// Poll payload: `{ "comando": "<token>" }`.
#[derive(Debug, Deserialize)]
struct CommandPayload {
    #[serde(default)]
    comando: Option<String>,
}

/// Response to a detector start request.
#[derive(Debug, Deserialize)]
pub struct StartResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Client for the command-poll and detector-control endpoints.
#[derive(Clone)]
pub struct DetectorClient {
    http: reqwest::Client,
    command_url: String,
    stop_url: String,
    start_url: String,
    csrf_token: Option<String>,
}

impl DetectorClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            command_url: config.command_url.clone(),
            stop_url: config.stop_url(),
            start_url: config.start_url(),
            csrf_token: config.csrf_token.clone(),
        }
    }

    /// Fetch the next pending command token. Empty or whitespace-only
    /// payloads mean "no new command" and come back as `None`.
    ///
    /// # Errors
    ///
    /// [`DetectorError::Status`] for non-2xx responses,
    /// [`DetectorError::Http`] for connectivity or decode failures.
    pub async fn fetch_command(&self) -> Result<Option<String>, DetectorError> {
        let resp = self
            .http
            .get(&self.command_url)
            .header("Cache-Control", "no-cache")
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DetectorError::Status { status: status.as_u16() });
        }
        let payload: CommandPayload = resp.json().await?;
        Ok(non_empty(payload.comando))
    }

    /// Stop the detector process.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`DetectorClient::fetch_command`].
    pub async fn stop(&self) -> Result<(), DetectorError> {
        let resp = self.with_csrf(self.http.post(&self.stop_url)).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DetectorError::Status { status: status.as_u16() })
        }
    }

    /// Start the detector process and report the server's verdict.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`DetectorClient::fetch_command`].
    pub async fn start(&self) -> Result<StartResponse, DetectorError> {
        let resp = self.with_csrf(self.http.post(&self.start_url)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DetectorError::Status { status: status.as_u16() });
        }
        Ok(resp.json().await?)
    }

    /// Stop, give the process a moment to exit, then start again.
    ///
    /// # Errors
    ///
    /// Propagates the first failing control request.
    pub async fn restart(&self) -> Result<StartResponse, DetectorError> {
        self.stop().await?;
        tokio::time::sleep(RESTART_PAUSE).await;
        self.start().await
    }

    fn with_csrf(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.csrf_token {
            Some(token) => req.header("X-CSRFToken", token),
            None => req,
        }
    }
}

fn non_empty(comando: Option<String>) -> Option<String> {
    comando.filter(|c| !c.trim().is_empty())
}

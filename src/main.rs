//! Binary entry point: wire the config, detector client, camera monitor,
//! and poll loop together, then run until interrupted.

use std::time::Duration;

use handdeck::camera::{self, DeviceProbe};
use handdeck::config::Config;
use handdeck::detector::DetectorClient;
use handdeck::display::LogDisplay;
use handdeck::notices::NoticeBoard;
use handdeck::poll;
use handdeck::present::Presenter;
use viewer::render::{PageSize, StaticDocument};

/// How long shutdown waits for the detector stop request.
const SHUTDOWN_STOP_TIMEOUT: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if config.pdf_url.is_empty() {
        tracing::error!("no document configured, set HANDDECK_PDF_URL");
        return;
    }

    let source = if config.page_count > 0 {
        StaticDocument::uniform(
            config.page_count,
            PageSize { width: config.page_width, height: config.page_height },
        )
    } else {
        StaticDocument::unavailable()
    };

    let mut presenter = Presenter::new(source, LogDisplay::new(), config.container_width);
    presenter.load();

    let (_camera_task, _camera_status) =
        camera::spawn_monitor(DeviceProbe::default(), config.camera_poll_interval);

    let mut notices = NoticeBoard::new();
    let client = DetectorClient::new(&config);
    match client.start().await {
        Ok(resp) if resp.success => {
            notices.success("gesture detector started");
        }
        Ok(resp) => {
            let message = resp
                .message
                .unwrap_or_else(|| "detector refused to start".to_owned());
            notices.warning(message);
            // A refused start usually means a stale detector process;
            // a stop-pause-start cycle clears it.
            match client.restart().await {
                Ok(resp) if resp.success => {
                    notices.success("gesture detector restarted");
                }
                Ok(resp) => {
                    let message = resp
                        .message
                        .unwrap_or_else(|| "detector failed to restart".to_owned());
                    notices.error(message);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "detector restart failed");
                    notices.error("could not restart the gesture detector");
                }
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "detector start request failed");
            notices.error("could not reach the gesture detector");
        }
    }

    tokio::select! {
        () = poll::run(&client, &mut presenter, config.poll_interval) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupt received, shutting down");
        }
    }

    match tokio::time::timeout(SHUTDOWN_STOP_TIMEOUT, client.stop()).await {
        Ok(Ok(())) => tracing::info!("detector stopped"),
        Ok(Err(err)) => tracing::warn!(error = %err, "detector stop failed"),
        Err(_) => tracing::warn!("detector stop timed out"),
    }
}

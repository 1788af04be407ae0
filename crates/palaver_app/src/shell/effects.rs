use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use palaver_core::{Effect, Msg, UploadOutcome};
use palaver_engine::{EngineEvent, EngineHandle, SocketEvent, UploadSettings};
use palaver_logging::{page_error, page_info, page_warn};

use super::{Input, Settings};

/// Maps core effects onto the engine and pumps engine events back as messages.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    settings: Settings,
}

impl EffectRunner {
    pub(crate) fn new(settings: Settings, input_tx: mpsc::Sender<Input>) -> Self {
        let engine = EngineHandle::new(UploadSettings::new(settings.upload_endpoint()));
        let runner = Self { engine, settings };
        runner.spawn_event_loop(input_tx);
        runner
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::OpenSocket { url } => {
                    page_info!("OpenSocket url={}", url);
                    self.engine.open_socket(url);
                }
                Effect::Transmit { text } => {
                    page_info!("Transmit len={}", text.len());
                    self.engine.transmit(text);
                }
                Effect::BeginUpload { file, use_ocr } => {
                    page_info!("BeginUpload file={:?} use_ocr={}", file, use_ocr);
                    self.engine.begin_upload(file, use_ocr);
                }
                Effect::OpenDownload { endpoint } => {
                    // Handed to the environment, never fetched here.
                    let url = self.settings.download_url(&endpoint);
                    page_info!("OpenDownload url={}", url);
                    println!("Open in your browser: {url}");
                }
            }
        }
    }

    fn spawn_event_loop(&self, input_tx: mpsc::Sender<Input>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::Socket(SocketEvent::Opened) => {
                        page_info!("WebSocket connected.");
                        Msg::SocketOpened
                    }
                    EngineEvent::Socket(SocketEvent::MessageReceived(payload)) => {
                        Msg::SocketMessage(payload)
                    }
                    EngineEvent::Socket(SocketEvent::Closed) => {
                        page_info!("WebSocket closed.");
                        Msg::SocketClosed
                    }
                    EngineEvent::Socket(SocketEvent::Errored { message }) => {
                        page_error!("WebSocket error: {}", message);
                        Msg::SocketErrored
                    }
                    EngineEvent::UploadCompleted { result } => {
                        Msg::UploadFinished(map_upload_result(result))
                    }
                };
                if input_tx.send(Input::Core(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_upload_result(
    result: Result<palaver_engine::UploadResponse, palaver_engine::UploadError>,
) -> UploadOutcome {
    match result {
        Ok(response) => match response.download_endpoint {
            Some(download_endpoint) => UploadOutcome::Accepted { download_endpoint },
            None => {
                page_warn!("Upload rejected: {:?}", response.error);
                UploadOutcome::Rejected {
                    message: response.error,
                }
            }
        },
        Err(err) => {
            // Diagnostic detail stays in the log; the page shows the
            // generic notice.
            page_error!("Upload failed: {}", err);
            UploadOutcome::TransportFailed
        }
    }
}

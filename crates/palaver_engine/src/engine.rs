use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use log::warn;
use tokio::sync::mpsc::UnboundedSender;

use crate::types::ChannelEventSink;
use crate::upload::{ReqwestUploader, UploadSettings, Uploader};
use crate::{chat, EngineEvent, SocketEvent};

enum EngineCommand {
    OpenSocket { url: String },
    Transmit { text: String },
    BeginUpload { file: PathBuf, use_ocr: bool },
}

/// Handle to the engine thread.
///
/// Cloneable so the shell can pump events from one thread while enqueueing
/// effects from another.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: UploadSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let uploader = Arc::new(ReqwestUploader::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // Outbound half of the one socket this page ever opens.
            let mut socket_tx: Option<UnboundedSender<String>> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::OpenSocket { url } => {
                        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
                        socket_tx = Some(tx);
                        let sink = ChannelEventSink::new(event_tx.clone());
                        runtime.spawn(chat::run_socket(url, rx, sink));
                    }
                    EngineCommand::Transmit { text } => {
                        let delivered = socket_tx
                            .as_ref()
                            .map(|tx| tx.send(text).is_ok())
                            .unwrap_or(false);
                        if !delivered {
                            // Sending without a live socket is the transport's
                            // failure to report.
                            warn!("Transmit with no live socket");
                            let _ = event_tx.send(EngineEvent::Socket(SocketEvent::Errored {
                                message: "chat socket is not available".to_string(),
                            }));
                        }
                    }
                    EngineCommand::BeginUpload { file, use_ocr } => {
                        let uploader = uploader.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = uploader.upload(&file, use_ocr).await;
                            let _ = event_tx.send(EngineEvent::UploadCompleted { result });
                        });
                    }
                }
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn open_socket(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::OpenSocket { url: url.into() });
    }

    pub fn transmit(&self, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Transmit { text: text.into() });
    }

    pub fn begin_upload(&self, file: PathBuf, use_ocr: bool) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::BeginUpload { file, use_ocr });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

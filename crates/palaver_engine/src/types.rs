use crate::upload::{UploadError, UploadResponse};

/// Lifecycle and traffic events for the one chat socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketEvent {
    Opened,
    /// One complete text frame; the payload is an opaque string.
    MessageReceived(String),
    Closed,
    Errored { message: String },
}

#[derive(Debug)]
pub enum EngineEvent {
    Socket(SocketEvent),
    UploadCompleted {
        result: Result<UploadResponse, UploadError>,
    },
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Sink that forwards events to the shell over a channel.
pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

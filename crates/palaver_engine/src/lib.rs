//! Palaver engine: effect execution for the page controller.
//!
//! Owns the chat socket and the upload request so the shell never blocks on
//! network I/O. Commands come in over a channel, events go back the same way.
mod chat;
mod engine;
mod types;
mod upload;

pub use engine::EngineHandle;
pub use types::{ChannelEventSink, EngineEvent, EventSink, SocketEvent};
pub use upload::{ReqwestUploader, UploadError, UploadResponse, UploadSettings, Uploader};

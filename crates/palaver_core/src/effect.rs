use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the one chat socket for this page.
    OpenSocket { url: String },
    /// Send one text frame over the chat socket.
    Transmit { text: String },
    /// POST the multipart upload form.
    BeginUpload { file: PathBuf, use_ocr: bool },
    /// Hand the download endpoint to the environment; never fetched here.
    OpenDownload { endpoint: String },
}

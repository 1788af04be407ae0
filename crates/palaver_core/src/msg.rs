use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the message input box.
    DraftChanged(String),
    /// User submitted the chat form.
    DraftSubmitted,
    /// The socket handshake completed.
    SocketOpened,
    /// One complete text payload arrived from the server.
    SocketMessage(String),
    /// The socket closed, server- or network-initiated.
    SocketClosed,
    /// The socket failed.
    SocketErrored,
    /// User submitted the upload form.
    UploadSubmitted {
        file: Option<PathBuf>,
        use_ocr: bool,
    },
    /// The upload request finished, one way or another.
    UploadFinished(UploadOutcome),
    /// User activated the download link in the result area.
    DownloadRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Shell-side summary of an upload response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Response JSON carried a download endpoint.
    Accepted { download_endpoint: String },
    /// Response JSON reported an error (or nothing usable).
    Rejected { message: Option<String> },
    /// The request itself failed; detail belongs in the log, not the page.
    TransportFailed,
}

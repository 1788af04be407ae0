use crate::state::{
    ConnectionState, Speaker, UploadNotice, AVATAR_BOT, AVATAR_CONNECTION_ERROR,
    AVATAR_SESSION_ENDED, AVATAR_USER, CONNECTION_ERROR_TEXT, SESSION_ENDED_TEXT,
};
use crate::{Effect, Msg, PageState, UploadOutcome};

/// Builds the initial page state and asks for the one socket of its lifetime.
///
/// Input starts enabled: there is no gating before the first send.
pub fn init(chat_url: String) -> (PageState, Vec<Effect>) {
    (PageState::new(), vec![Effect::OpenSocket { url: chat_url }])
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::DraftChanged(text) => {
            state.set_draft(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DraftSubmitted => {
            let text = state.draft().trim().to_owned();
            if text.is_empty() {
                // Empty sends are silently ignored, not an error.
                return (state, Vec::new());
            }
            if !state.input_enabled() {
                // Covers both an in-flight round-trip and a terminal socket.
                return (state, Vec::new());
            }
            state.append_entry(text.clone(), Speaker::User, AVATAR_USER);
            state.clear_draft();
            state.show_loader();
            state.disable_input();
            state.mark_dirty();
            vec![Effect::Transmit { text }]
        }
        Msg::SocketOpened => {
            // No user-visible change on a successful handshake.
            state.set_connection(ConnectionState::Open);
            Vec::new()
        }
        Msg::SocketMessage(payload) => {
            state.hide_loader();
            state.append_entry(payload, Speaker::Bot, AVATAR_BOT);
            state.enable_input();
            state.mark_dirty();
            Vec::new()
        }
        Msg::SocketClosed => {
            state.set_connection(ConnectionState::Closed);
            state.hide_loader();
            state.append_entry(
                SESSION_ENDED_TEXT.to_string(),
                Speaker::Bot,
                AVATAR_SESSION_ENDED,
            );
            state.disable_input();
            state.mark_dirty();
            Vec::new()
        }
        Msg::SocketErrored => {
            state.set_connection(ConnectionState::Errored);
            state.hide_loader();
            state.append_entry(
                CONNECTION_ERROR_TEXT.to_string(),
                Speaker::Bot,
                AVATAR_CONNECTION_ERROR,
            );
            state.disable_input();
            state.mark_dirty();
            Vec::new()
        }
        Msg::UploadSubmitted { file, use_ocr } => {
            let Some(file) = file else {
                state.set_upload_notice(UploadNotice::MissingFile);
                state.mark_dirty();
                return (state, Vec::new());
            };
            if state.uploading() {
                // The upload control is disabled while one request is in
                // flight; a second submit in that window is dropped.
                return (state, Vec::new());
            }
            state.set_uploading(true);
            state.set_upload_notice(UploadNotice::Uploading);
            state.mark_dirty();
            vec![Effect::BeginUpload { file, use_ocr }]
        }
        Msg::UploadFinished(outcome) => {
            // The upload control comes back on every path.
            state.set_uploading(false);
            let notice = match outcome {
                UploadOutcome::Accepted { download_endpoint } => {
                    UploadNotice::Completed { download_endpoint }
                }
                UploadOutcome::Rejected { message } => UploadNotice::Rejected {
                    message: message.unwrap_or_else(|| "Unknown error".to_string()),
                },
                UploadOutcome::TransportFailed => UploadNotice::Failed,
            };
            state.set_upload_notice(notice);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DownloadRequested => match state.upload_notice() {
            Some(UploadNotice::Completed { download_endpoint }) => {
                vec![Effect::OpenDownload {
                    endpoint: download_endpoint.clone(),
                }]
            }
            _ => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

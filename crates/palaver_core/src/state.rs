use crate::view_model::{AvatarSide, PageView, TranscriptRowView, UploadNoticeView};

pub const AVATAR_USER: &str = "😀";
pub const AVATAR_BOT: &str = "🤖";
pub const AVATAR_SESSION_ENDED: &str = "⚠️";
pub const AVATAR_CONNECTION_ERROR: &str = "❌";

pub const SESSION_ENDED_TEXT: &str = "Chat session ended. Please refresh to restart.";
pub const CONNECTION_ERROR_TEXT: &str = "An error occurred with the chat connection.";
pub const MISSING_FILE_TEXT: &str = "Please choose a PDF file.";
pub const UPLOADING_TEXT: &str = "Uploading and extracting...";
pub const UPLOAD_FAILED_TEXT: &str = "Upload failed. Check console for details.";

pub const PLACEHOLDER_READY: &str = "Ask me anything...";
pub const PLACEHOLDER_WAITING: &str = "Please wait...";

/// Builds the chat socket endpoint for a host and session identifier.
///
/// The session id is carried as a query parameter so it survives whatever
/// characters the caller puts in it.
pub fn chat_endpoint(host: &str, session_id: &str) -> Result<String, url::ParseError> {
    let mut endpoint = url::Url::parse(&format!("ws://{host}/ws"))?;
    endpoint
        .query_pairs_mut()
        .append_pair("session_id", session_id);
    Ok(endpoint.into())
}

/// Lifecycle of the one chat socket owned by the page.
///
/// `Closed` and `Errored` are terminal: the page never reconnects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Open,
    Closed,
    Errored,
}

impl ConnectionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ConnectionState::Closed | ConnectionState::Errored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// One rendered chat line: who said it, the text, and the avatar glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub text: String,
    pub speaker: Speaker,
    pub avatar: &'static str,
}

/// Content of the upload result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadNotice {
    MissingFile,
    Uploading,
    Completed { download_endpoint: String },
    Rejected { message: String },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    connection: ConnectionState,
    transcript: Vec<TranscriptEntry>,
    draft: String,
    input_disabled: bool,
    awaiting_reply: bool,
    uploading: bool,
    upload_notice: Option<UploadNotice>,
    dirty: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PageView {
        let transcript = self
            .transcript
            .iter()
            .map(|entry| TranscriptRowView {
                text: entry.text.clone(),
                avatar: entry.avatar,
                // User rows mirror bot rows: content first, avatar trailing.
                avatar_side: match entry.speaker {
                    Speaker::User => AvatarSide::Trailing,
                    Speaker::Bot => AvatarSide::Leading,
                },
            })
            .collect();

        PageView {
            connection: self.connection,
            transcript,
            draft: self.draft.clone(),
            input_enabled: !self.input_disabled,
            placeholder: if self.input_disabled {
                PLACEHOLDER_WAITING
            } else {
                PLACEHOLDER_READY
            },
            loader_visible: self.awaiting_reply,
            upload_enabled: !self.uploading,
            upload_notice: self.upload_notice.as_ref().map(render_notice),
            dirty: self.dirty,
        }
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_connection(&mut self, connection: ConnectionState) {
        self.connection = connection;
    }

    pub(crate) fn draft(&self) -> &str {
        &self.draft
    }

    pub(crate) fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub(crate) fn input_enabled(&self) -> bool {
        !self.input_disabled
    }

    pub(crate) fn disable_input(&mut self) {
        self.input_disabled = true;
    }

    pub(crate) fn enable_input(&mut self) {
        self.input_disabled = false;
    }

    pub(crate) fn show_loader(&mut self) {
        self.awaiting_reply = true;
    }

    pub(crate) fn hide_loader(&mut self) {
        self.awaiting_reply = false;
    }

    pub(crate) fn uploading(&self) -> bool {
        self.uploading
    }

    pub(crate) fn set_uploading(&mut self, uploading: bool) {
        self.uploading = uploading;
    }

    pub(crate) fn set_upload_notice(&mut self, notice: UploadNotice) {
        self.upload_notice = Some(notice);
    }

    pub(crate) fn upload_notice(&self) -> Option<&UploadNotice> {
        self.upload_notice.as_ref()
    }

    pub(crate) fn append_entry(&mut self, text: String, speaker: Speaker, avatar: &'static str) {
        self.transcript.push(TranscriptEntry {
            text,
            speaker,
            avatar,
        });
    }
}

fn render_notice(notice: &UploadNotice) -> UploadNoticeView {
    match notice {
        UploadNotice::MissingFile => UploadNoticeView {
            text: MISSING_FILE_TEXT.to_string(),
            download: None,
        },
        UploadNotice::Uploading => UploadNoticeView {
            text: UPLOADING_TEXT.to_string(),
            download: None,
        },
        UploadNotice::Completed { download_endpoint } => UploadNoticeView {
            text: "✅ Extraction complete.".to_string(),
            download: Some(download_endpoint.clone()),
        },
        UploadNotice::Rejected { message } => UploadNoticeView {
            text: format!("Error: {message}"),
            download: None,
        },
        UploadNotice::Failed => UploadNoticeView {
            text: UPLOAD_FAILED_TEXT.to_string(),
            download: None,
        },
    }
}

//! Palaver core: pure page-controller state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, UploadOutcome};
pub use state::{
    chat_endpoint, ConnectionState, PageState, Speaker, TranscriptEntry, UploadNotice,
    AVATAR_BOT, AVATAR_CONNECTION_ERROR, AVATAR_SESSION_ENDED, AVATAR_USER,
    CONNECTION_ERROR_TEXT, MISSING_FILE_TEXT, PLACEHOLDER_READY, PLACEHOLDER_WAITING,
    SESSION_ENDED_TEXT, UPLOADING_TEXT, UPLOAD_FAILED_TEXT,
};
pub use update::{init, update};
pub use view_model::{AvatarSide, PageView, TranscriptRowView, UploadNoticeView};

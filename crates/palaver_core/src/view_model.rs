use crate::ConnectionState;

/// Which side of the row the avatar sits on.
///
/// Bot rows lead with the avatar; user rows mirror that layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSide {
    Leading,
    Trailing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRowView {
    pub text: String,
    pub avatar: &'static str,
    pub avatar_side: AvatarSide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadNoticeView {
    pub text: String,
    pub download: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub connection: ConnectionState,
    pub transcript: Vec<TranscriptRowView>,
    pub draft: String,
    pub input_enabled: bool,
    pub placeholder: &'static str,
    pub loader_visible: bool,
    pub upload_enabled: bool,
    pub upload_notice: Option<UploadNoticeView>,
    pub dirty: bool,
}

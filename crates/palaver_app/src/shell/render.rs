use std::io::Write;

use palaver_core::{AvatarSide, PageView, UploadNoticeView};

/// Right margin for user rows, mirroring the page's right-aligned bubbles.
const USER_COLUMN: usize = 72;

/// Incremental terminal renderer for the page view.
///
/// Tracks what has been printed so a render only emits what changed: new
/// transcript rows, the pending indicator, upload notices, and input gating.
pub(crate) struct Renderer {
    rows_printed: usize,
    loader_shown: bool,
    last_notice: Option<UploadNoticeView>,
    last_placeholder: &'static str,
}

impl Renderer {
    pub(crate) fn new() -> Self {
        Self {
            rows_printed: 0,
            loader_shown: false,
            last_notice: None,
            last_placeholder: "",
        }
    }

    pub(crate) fn render(&mut self, view: &PageView, out: &mut impl Write) -> std::io::Result<()> {
        for row in &view.transcript[self.rows_printed..] {
            match row.avatar_side {
                AvatarSide::Leading => writeln!(out, "{} {}", row.avatar, row.text)?,
                AvatarSide::Trailing => {
                    let line = format!("{} {}", row.text, row.avatar);
                    writeln!(out, "{line:>width$}", width = USER_COLUMN)?;
                }
            }
        }
        self.rows_printed = view.transcript.len();

        if view.loader_visible && !self.loader_shown {
            writeln!(out, "⏳ ...")?;
        }
        self.loader_shown = view.loader_visible;

        if view.upload_notice != self.last_notice {
            if let Some(notice) = &view.upload_notice {
                match &notice.download {
                    Some(endpoint) => {
                        writeln!(out, "[upload] {} Download CSV: {endpoint} (/open)", notice.text)?
                    }
                    None => writeln!(out, "[upload] {}", notice.text)?,
                }
            }
            self.last_notice = view.upload_notice.clone();
        }

        if view.placeholder != self.last_placeholder {
            if view.connection.is_terminal() {
                writeln!(out, "[input disabled]")?;
            } else {
                writeln!(out, "[{}]", view.placeholder)?;
            }
            self.last_placeholder = view.placeholder;
        }

        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palaver_core::{init, update, Msg, PLACEHOLDER_READY, PLACEHOLDER_WAITING};

    fn render_to_string(renderer: &mut Renderer, view: &PageView) -> String {
        let mut out = Vec::new();
        renderer.render(view, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rows_are_printed_once() {
        let (state, _) = init("ws://example/ws".to_string());
        let (state, _) = update(state, Msg::DraftChanged("hi".to_string()));
        let (state, _) = update(state, Msg::DraftSubmitted);

        let mut renderer = Renderer::new();
        let first = render_to_string(&mut renderer, &state.view());
        assert!(first.contains("hi 😀"));

        let second = render_to_string(&mut renderer, &state.view());
        assert!(!second.contains("hi 😀"));
    }

    #[test]
    fn bot_rows_lead_with_the_avatar() {
        let (state, _) = init("ws://example/ws".to_string());
        let (state, _) = update(state, Msg::SocketMessage("hello!".to_string()));

        let mut renderer = Renderer::new();
        let output = render_to_string(&mut renderer, &state.view());
        assert!(output.contains("🤖 hello!"));
    }

    #[test]
    fn placeholder_follows_input_gating() {
        let (state, _) = init("ws://example/ws".to_string());
        let mut renderer = Renderer::new();
        let output = render_to_string(&mut renderer, &state.view());
        assert!(output.contains(PLACEHOLDER_READY));

        let (state, _) = update(state, Msg::DraftChanged("q".to_string()));
        let (state, _) = update(state, Msg::DraftSubmitted);
        let output = render_to_string(&mut renderer, &state.view());
        assert!(output.contains(PLACEHOLDER_WAITING));
    }
}

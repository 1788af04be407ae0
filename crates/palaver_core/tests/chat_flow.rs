use std::sync::Once;

use palaver_core::{
    chat_endpoint, init, update, AvatarSide, ConnectionState, Effect, Msg, PageState,
    AVATAR_BOT, AVATAR_CONNECTION_ERROR, AVATAR_SESSION_ENDED, AVATAR_USER,
    CONNECTION_ERROR_TEXT, PLACEHOLDER_READY, PLACEHOLDER_WAITING, SESSION_ENDED_TEXT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(palaver_logging::initialize_for_tests);
}

fn submit_draft(state: PageState, input: &str) -> (PageState, Vec<Effect>) {
    let (state, _) = update(state, Msg::DraftChanged(input.to_string()));
    update(state, Msg::DraftSubmitted)
}

#[test]
fn chat_endpoint_carries_session_id() {
    init_logging();
    let url = chat_endpoint("127.0.0.1:8000", "web-user-123").unwrap();
    assert_eq!(url, "ws://127.0.0.1:8000/ws?session_id=web-user-123");
}

#[test]
fn init_opens_the_socket_with_input_enabled() {
    init_logging();
    let (state, effects) = init("ws://127.0.0.1:8000/ws?session_id=web-user-123".to_string());
    let view = state.view();

    assert_eq!(view.connection, ConnectionState::Connecting);
    assert!(view.input_enabled);
    assert!(!view.loader_visible);
    assert_eq!(
        effects,
        vec![Effect::OpenSocket {
            url: "ws://127.0.0.1:8000/ws?session_id=web-user-123".to_string(),
        }]
    );
}

#[test]
fn empty_and_whitespace_drafts_are_silently_ignored() {
    init_logging();
    for input in ["", "   ", "\t", " \n "] {
        let state = PageState::new();
        let (next, effects) = submit_draft(state, input);
        let view = next.view();

        assert!(view.transcript.is_empty(), "input {input:?} appended a row");
        assert!(effects.is_empty(), "input {input:?} produced effects");
        assert!(view.input_enabled);
    }
}

#[test]
fn send_appends_user_row_clears_draft_and_gates_input() {
    init_logging();
    let state = PageState::new();
    let (mut state, effects) = submit_draft(state, "  hello there  ");
    let view = state.view();

    assert_eq!(view.transcript.len(), 1);
    let row = &view.transcript[0];
    assert_eq!(row.text, "hello there");
    assert_eq!(row.avatar, AVATAR_USER);
    assert_eq!(row.avatar_side, AvatarSide::Trailing);

    assert_eq!(view.draft, "");
    assert!(!view.input_enabled);
    assert_eq!(view.placeholder, PLACEHOLDER_WAITING);
    assert!(view.loader_visible);
    assert_eq!(
        effects,
        vec![Effect::Transmit {
            text: "hello there".to_string(),
        }]
    );
    assert!(state.consume_dirty());
}

#[test]
fn send_is_allowed_before_the_handshake_completes() {
    // No readiness check beyond the input gate; a send while still
    // connecting is handed to the transport as-is.
    init_logging();
    let (state, _) = init("ws://example/ws".to_string());
    let (_state, effects) = submit_draft(state, "early bird");

    assert_eq!(
        effects,
        vec![Effect::Transmit {
            text: "early bird".to_string(),
        }]
    );
}

#[test]
fn bot_message_appends_row_and_reenables_input() {
    init_logging();
    let state = PageState::new();
    let (state, _) = submit_draft(state, "question");
    let (state, _) = update(state, Msg::SocketOpened);

    let (state, effects) = update(state, Msg::SocketMessage("answer".to_string()));
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.transcript.len(), 2);
    let row = &view.transcript[1];
    assert_eq!(row.text, "answer");
    assert_eq!(row.avatar, AVATAR_BOT);
    assert_eq!(row.avatar_side, AvatarSide::Leading);

    assert!(view.input_enabled);
    assert_eq!(view.placeholder, PLACEHOLDER_READY);
    assert!(!view.loader_visible);
}

#[test]
fn empty_payload_still_counts_as_a_reply() {
    init_logging();
    let state = PageState::new();
    let (state, _) = submit_draft(state, "question");

    let (state, _) = update(state, Msg::SocketMessage(String::new()));
    let view = state.view();

    assert_eq!(view.transcript.len(), 2);
    assert_eq!(view.transcript[1].text, "");
    assert!(view.input_enabled);
}

#[test]
fn close_appends_warning_and_disables_input_permanently() {
    init_logging();
    let state = PageState::new();
    let (state, _) = submit_draft(state, "question");

    let (state, effects) = update(state, Msg::SocketClosed);
    assert!(effects.is_empty());

    let view = state.view();
    assert_eq!(view.connection, ConnectionState::Closed);
    assert!(!view.loader_visible);
    assert!(!view.input_enabled);
    let row = view.transcript.last().unwrap();
    assert_eq!(row.text, SESSION_ENDED_TEXT);
    assert_eq!(row.avatar, AVATAR_SESSION_ENDED);
    assert_eq!(row.avatar_side, AvatarSide::Leading);
}

#[test]
fn error_appends_error_row_and_disables_input() {
    init_logging();
    let state = PageState::new();
    let (state, effects) = update(state, Msg::SocketErrored);
    assert!(effects.is_empty());

    let view = state.view();
    assert_eq!(view.connection, ConnectionState::Errored);
    assert!(!view.input_enabled);
    let row = view.transcript.last().unwrap();
    assert_eq!(row.text, CONNECTION_ERROR_TEXT);
    assert_eq!(row.avatar, AVATAR_CONNECTION_ERROR);
}

#[test]
fn send_after_close_transmits_nothing() {
    init_logging();
    let state = PageState::new();
    let (state, _) = update(state, Msg::SocketClosed);
    let rows_before = state.view().transcript.len();

    let (state, effects) = submit_draft(state, "anyone there?");

    assert!(effects.is_empty());
    assert_eq!(state.view().transcript.len(), rows_before);
}

#[test]
fn send_after_error_transmits_nothing() {
    init_logging();
    let state = PageState::new();
    let (state, _) = update(state, Msg::SocketErrored);

    let (_state, effects) = submit_draft(state, "hello?");
    assert!(effects.is_empty());
}

use palaver_core::{update, Msg, PageState};

#[test]
fn update_is_noop() {
    let state = PageState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

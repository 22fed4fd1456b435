use super::*;

fn record(text: &str) -> StreamRecord {
    StreamRecord { text: Some(text.to_owned()), follow_up: None }
}

fn state_with_draft(draft: &str) -> ChatState {
    let mut state = ChatState::default();
    state.draft = draft.to_owned();
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.turns.is_empty());
    assert_eq!(state.status, ChatStatus::Idle);
    assert!(state.draft.is_empty());
    assert!(!state.awaiting_follow_up);
}

// =============================================================
// Sending
// =============================================================

#[test]
fn begin_send_appends_user_turn_and_clears_draft() {
    let mut state = state_with_draft("pasta tonight");
    let (message, history) = state.begin_send().expect("send");

    assert_eq!(message, "pasta tonight");
    assert!(history.is_empty());
    assert!(state.draft.is_empty());
    assert_eq!(state.status, ChatStatus::Sending);
    assert_eq!(state.turns.len(), 1);
    assert_eq!(state.turns[0].role, Role::User);
    assert_eq!(state.turns[0].text, "pasta tonight");
}

#[test]
fn begin_send_refuses_blank_draft() {
    let mut state = state_with_draft("   ");
    assert!(state.begin_send().is_none());
    assert!(state.turns.is_empty());
}

#[test]
fn begin_send_refuses_while_in_flight() {
    let mut state = state_with_draft("first");
    state.begin_send().expect("send");

    state.draft = "second".to_owned();
    assert!(state.begin_send().is_none());
    assert_eq!(state.turns.len(), 1);
}

#[test]
fn history_excludes_the_turn_just_added() {
    let mut state = state_with_draft("first");
    state.begin_send().expect("send");
    state.begin_stream();
    state.apply_record(&record("answer"));
    state.finish_stream();

    state.draft = "second".to_owned();
    let (_, history) = state.begin_send().expect("send");

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, "user");
    assert_eq!(history[0].parts[0].text, "first");
    assert_eq!(history[1].role, "model");
    assert_eq!(history[1].parts[0].text, "answer");
}

// =============================================================
// Streaming
// =============================================================

#[test]
fn streamed_text_accumulates_into_placeholder() {
    let mut state = state_with_draft("hi");
    state.begin_send().expect("send");
    state.begin_stream();
    assert_eq!(state.status, ChatStatus::Streaming);

    state.apply_record(&record("## Pad "));
    assert_eq!(state.turns.last().expect("placeholder").text, "## Pad ");

    state.apply_record(&record("Thai"));
    assert_eq!(state.turns.last().expect("placeholder").text, "## Pad Thai");

    state.finish_stream();
    let last = state.turns.last().expect("final turn");
    assert_eq!(last.text, "## Pad Thai");
    assert!(!last.streaming);
    assert_eq!(state.status, ChatStatus::Idle);
}

#[test]
fn displayed_text_is_always_full_accumulation_not_delta() {
    let mut state = state_with_draft("hi");
    state.begin_send().expect("send");
    state.begin_stream();
    for part in ["a", "b", "c"] {
        state.apply_record(&record(part));
    }
    assert_eq!(state.turns.last().expect("placeholder").text, "abc");
}

#[test]
fn records_without_text_still_refresh_placeholder() {
    let mut state = state_with_draft("hi");
    state.begin_send().expect("send");
    state.begin_stream();
    state.apply_record(&record("half"));
    state.apply_record(&StreamRecord::default());
    assert_eq!(state.turns.last().expect("placeholder").text, "half");
}

#[test]
fn zero_records_finalize_as_empty_text_turn() {
    let mut state = state_with_draft("hi");
    state.begin_send().expect("send");
    state.begin_stream();
    state.finish_stream();

    let last = state.turns.last().expect("final turn");
    assert_eq!(last.role, Role::Model);
    assert_eq!(last.text, "");
    assert!(!last.streaming);
    assert_eq!(state.status, ChatStatus::Idle);
}

// =============================================================
// Follow-up flag
// =============================================================

#[test]
fn follow_up_record_marks_turn_and_sets_awaiting() {
    let mut state = state_with_draft("hi");
    state.begin_send().expect("send");
    state.begin_stream();
    state.apply_record(&StreamRecord {
        text: Some("Which nuts do you mean?".to_owned()),
        follow_up: Some(true),
    });
    state.finish_stream();

    assert!(state.turns.last().expect("turn").follow_up);
    assert!(state.awaiting_follow_up);
}

#[test]
fn completed_stream_without_follow_up_clears_awaiting() {
    let mut state = state_with_draft("tree nuts only");
    state.awaiting_follow_up = true;
    state.begin_send().expect("send");
    state.begin_stream();
    state.apply_record(&record("Here is a safe recipe."));
    state.finish_stream();

    assert!(!state.awaiting_follow_up);
    assert!(!state.turns.last().expect("turn").follow_up);
}

// =============================================================
// Failure path
// =============================================================

#[test]
fn failure_before_streaming_appends_error_turn() {
    let mut state = state_with_draft("hi");
    state.begin_send().expect("send");
    state.fail_stream();

    assert_eq!(state.turns.len(), 2);
    let last = state.turns.last().expect("error turn");
    assert_eq!(last.role, Role::Model);
    assert_eq!(last.text, CONNECTION_ERROR_TEXT);
    assert_eq!(state.status, ChatStatus::Idle);
}

#[test]
fn failure_mid_stream_replaces_placeholder_with_error_turn() {
    let mut state = state_with_draft("hi");
    state.begin_send().expect("send");
    state.begin_stream();
    state.apply_record(&record("partial"));
    state.fail_stream();

    assert_eq!(state.turns.len(), 2);
    let last = state.turns.last().expect("error turn");
    assert_eq!(last.text, CONNECTION_ERROR_TEXT);
    assert!(!last.streaming);
    assert!(!state.awaiting_follow_up);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn clear_drops_conversation_and_flags() {
    let mut state = state_with_draft("hi");
    state.begin_send().expect("send");
    state.begin_stream();
    state.apply_record(&StreamRecord { text: Some("x".to_owned()), follow_up: Some(true) });
    state.clear();

    assert!(state.turns.is_empty());
    assert_eq!(state.status, ChatStatus::Idle);
    assert!(state.draft.is_empty());
    assert!(!state.awaiting_follow_up);
}

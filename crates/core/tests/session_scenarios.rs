use parley_core::{Author, ChatSession, ComposeState, Key, ScrollRequest, SessionConfig, SubmitOutcome, ViewEffect};

fn texts_and_authors(session: &ChatSession) -> Vec<(String, Author)> {
    session.transcript().iter().map(|m| (m.text().to_string(), m.author())).collect()
}

#[test]
fn test_submit_on_fresh_session_is_noop() {
    let mut session = ChatSession::default();

    assert_eq!(session.try_submit(), SubmitOutcome::Rejected);
    assert!(session.transcript().is_empty());
    assert_eq!(session.pending_author(), Author::Local);
}

#[test]
fn test_enter_commits_and_flips_author() {
    let mut session = ChatSession::default();
    session.text_changed("Hello");
    session.key_pressed(Key::Enter, false);

    assert_eq!(texts_and_authors(&session), vec![("Hello".to_string(), Author::Local)]);
    assert_eq!(session.draft(), "");
    assert_eq!(session.pending_author(), Author::Remote);
}

#[test]
fn test_second_message_alternates_back() {
    let mut session = ChatSession::default();
    session.text_changed("Hello");
    session.key_pressed(Key::Enter, false);
    session.text_changed("Hi there");
    session.key_pressed(Key::Enter, false);

    assert_eq!(
        texts_and_authors(&session),
        vec![("Hello".to_string(), Author::Local), ("Hi there".to_string(), Author::Remote)]
    );
    assert_eq!(session.pending_author(), Author::Local);
}

#[test]
fn test_whitespace_only_is_rejected() {
    let mut session = ChatSession::default();
    session.text_changed("  ");

    assert_eq!(session.key_pressed(Key::Enter, false), SubmitOutcome::Rejected);
    assert!(session.transcript().is_empty());
    assert_eq!(session.pending_author(), Author::Local);
    assert_eq!(session.draft(), "  ");
    assert_eq!(session.compose_state(), ComposeState::Composing);
}

#[test]
fn test_shift_enter_keeps_composing_multiline() {
    let mut session = ChatSession::default();
    session.text_changed("line1");
    assert_eq!(session.key_pressed(Key::Enter, true), SubmitOutcome::Ignored);
    session.text_changed("line1\nline2");
    session.key_pressed(Key::Enter, false);

    assert_eq!(session.transcript().len(), 1);
    assert_eq!(session.transcript()[0].text(), "line1\nline2");
    assert_eq!(session.transcript()[0].line_count(), 2);
}

#[test]
fn test_history_is_stable_across_commits() {
    let mut session = ChatSession::default();
    let mut snapshots = Vec::new();

    for i in 0..6 {
        session.text_changed(format!("  message {}  ", i));
        session.send_button_clicked();
        snapshots.push(session.transcript().to_vec());
    }

    for (len, snapshot) in snapshots.iter().enumerate() {
        assert_eq!(snapshot.len(), len + 1);
        assert_eq!(&session.transcript()[..=len], snapshot.as_slice());
    }

    let authors: Vec<Author> = session.transcript().iter().map(|m| m.author()).collect();
    assert_eq!(authors, [Author::Local, Author::Remote].repeat(3));
}

#[test]
fn test_scroll_fires_once_per_append_and_never_otherwise() {
    let mut session = ChatSession::default();

    session.text_changed("a");
    session.text_changed("");
    session.key_pressed(Key::Char('x'), false);
    session.try_submit();
    assert_eq!(session.sync_scroll(), None);

    session.text_changed("first");
    session.key_pressed(Key::Enter, false);
    assert_eq!(session.sync_scroll(), Some(ScrollRequest::to_latest()));
    assert_eq!(session.sync_scroll(), None);

    session.text_changed("second");
    session.send_button_clicked();
    session.text_changed("third");
    session.send_button_clicked();
    assert_eq!(session.sync_scroll(), Some(ScrollRequest::to_latest()));
    assert_eq!(session.scroll_requests_issued(), 3);
}

#[test]
fn test_every_commit_requests_focus() {
    let mut session = ChatSession::default();
    session.text_changed("one");
    session.key_pressed(Key::Enter, false);
    session.text_changed("two");
    session.send_button_clicked();

    assert_eq!(session.take_effects(), vec![ViewEffect::FocusComposer, ViewEffect::FocusComposer]);
}

#[test]
fn test_configured_initial_author() {
    let config = SessionConfig { initial_author: Author::Remote, ..SessionConfig::default() };
    let mut session = ChatSession::new(config);
    session.text_changed("from the other side");
    session.key_pressed(Key::Enter, false);

    assert_eq!(session.transcript()[0].author(), Author::Remote);
    assert_eq!(session.pending_author(), Author::Local);
}

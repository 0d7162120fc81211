//! End-to-end board scenarios driven purely through dispatched UI events.

use postboard_core::{
    Board, BoardConfig, ClickTarget, Field, Markup, Outcome, Submission, UiEvent, Verdict,
    render_text,
};

fn submit_post<C: postboard_core::Clock>(board: &mut Board<C>, title: &str, body: &str) -> Outcome {
    board.dispatch(UiEvent::input(Field::Title, title));
    board.dispatch(UiEvent::input(Field::Body, body));
    board.dispatch(UiEvent::click(ClickTarget::NewPost))
}

/// `H:MM D.MM.YYYY` with unpadded hour/day and two-digit minute/month.
fn is_post_timestamp(value: &str) -> bool {
    let Some((time, date)) = value.split_once(' ') else {
        return false;
    };
    let Some((hour, minute)) = time.split_once(':') else {
        return false;
    };
    let parts: Vec<&str> = date.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return false;
    };
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    let unpadded = |s: &str, max: u32| {
        digits(s) && (s == "0" || !s.starts_with('0')) && s.parse::<u32>().is_ok_and(|v| v <= max)
    };
    let padded = |s: &str, max: u32| {
        s.len() == 2 && digits(s) && s.parse::<u32>().is_ok_and(|v| v <= max)
    };

    unpadded(hour, 23)
        && padded(minute, 59)
        && unpadded(*day, 31)
        && *day != "0"
        && padded(*month, 12)
        && year.len() == 4
        && digits(*year)
}

#[test]
fn scenario_single_post_is_rendered() {
    let mut board = Board::mount(&Markup::standard(), BoardConfig::default()).expect("mount");
    let outcome = submit_post(&mut board, "Hello", "World");
    assert!(matches!(outcome, Outcome::Submitted(Submission::Created(_))));

    let posts = board.document().posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Hello");
    assert_eq!(posts[0].body, "World");
    assert!(
        is_post_timestamp(&posts[0].created_at),
        "bad timestamp: {}",
        posts[0].created_at
    );

    let text = render_text(board.document(), 40);
    assert!(text.contains("    Hello\n"));
    assert!(text.contains("    World\n"));
}

#[test]
fn scenario_delete_first_of_two() {
    let mut board = Board::mount(&Markup::standard(), BoardConfig::default()).expect("mount");
    submit_post(&mut board, "first", "one");
    submit_post(&mut board, "second", "two");

    let first = board.document().post_at(0).expect("position 0").id;
    board.dispatch(UiEvent::click(ClickTarget::Actions(first)));
    assert_eq!(
        board.dispatch(UiEvent::click(ClickTarget::Delete(first))),
        Outcome::Deleted(first)
    );

    let titles: Vec<_> = board
        .document()
        .posts()
        .iter()
        .map(|view| view.title.as_str())
        .collect();
    assert_eq!(titles, ["second"]);
    assert_eq!(board.store().len(), 1);
}

#[test]
fn scenario_whitespace_fields_abort() {
    let mut board = Board::mount(&Markup::standard(), BoardConfig::default()).expect("mount");
    let generation = board.document().generation();

    let outcome = submit_post(&mut board, "   ", "\t ");
    assert_eq!(outcome, Outcome::Aborted);
    assert!(board.store().is_empty());
    assert!(board.document().posts().is_empty());
    assert_eq!(board.document().generation(), generation);
}

#[test]
fn validation_message_tracks_typing() {
    let mut board = Board::mount(&Markup::standard(), BoardConfig::default()).expect("mount");

    board.dispatch(UiEvent::input(Field::Body, "body"));
    assert_eq!(
        board.document().message(),
        Some("Заголовок и текст не могут быть пустыми")
    );

    let outcome = board.dispatch(UiEvent::input(Field::Title, "t".repeat(101)));
    assert_eq!(outcome, Outcome::Validated(Verdict::TitleTooLong { limit: 100 }));
    assert_eq!(
        board.document().message(),
        Some("Длина заголовка не должна превышать 100 символов")
    );
    assert!(!board.document().submit_enabled());

    board.dispatch(UiEvent::input(Field::Title, "t".repeat(100)));
    assert_eq!(board.document().message(), None);
    assert!(board.document().submit_enabled());

    board.dispatch(UiEvent::input(Field::Body, "b".repeat(201)));
    assert_eq!(
        board.document().message(),
        Some("Длина текста не должна превышать 200 символов")
    );
    assert!(!board.document().submit_enabled());
}

#[test]
fn edit_round_trip_keeps_position_and_timestamp() {
    let mut board = Board::mount(&Markup::standard(), BoardConfig::default()).expect("mount");
    submit_post(&mut board, "a", "1");
    submit_post(&mut board, "b", "2");
    submit_post(&mut board, "c", "3");

    let b = board.document().post_at(1).expect("position 1").id;
    let created_at = board.document().post_at(1).expect("position 1").created_at.clone();
    board.dispatch(UiEvent::click(ClickTarget::Actions(b)));
    assert_eq!(
        board.dispatch(UiEvent::click(ClickTarget::Edit(b))),
        Outcome::EditStarted(b)
    );
    assert_eq!(board.document().editing(), Some(b));

    let outcome = submit_post(&mut board, "B", "two");
    assert_eq!(outcome, Outcome::Submitted(Submission::Updated(b)));

    let view = board.document().post_at(1).expect("position 1");
    assert_eq!(view.id, b);
    assert_eq!(view.title, "B");
    assert_eq!(view.body, "two");
    assert_eq!(view.created_at, created_at);
    assert_eq!(board.store().len(), 3);
}

#[test]
fn configured_limits_apply() {
    let config = BoardConfig::default().with_title_limit(3).with_body_limit(5);
    let mut board = Board::mount(&Markup::standard(), config).expect("mount");

    board.dispatch(UiEvent::input(Field::Title, "abcd"));
    let outcome = board.dispatch(UiEvent::input(Field::Body, "x"));
    assert_eq!(outcome, Outcome::Validated(Verdict::TitleTooLong { limit: 3 }));
    assert_eq!(
        board.document().message(),
        Some("Длина заголовка не должна превышать 3 символов")
    );
}

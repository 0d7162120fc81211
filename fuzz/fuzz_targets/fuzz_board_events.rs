#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use postboard_core::{Board, BoardConfig, ClickTarget, Field, Markup, PostId, UiEvent};

#[derive(Arbitrary, Debug)]
enum FuzzEvent {
    Title(String),
    Body(String),
    Submit,
    Actions(u8),
    Delete(u8),
    Edit(u8),
    Focus(bool),
    Outside,
    Cancel,
}

fn id_at(board: &Board, position: u8) -> Option<PostId> {
    board
        .document()
        .post_at(usize::from(position))
        .map(|view| view.id)
}

fuzz_target!(|input: Vec<FuzzEvent>| {
    let config = BoardConfig::default().with_title_limit(8).with_body_limit(16);
    let Ok(mut board) = Board::mount(&Markup::standard(), config) else {
        return;
    };

    for event in input.into_iter().take(512) {
        let event = match event {
            FuzzEvent::Title(value) => UiEvent::input(Field::Title, value),
            FuzzEvent::Body(value) => UiEvent::input(Field::Body, value),
            FuzzEvent::Submit => UiEvent::click(ClickTarget::NewPost),
            FuzzEvent::Actions(position) => match id_at(&board, position) {
                Some(id) => UiEvent::click(ClickTarget::Actions(id)),
                None => continue,
            },
            FuzzEvent::Delete(position) => match id_at(&board, position) {
                Some(id) => UiEvent::click(ClickTarget::Delete(id)),
                None => continue,
            },
            FuzzEvent::Edit(position) => match id_at(&board, position) {
                Some(id) => UiEvent::click(ClickTarget::Edit(id)),
                None => continue,
            },
            FuzzEvent::Focus(title) => {
                let field = if title { Field::Title } else { Field::Body };
                UiEvent::click(ClickTarget::Input(field))
            }
            FuzzEvent::Outside => UiEvent::click(ClickTarget::Outside),
            FuzzEvent::Cancel => {
                board.cancel_edit();
                continue;
            }
        };
        let _ = board.dispatch(event);

        let views = board.document().posts();
        assert_eq!(views.len(), board.store().len());
        for (view, post) in views.iter().zip(board.store()) {
            assert_eq!(view.id, post.id());
            assert!(!post.title().is_empty() && !post.body().is_empty());
            assert!(post.title().chars().count() <= board.config().title_limit);
            assert!(post.body().chars().count() <= board.config().body_limit);
        }
    }
});

use tackboard_core::{
    CommitOutcome, CommitPolicy, DragController, EmojiPicker, InlineEditor, Position,
};

#[test]
fn drag_keeps_the_grab_offset_for_the_whole_drag() {
    let mut drag = DragController::new();
    assert!(!drag.is_dragging());

    let started = drag.pointer_down(Position::new(60.0, 110.0), Position::new(50.0, 100.0), false);
    assert!(started);
    assert!(drag.is_dragging());

    assert_eq!(
        drag.pointer_move(Position::new(200.0, 300.0)),
        Some(Position::new(190.0, 290.0))
    );
    assert_eq!(
        drag.pointer_move(Position::new(-10.0, 5.0)),
        Some(Position::new(-20.0, -5.0))
    );
}

#[test]
fn pointer_down_is_suppressed_while_text_editing() {
    let mut drag = DragController::new();
    let started = drag.pointer_down(Position::new(60.0, 110.0), Position::new(50.0, 100.0), true);
    assert!(!started);
    assert!(!drag.is_dragging());
    assert_eq!(drag.pointer_move(Position::new(200.0, 300.0)), None);
}

#[test]
fn pointer_move_outside_a_drag_yields_nothing() {
    let drag = DragController::new();
    assert_eq!(drag.pointer_move(Position::new(10.0, 10.0)), None);
}

#[test]
fn pointer_up_always_returns_to_idle() {
    let mut drag = DragController::new();
    assert!(!drag.pointer_up());

    drag.pointer_down(Position::new(0.0, 0.0), Position::new(0.0, 0.0), false);
    assert!(drag.pointer_up());
    assert!(!drag.is_dragging());
    assert_eq!(drag.pointer_move(Position::new(10.0, 10.0)), None);
}

#[test]
fn reject_empty_editor_keeps_edit_mode_open_on_blank_commit() {
    let mut editor = InlineEditor::new(CommitPolicy::RejectEmpty, "To Do");

    editor.open();
    editor.set_draft("   ");
    assert_eq!(editor.commit(), CommitOutcome::Rejected);

    assert!(editor.is_active());
    assert_eq!(editor.draft(), "   ");
    assert_eq!(editor.value(), "To Do");
}

#[test]
fn reject_empty_editor_commits_exact_nonblank_draft() {
    let mut editor = InlineEditor::new(CommitPolicy::RejectEmpty, "To Do");

    editor.open();
    editor.set_draft("Done");
    assert_eq!(editor.commit(), CommitOutcome::Committed("Done".to_string()));

    assert!(!editor.is_active());
    assert_eq!(editor.value(), "Done");
}

#[test]
fn discard_empty_editor_closes_silently_on_blank_commit() {
    let mut editor = InlineEditor::new(CommitPolicy::DiscardEmpty, "New task");

    editor.open();
    editor.set_draft("");
    assert_eq!(editor.commit(), CommitOutcome::Discarded);

    assert!(!editor.is_active());
    assert_eq!(editor.value(), "New task");
    assert_eq!(editor.draft(), "New task");
}

#[test]
fn committed_values_keep_surrounding_whitespace() {
    let mut editor = InlineEditor::new(CommitPolicy::DiscardEmpty, "New task");

    editor.open();
    editor.set_draft("  buy milk  ");
    assert_eq!(
        editor.commit(),
        CommitOutcome::Committed("  buy milk  ".to_string())
    );
    assert_eq!(editor.value(), "  buy milk  ");
}

#[test]
fn cancel_restores_the_value_seen_at_open_time() {
    let mut editor = InlineEditor::new(CommitPolicy::RejectEmpty, "To Do");

    editor.open();
    editor.set_draft("half-typed");
    editor.cancel();

    assert!(!editor.is_active());
    assert_eq!(editor.value(), "To Do");
    assert_eq!(editor.draft(), "To Do");
}

#[test]
fn emoji_picker_commits_on_selection_and_closes() {
    let mut picker = EmojiPicker::new();
    assert!(!picker.is_open());

    picker.toggle();
    assert!(picker.is_open());

    assert_eq!(picker.select("🚀"), "🚀");
    assert!(!picker.is_open());

    picker.toggle();
    // Selecting the empty string clears the emoji.
    assert_eq!(picker.select(""), "");
    assert!(!picker.is_open());

    picker.toggle();
    picker.close();
    assert!(!picker.is_open());
}

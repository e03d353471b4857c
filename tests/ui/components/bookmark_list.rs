use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use taskdeck::store::{Bookmark, Intent, TaskLists, TaskStore};
use taskdeck::ui::components::BookmarkListComponent;
use taskdeck::ui::core::{actions::Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers,
    }
}

fn store_with(uris: &[&str]) -> TaskStore {
    TaskStore::single(
        "Inbox",
        TaskLists {
            bookmarks: uris.iter().map(|uri| Bookmark::new(*uri)).collect(),
            todos: Vec::new(),
        },
    )
}

/// Panel showing `store`, laid out at the top left of a 40x10 screen
fn panel_for(store: &TaskStore) -> BookmarkListComponent {
    let mut panel = BookmarkListComponent::default();
    panel.set_area(Rect::new(0, 0, 40, 10));
    panel.update_data(store.bookmarks().to_vec());
    panel
}

/// Apply a dispatched intent and refresh the panel, like the app does
fn apply(store: &mut TaskStore, panel: &mut BookmarkListComponent, action: Action) {
    match action {
        Action::Dispatch(intent) => {
            store.dispatch(intent).unwrap();
        }
        other => panic!("expected a dispatch, got {other:?}"),
    }
    panel.update_data(store.bookmarks().to_vec());
}

#[test]
fn test_backspace_on_empty_removes_and_focuses_previous() {
    let mut store = store_with(&["https://a.dev", ""]);
    let mut panel = panel_for(&store);
    let empty = store.bookmarks()[1].id;

    panel.focus_row(1);
    let action = panel.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(action, Action::Dispatch(Intent::RemoveBookmark(empty)));

    apply(&mut store, &mut panel, action);
    assert_eq!(store.bookmarks().len(), 1);
    assert_eq!(panel.focused_index(), Some(0));
    assert_eq!(panel.field_cursor(), "https://a.dev".len());
}

#[test]
fn test_backspace_on_first_row_leaves_nothing_focused() {
    let mut store = store_with(&[""]);
    let mut panel = panel_for(&store);

    panel.focus_row(0);
    let action = panel.handle_key_events(key(KeyCode::Backspace));
    apply(&mut store, &mut panel, action);
    assert!(store.bookmarks().is_empty());
    assert_eq!(panel.focused_index(), None);
}

#[test]
fn test_backspace_on_filled_field_edits_text() {
    let store = store_with(&["ab"]);
    let mut panel = panel_for(&store);
    let id = store.bookmarks()[0].id;

    panel.focus_row(0);
    assert_eq!(
        panel.handle_key_events(key(KeyCode::Backspace)),
        Action::Dispatch(Intent::UpdateBookmark {
            id,
            uri: "a".to_string()
        })
    );
}

#[test]
fn test_unchanged_edit_is_still_dispatched() {
    let store = store_with(&["ab"]);
    let mut panel = panel_for(&store);
    let id = store.bookmarks()[0].id;

    panel.focus_row(0);
    panel.handle_key_events(key(KeyCode::Home));
    assert_eq!(
        panel.handle_key_events(key(KeyCode::Backspace)),
        Action::Dispatch(Intent::UpdateBookmark {
            id,
            uri: "ab".to_string()
        })
    );
}

#[test]
fn test_enter_inserts_one_entry_after_current() {
    let mut store = store_with(&["https://a.dev", "https://z.dev"]);
    let mut panel = panel_for(&store);
    let first = store.bookmarks()[0].id;

    panel.focus_row(0);
    let action = panel.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::Dispatch(Intent::NewBookmark { after: Some(first) }));

    apply(&mut store, &mut panel, action);
    assert_eq!(store.bookmarks().len(), 3);
    assert_eq!(store.bookmarks()[1].uri, "");
    // The new entry asks for focus
    assert_eq!(panel.focused_index(), Some(1));

    // The row that lost focus clears its own auto-focus flag
    assert_eq!(
        panel.take_outbox(),
        vec![Action::Dispatch(Intent::ClearBookmarkAutoFocus(first))]
    );
}

#[test]
fn test_command_up_on_first_row_dispatches_move() {
    let store = store_with(&["a", "b"]);
    let mut panel = panel_for(&store);
    let id = store.bookmarks()[0].id;

    panel.focus_row(0);
    let action = panel.handle_key_events(KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL));
    assert_eq!(action, Action::Dispatch(Intent::MoveBookmark { id, by: -1 }));
}

#[test]
fn test_plain_arrows_move_focus_only() {
    let store = store_with(&["a", "b"]);
    let mut panel = panel_for(&store);

    panel.focus_row(0);
    let action = panel.handle_key_events(key(KeyCode::Down));
    assert_eq!(
        action,
        Action::Dispatch(Intent::ClearBookmarkAutoFocus(store.bookmarks()[0].id))
    );
    assert_eq!(panel.focused_index(), Some(1));

    // Nothing above the first row
    panel.focus_row(0);
    assert_eq!(panel.handle_key_events(key(KeyCode::Up)), Action::None);
    assert_eq!(panel.focused_index(), Some(0));
}

#[test]
fn test_escape_blurs_and_clears_auto_focus() {
    let store = store_with(&["a"]);
    let mut panel = panel_for(&store);
    let id = store.bookmarks()[0].id;

    panel.focus_row(0);
    assert!(panel.is_editing());
    assert_eq!(
        panel.handle_key_events(key(KeyCode::Esc)),
        Action::Dispatch(Intent::ClearBookmarkAutoFocus(id))
    );
    assert!(!panel.is_editing());
}

#[test]
fn test_multiline_paste_is_one_intent() {
    let store = store_with(&["https://a.dev"]);
    let mut panel = panel_for(&store);
    let id = store.bookmarks()[0].id;

    panel.focus_row(0);
    let action = panel.handle_paste("a\nb\nc".to_string());
    assert_eq!(
        action,
        Action::Dispatch(Intent::PasteBookmarks {
            id,
            clipboard: "a\nb\nc".to_string()
        })
    );
}

#[test]
fn test_single_line_paste_inserts_at_cursor() {
    let store = store_with(&["https://a.dev"]);
    let mut panel = panel_for(&store);
    let id = store.bookmarks()[0].id;

    panel.focus_row(0);
    let action = panel.handle_paste("single".to_string());
    assert_eq!(
        action,
        Action::Dispatch(Intent::UpdateBookmark {
            id,
            uri: "https://a.devsingle".to_string()
        })
    );
}

#[test]
fn test_paste_without_focus_is_ignored() {
    let store = store_with(&["a"]);
    let mut panel = panel_for(&store);
    assert_eq!(panel.handle_paste("x\ny".to_string()), Action::None);
}

#[test]
fn test_drag_from_handle_reorders() {
    let store = store_with(&["a", "b", "c"]);
    let mut panel = panel_for(&store);
    let id = store.bookmarks()[0].id;

    // Rows start at (1, 1) inside the border; the handle is the first two columns
    let down = panel.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1, KeyModifiers::NONE));
    assert_eq!(down, Action::None);
    assert!(!panel.is_editing());

    let up = panel.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), 12, 3, KeyModifiers::NONE));
    assert_eq!(up, Action::Dispatch(Intent::MoveBookmark { id, by: 2 }));

    // A release without a drag does nothing
    let again = panel.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), 12, 2, KeyModifiers::NONE));
    assert_eq!(again, Action::None);
}

#[test]
fn test_command_click_opens_linkable_rows() {
    let store = store_with(&["https://a.dev", "plain text"]);
    let mut panel = panel_for(&store);

    let click = panel.handle_mouse_events(mouse(
        MouseEventKind::Down(MouseButton::Left),
        15,
        1,
        KeyModifiers::CONTROL,
    ));
    assert_eq!(click, Action::OpenUri("https://a.dev".to_string()));
    assert!(!panel.is_editing());

    // Non-linkable rows take the click as a focus click
    let click = panel.handle_mouse_events(mouse(
        MouseEventKind::Down(MouseButton::Left),
        8,
        2,
        KeyModifiers::CONTROL,
    ));
    assert_eq!(click, Action::None);
    assert_eq!(panel.focused_index(), Some(1));
    assert_eq!(panel.field_cursor(), 2);
}

#[test]
fn test_click_on_link_glyph_opens() {
    let store = store_with(&["https://a.dev"]);
    let mut panel = panel_for(&store);

    let click = panel.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 4, 1, KeyModifiers::NONE));
    assert_eq!(click, Action::OpenUri("https://a.dev".to_string()));
}

#[test]
fn test_navigation_mode_keys() {
    let store = store_with(&["https://a.dev", "b"]);
    let mut panel = panel_for(&store);

    assert_eq!(panel.handle_key_events(key(KeyCode::Char('o'))), Action::OpenUri("https://a.dev".to_string()));
    panel.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(panel.cursor(), 1);
    assert_eq!(panel.handle_key_events(key(KeyCode::Char('o'))), Action::None);
    assert_eq!(
        panel.handle_key_events(key(KeyCode::Char('n'))),
        Action::Dispatch(Intent::NewBookmark { after: None })
    );

    panel.handle_key_events(key(KeyCode::Enter));
    assert_eq!(panel.focused_index(), Some(1));
}

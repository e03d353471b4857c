use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use taskdeck::store::{Intent, TaskLists, TaskStore, Todo};
use taskdeck::ui::components::todo_list_component::should_dispatch_todo_text;
use taskdeck::ui::components::TodoListComponent;
use taskdeck::ui::core::{actions::Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers,
    }
}

fn store_with(todos: &[(&str, u32)]) -> TaskStore {
    TaskStore::single(
        "Inbox",
        TaskLists {
            bookmarks: Vec::new(),
            todos: todos.iter().map(|(text, ident)| Todo::new(*text, *ident)).collect(),
        },
    )
}

/// Panel in a 40x10 area: rows on lines 1 to 7, footer on line 8
fn panel_for(store: &TaskStore) -> TodoListComponent {
    let mut panel = TodoListComponent::default();
    panel.set_area(Rect::new(0, 0, 40, 10));
    panel.update_data(store.todos().to_vec());
    panel
}

fn apply(store: &mut TaskStore, panel: &mut TodoListComponent, action: Action) {
    match action {
        Action::Dispatch(intent) => {
            store.dispatch(intent).unwrap();
        }
        other => panic!("expected a dispatch, got {other:?}"),
    }
    panel.update_data(store.todos().to_vec());
}

#[test]
fn test_command_bracket_indents_one_level_per_press() {
    let mut store = store_with(&[("write", 0)]);
    let mut panel = panel_for(&store);
    panel.focus_row(0);

    for expected in 1..=3 {
        let action = panel.handle_key_events(KeyEvent::new(KeyCode::Char(']'), KeyModifiers::CONTROL));
        apply(&mut store, &mut panel, action);
        assert_eq!(store.todos()[0].ident, expected);
    }

    let action = panel.handle_key_events(KeyEvent::new(KeyCode::Char('['), KeyModifiers::CONTROL));
    apply(&mut store, &mut panel, action);
    assert_eq!(store.todos()[0].ident, 2);
    // Still editing the same row
    assert_eq!(panel.focused_index(), Some(0));
}

#[test]
fn test_checkbox_click_toggles_once() {
    let store = store_with(&[("a", 0)]);
    let mut panel = panel_for(&store);
    let id = store.todos()[0].id;

    // Handle at columns 1-2, checkbox at 3-6
    let action = panel.handle_mouse_events(click(4, 1, KeyModifiers::NONE));
    assert_eq!(action, Action::Dispatch(Intent::ToggleTodo(id)));
    assert_eq!(panel.focused_index(), None);

    // With the modifier held it is still one toggle
    let action = panel.handle_mouse_events(click(4, 1, KeyModifiers::CONTROL));
    assert_eq!(action, Action::Dispatch(Intent::ToggleTodo(id)));
}

#[test]
fn test_command_click_outside_field_toggles() {
    let store = store_with(&[("nested", 2)]);
    let mut panel = panel_for(&store);
    let id = store.todos()[0].id;

    // Indentation padding is four columns at ident 2
    assert_eq!(
        panel.handle_mouse_events(click(2, 1, KeyModifiers::CONTROL)),
        Action::Dispatch(Intent::ToggleTodo(id))
    );
    assert_eq!(
        panel.handle_mouse_events(click(5, 1, KeyModifiers::CONTROL)),
        Action::Dispatch(Intent::ToggleTodo(id))
    );

    // Inside the text it is a focus click
    assert_eq!(panel.handle_mouse_events(click(13, 1, KeyModifiers::CONTROL)), Action::None);
    assert_eq!(panel.focused_index(), Some(0));
    assert_eq!(panel.field_cursor(), 2);
}

#[test]
fn test_footer_appends_and_focuses() {
    let mut store = store_with(&[("a", 1)]);
    let mut panel = panel_for(&store);

    let action = panel.handle_mouse_events(click(5, 8, KeyModifiers::NONE));
    assert_eq!(action, Action::Dispatch(Intent::NewTodo { after: None }));

    apply(&mut store, &mut panel, action);
    assert_eq!(store.todos().len(), 2);
    assert_eq!(store.todos()[1].ident, 0);
    assert_eq!(panel.focused_index(), Some(1));
}

#[test]
fn test_enter_inserts_after_and_focuses_next() {
    let mut store = store_with(&[("a", 1), ("z", 0)]);
    let mut panel = panel_for(&store);
    let id = store.todos()[0].id;

    panel.focus_row(0);
    let action = panel.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::Dispatch(Intent::NewTodo { after: Some(id) }));

    apply(&mut store, &mut panel, action);
    assert_eq!(store.todos().len(), 3);
    assert_eq!(store.todos()[1].text, "");
    assert_eq!(store.todos()[1].ident, 1);
    assert_eq!(panel.focused_index(), Some(1));
}

#[test]
fn test_backspace_with_command_removes_filled_todo() {
    let mut store = store_with(&[("a", 0), ("b", 0)]);
    let mut panel = panel_for(&store);
    let id = store.todos()[1].id;

    panel.focus_row(1);
    let action = panel.handle_key_events(KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL));
    assert_eq!(action, Action::Dispatch(Intent::RemoveTodo(id)));

    apply(&mut store, &mut panel, action);
    assert_eq!(store.todos().len(), 1);
    assert_eq!(panel.focused_index(), Some(0));
}

#[test]
fn test_unchanged_text_is_suppressed() {
    let store = store_with(&[("ab", 0)]);
    let mut panel = panel_for(&store);
    let id = store.todos()[0].id;

    panel.focus_row(0);
    panel.handle_key_events(key(KeyCode::End));
    // Delete at the end leaves the value alone
    assert_eq!(panel.handle_key_events(key(KeyCode::Delete)), Action::None);
    assert_eq!(
        panel.handle_key_events(key(KeyCode::Char('c'))),
        Action::Dispatch(Intent::UpdateTodoText {
            id,
            text: "abc".to_string()
        })
    );

    assert!(should_dispatch_todo_text("a", ""));
    assert!(should_dispatch_todo_text("a", "b"));
    assert!(!should_dispatch_todo_text("a", "a"));
}

#[test]
fn test_paste_is_never_gated() {
    let store = store_with(&[("a", 0)]);
    let mut panel = panel_for(&store);
    let id = store.todos()[0].id;

    panel.focus_row(0);
    assert_eq!(
        panel.handle_paste("single".to_string()),
        Action::Dispatch(Intent::PasteTodos {
            id,
            clipboard: "single".to_string()
        })
    );
}

#[test]
fn test_toggle_shortcut_and_navigation() {
    let store = store_with(&[("a", 0), ("b", 0)]);
    let mut panel = panel_for(&store);
    let second = store.todos()[1].id;

    panel.handle_key_events(key(KeyCode::Down));
    assert_eq!(
        panel.handle_key_events(key(KeyCode::Char('x'))),
        Action::Dispatch(Intent::ToggleTodo(second))
    );

    panel.focus_row(1);
    assert_eq!(
        panel.handle_key_events(KeyEvent::new(
            KeyCode::Char('C'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )),
        Action::Dispatch(Intent::ToggleTodo(second))
    );

    panel.handle_key_events(key(KeyCode::Esc));
    assert_eq!(panel.focused_index(), None);
}

#[test]
fn test_drag_from_handle_reorders() {
    let store = store_with(&[("a", 0), ("b", 0), ("c", 0)]);
    let mut panel = panel_for(&store);
    let last = store.todos()[2].id;

    assert_eq!(panel.handle_mouse_events(click(2, 3, KeyModifiers::NONE)), Action::None);
    let release = MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column: 20,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(
        panel.handle_mouse_events(release),
        Action::Dispatch(Intent::MoveTodo { id: last, by: -2 })
    );
}

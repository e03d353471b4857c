use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck::config::CommandModifier;
use taskdeck::ui::keymap::{FieldCommand, Keymap};

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn test_backspace_asymmetry() {
    let keymap = Keymap::default();
    let backspace = key(KeyCode::Backspace, KeyModifiers::NONE);
    let cmd_backspace = key(KeyCode::Backspace, KeyModifiers::CONTROL);

    assert_eq!(
        keymap.bookmark_command(&backspace, true),
        Some(FieldCommand::RemoveAndFocusPrevious)
    );
    assert_eq!(keymap.bookmark_command(&backspace, false), None);
    // Bookmarks ignore the modifier; todos delete with it
    assert_eq!(keymap.bookmark_command(&cmd_backspace, false), None);
    assert_eq!(
        keymap.todo_command(&cmd_backspace, false),
        Some(FieldCommand::RemoveAndFocusPrevious)
    );
}

#[test]
fn test_shared_navigation() {
    let keymap = Keymap::default();
    for field_empty in [true, false] {
        assert_eq!(
            keymap.bookmark_command(&key(KeyCode::Enter, KeyModifiers::NONE), field_empty),
            Some(FieldCommand::InsertAfter)
        );
        assert_eq!(
            keymap.todo_command(&key(KeyCode::Esc, KeyModifiers::NONE), field_empty),
            Some(FieldCommand::Blur)
        );
    }
    assert_eq!(
        keymap.bookmark_command(&key(KeyCode::Up, KeyModifiers::NONE), false),
        Some(FieldCommand::FocusPrevious)
    );
    assert_eq!(
        keymap.bookmark_command(&key(KeyCode::Up, KeyModifiers::CONTROL), false),
        Some(FieldCommand::MoveUp)
    );
    assert_eq!(
        keymap.todo_command(&key(KeyCode::Down, KeyModifiers::CONTROL), false),
        Some(FieldCommand::MoveDown)
    );
}

#[test]
fn test_todo_only_commands() {
    let keymap = Keymap::default();
    let indent = key(KeyCode::Char(']'), KeyModifiers::CONTROL);
    let outdent = key(KeyCode::Char('['), KeyModifiers::CONTROL);
    let toggle = key(KeyCode::Char('C'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);

    assert_eq!(keymap.todo_command(&indent, false), Some(FieldCommand::Indent));
    assert_eq!(keymap.todo_command(&outdent, false), Some(FieldCommand::Outdent));
    assert_eq!(
        keymap.todo_command(&key(KeyCode::BackTab, KeyModifiers::SHIFT), false),
        Some(FieldCommand::Outdent)
    );
    assert_eq!(keymap.todo_command(&toggle, false), Some(FieldCommand::ToggleCompletion));

    assert_eq!(keymap.bookmark_command(&indent, false), None);
    assert_eq!(keymap.bookmark_command(&toggle, false), None);
    // Plain brackets are text
    assert_eq!(keymap.todo_command(&key(KeyCode::Char(']'), KeyModifiers::NONE), false), None);
}

#[test]
fn test_command_modifier_is_configurable() {
    let keymap = Keymap::new(CommandModifier::Alt);
    assert!(keymap.is_command(KeyModifiers::ALT));
    assert!(!keymap.is_command(KeyModifiers::CONTROL));
    assert_eq!(
        keymap.todo_command(&key(KeyCode::Char(']'), KeyModifiers::ALT), false),
        Some(FieldCommand::Indent)
    );
    assert_eq!(keymap.todo_command(&key(KeyCode::Char(']'), KeyModifiers::CONTROL), false), None);
}

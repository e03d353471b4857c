use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use taskdeck::ui::core::event_handler::EventType;

#[test]
fn test_key_press_is_forwarded() {
    let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert_eq!(EventType::from(Event::Key(key)), EventType::Key(key));
}

#[test]
fn test_key_release_is_dropped() {
    let key = KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(EventType::from(Event::Key(key)), EventType::Other);
}

#[test]
fn test_paste_and_resize() {
    assert_eq!(
        EventType::from(Event::Paste("a\nb".to_string())),
        EventType::Paste("a\nb".to_string())
    );
    assert_eq!(EventType::from(Event::Resize(80, 24)), EventType::Resize(80, 24));
    assert_eq!(EventType::from(Event::FocusGained), EventType::Other);
}

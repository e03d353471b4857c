use taskdeck::ui::focus::FocusRegistry;

#[test]
fn test_negative_index_is_a_safe_noop() {
    let mut focus = FocusRegistry::new(2);
    assert!(!focus.focus(-1));
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_shrinking_drops_focus_past_the_end() {
    let mut focus = FocusRegistry::new(3);
    assert!(focus.focus(2));
    focus.set_len(2);
    assert_eq!(focus.focused(), None);

    assert!(focus.focus(1));
    focus.set_len(5);
    assert_eq!(focus.focused(), Some(1));
}

#[test]
fn test_request_is_taken_once() {
    let mut focus = FocusRegistry::new(1);
    focus.request(3);
    assert_eq!(focus.take_request(), Some(3));
    assert_eq!(focus.take_request(), None);
    assert_eq!(focus.blur(), None);
}

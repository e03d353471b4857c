use taskdeck::ui::links::{is_linkable, ordinal_label};

#[test]
fn test_url_classification() {
    assert!(is_linkable("https://example.com"));
    assert!(is_linkable("http://a.b"));
    assert!(is_linkable("https://localhost"));
    assert!(is_linkable("see https://docs.rs/ratatui"));
    assert!(!is_linkable("https://nodot"));
    assert!(!is_linkable("example.com"));
    assert!(!is_linkable(""));
}

#[test]
fn test_ordinal_labels() {
    assert_eq!(ordinal_label(0, 3), "1");
    assert_eq!(ordinal_label(8, 12), "9");
    assert_eq!(ordinal_label(9, 12), "");
    assert_eq!(ordinal_label(9, 10), "0");
    assert_eq!(ordinal_label(11, 12), "0");
}

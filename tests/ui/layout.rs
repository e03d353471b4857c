use ratatui::layout::Rect;
use taskdeck::ui::LayoutManager;

#[test]
fn test_sidebar_never_takes_more_than_half() {
    let areas = LayoutManager::workspace(Rect::new(0, 0, 40, 20), 50, 0);
    assert_eq!(areas.sidebar.width, 20);
    assert_eq!(areas.bookmarks.x, 20);
}

#[test]
fn test_bookmarks_fit_a_short_pane() {
    assert_eq!(LayoutManager::bookmarks_height(2, 4), 2);
}

#[test]
fn test_centered_rect_stays_inside() {
    let screen = Rect::new(0, 0, 100, 40);
    let popup = LayoutManager::centered_rect(70, 75, screen);
    assert!(popup.x > 0 && popup.right() < screen.right());
    assert!(popup.y > 0 && popup.bottom() < screen.bottom());
    assert_eq!(LayoutManager::overlay_dimensions(60, 20), (90, 90));
}

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use taskdeck::config::UiConfig;
use taskdeck::constants::{STATUS_LAST_TASK, STATUS_OPEN_FAILED, STATUS_SAVE_FAILED};
use taskdeck::logger::Logger;
use taskdeck::storage::{LocalStorage, Persistence};
use taskdeck::store::{Bookmark, Collection, Dirty, TaskLists, TaskStore, Todo};
use taskdeck::ui::app_component::{AppComponent, AppState};
use taskdeck::ui::core::actions::FocusArea;
use taskdeck::ui::core::event_handler::EventType;
use taskdeck::ui::opener::UriOpener;

/// Remembers every URI instead of launching a browser
#[derive(Clone, Default)]
struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl UriOpener for RecordingOpener {
    fn open(&self, uri: &str) -> Result<()> {
        self.opened.lock().unwrap().push(uri.to_string());
        Ok(())
    }
}

struct BrokenOpener;

impl UriOpener for BrokenOpener {
    fn open(&self, _uri: &str) -> Result<()> {
        Err(anyhow!("no handler"))
    }
}

/// Storage whose writes always fail
struct ReadOnlyStorage;

#[async_trait]
impl Persistence for ReadOnlyStorage {
    async fn load_store(&self) -> Result<TaskStore> {
        Ok(TaskStore::single("Inbox", TaskLists::default()))
    }

    async fn flush(&self, _store: &TaskStore, _dirty: &Dirty) -> Result<()> {
        Err(anyhow!("disk full"))
    }
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

async fn memory_app(store: TaskStore, opener: Box<dyn UriOpener>) -> AppComponent {
    let storage = LocalStorage::open("sqlite::memory:").await.unwrap();
    AppComponent::new(UiConfig::default(), store, Box::new(storage), opener, Logger::new())
}

fn bookmark_store(uris: &[&str]) -> TaskStore {
    TaskStore::single(
        "Inbox",
        TaskLists {
            bookmarks: uris.iter().map(|uri| Bookmark::new(*uri)).collect(),
            todos: Vec::new(),
        },
    )
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.focus_area, FocusArea::Bookmarks);
    assert!(!state.show_help);
    assert!(state.error_message.is_none(), "Default AppState should have no error message");
}

#[tokio::test]
async fn test_new_bookmark_is_focused_and_edited() {
    let mut app = memory_app(bookmark_store(&[]), Box::new(RecordingOpener::default())).await;
    let task_id = app.store().active_task().unwrap().id;

    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    assert_eq!(app.store().bookmarks().len(), 1);
    assert_eq!(app.bookmarks().focused_index(), Some(0));

    // While editing, global keys are text
    app.handle_event(key(KeyCode::Char('q'))).await.unwrap();
    assert!(!app.should_quit());
    assert_eq!(app.store().bookmarks()[0].uri, "q");
    assert!(app.dirty().contains(Collection::Bookmarks(task_id)));

    // Blurring clears the creation flag
    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    assert!(!app.store().bookmarks()[0].auto_focus);
    assert_eq!(app.bookmarks().focused_index(), None);

    app.flush().await;
    assert!(app.dirty().is_empty());
    assert!(app.state().error_message.is_none());
}

#[tokio::test]
async fn test_tick_waits_for_the_flush_interval() {
    let mut app = memory_app(bookmark_store(&[]), Box::new(RecordingOpener::default())).await;
    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    app.handle_event(EventType::Tick).await.unwrap();
    assert!(!app.dirty().is_empty());

    app.shutdown().await;
    assert!(app.dirty().is_empty());
}

#[tokio::test]
async fn test_failed_flush_keeps_changes_dirty() {
    let storage = ReadOnlyStorage;
    let store = storage.load_store().await.unwrap();
    let mut app = AppComponent::new(
        UiConfig::default(),
        store,
        Box::new(storage),
        Box::new(RecordingOpener::default()),
        Logger::new(),
    );

    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    app.flush().await;
    assert_eq!(app.state().error_message.as_deref(), Some(STATUS_SAVE_FAILED));
    assert!(!app.dirty().is_empty());
}

#[tokio::test]
async fn test_open_bookmark_uses_opener() {
    let opener = RecordingOpener::default();
    let opened = opener.opened.clone();
    let mut app = memory_app(bookmark_store(&["https://a.dev"]), Box::new(opener)).await;

    app.handle_event(key(KeyCode::Char('o'))).await.unwrap();
    assert_eq!(*opened.lock().unwrap(), vec!["https://a.dev".to_string()]);
    assert!(app.state().info_message.is_some());
}

#[tokio::test]
async fn test_open_failure_is_reported() {
    let mut app = memory_app(bookmark_store(&["https://a.dev"]), Box::new(BrokenOpener)).await;

    app.handle_event(key(KeyCode::Char('o'))).await.unwrap();
    assert_eq!(app.state().error_message.as_deref(), Some(STATUS_OPEN_FAILED));
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_tab_cycles_areas_and_q_quits() {
    let mut app = memory_app(bookmark_store(&[]), Box::new(RecordingOpener::default())).await;

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    assert_eq!(app.state().focus_area, FocusArea::Todos);
    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    assert_eq!(app.state().focus_area, FocusArea::Sidebar);
    app.handle_event(key(KeyCode::BackTab)).await.unwrap();
    assert_eq!(app.state().focus_area, FocusArea::Todos);

    app.handle_event(key(KeyCode::Char('q'))).await.unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_quits_while_editing() {
    let mut app = memory_app(bookmark_store(&[]), Box::new(RecordingOpener::default())).await;
    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .await
        .unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_shift_c_toggles_focused_todo_instead_of_quitting() {
    let store = TaskStore::single(
        "Inbox",
        TaskLists {
            bookmarks: Vec::new(),
            todos: vec![Todo::new("write report", 0)],
        },
    );
    let mut app = memory_app(store, Box::new(RecordingOpener::default())).await;

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    assert_eq!(app.state().focus_area, FocusArea::Todos);
    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.todos().focused_index(), Some(0));

    let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    app.handle_event(EventType::Key(chord)).await.unwrap();

    assert!(!app.should_quit());
    assert!(app.store().todos()[0].is_completed);
}

#[tokio::test]
async fn test_overlays_capture_keys() {
    let mut app = memory_app(bookmark_store(&[]), Box::new(RecordingOpener::default())).await;

    app.handle_event(key(KeyCode::Char('?'))).await.unwrap();
    assert!(app.state().show_help);
    // 'n' does not reach the panel behind the overlay
    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    assert!(app.store().bookmarks().is_empty());
    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    assert!(!app.state().show_help);

    app.handle_event(key(KeyCode::Char('G'))).await.unwrap();
    assert!(app.state().show_logs);
    app.handle_event(key(KeyCode::Char('G'))).await.unwrap();
    assert!(!app.state().show_logs);
}

#[tokio::test]
async fn test_last_task_cannot_be_deleted() {
    let mut app = memory_app(bookmark_store(&[]), Box::new(RecordingOpener::default())).await;

    app.handle_event(key(KeyCode::BackTab)).await.unwrap();
    assert_eq!(app.state().focus_area, FocusArea::Sidebar);

    app.handle_event(key(KeyCode::Char('D'))).await.unwrap();
    assert_eq!(app.store().tasks().len(), 1);
    assert_eq!(app.state().info_message.as_deref(), Some(STATUS_LAST_TASK));

    app.handle_event(key(KeyCode::Char('a'))).await.unwrap();
    assert_eq!(app.store().tasks().len(), 2);
    assert!(!app.sidebar().is_renaming());
}

#[tokio::test]
async fn test_click_on_todo_footer_focuses_panel_and_appends() {
    let mut app = memory_app(bookmark_store(&[]), Box::new(RecordingOpener::default())).await;
    app.set_viewport(Rect::new(0, 0, 100, 30));

    // Todos fill rows 3 to 28; their footer sits on the last inner line
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 30,
        row: 27,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_event(EventType::Mouse(click)).await.unwrap();

    assert_eq!(app.state().focus_area, FocusArea::Todos);
    assert_eq!(app.store().todos().len(), 1);
    assert_eq!(app.todos().focused_index(), Some(0));

    app.handle_event(EventType::Paste("- [x] done\n- [ ] next".to_string()))
        .await
        .unwrap();
    let texts: Vec<_> = app.store().todos().iter().map(|todo| todo.text.as_str()).collect();
    assert_eq!(texts, vec!["done", "next"]);
    assert!(app.store().todos()[0].is_completed);
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck::constants::DEFAULT_TASK_TITLE;
use taskdeck::store::{Intent, Task};
use taskdeck::ui::components::SidebarComponent;
use taskdeck::ui::core::{actions::Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn sidebar_with(titles: &[&str]) -> (SidebarComponent, Vec<Task>) {
    let tasks: Vec<Task> = titles.iter().map(|title| Task::new(*title)).collect();
    let mut sidebar = SidebarComponent::new();
    sidebar.update_data(tasks.clone(), tasks.first().map(|task| task.id));
    (sidebar, tasks)
}

#[test]
fn test_navigation_selects_task() {
    let (mut sidebar, tasks) = sidebar_with(&["Inbox", "Release"]);
    assert_eq!(
        sidebar.handle_key_events(key(KeyCode::Char('j'))),
        Action::Dispatch(Intent::SelectTask(tasks[1].id))
    );
    // Already on the first row
    assert_eq!(sidebar.handle_key_events(key(KeyCode::Char('k'))), Action::None);
}

#[test]
fn test_create_and_delete() {
    let (mut sidebar, tasks) = sidebar_with(&["Inbox"]);
    assert_eq!(
        sidebar.handle_key_events(key(KeyCode::Char('a'))),
        Action::Dispatch(Intent::NewTask {
            title: DEFAULT_TASK_TITLE.to_string()
        })
    );
    assert_eq!(
        sidebar.handle_key_events(key(KeyCode::Char('D'))),
        Action::Dispatch(Intent::RemoveTask(tasks[0].id))
    );
}

#[test]
fn test_inline_rename() {
    let (mut sidebar, tasks) = sidebar_with(&["Inbox"]);

    sidebar.handle_key_events(key(KeyCode::Char('e')));
    assert!(sidebar.is_renaming());
    assert!(sidebar.is_editing());

    sidebar.handle_key_events(key(KeyCode::Char('!')));
    sidebar.handle_paste("\n2".to_string());
    assert_eq!(
        sidebar.handle_key_events(key(KeyCode::Enter)),
        Action::Dispatch(Intent::RenameTask {
            id: tasks[0].id,
            title: "Inbox!2".to_string()
        })
    );
    assert!(!sidebar.is_renaming());
}

#[test]
fn test_escape_cancels_rename() {
    let (mut sidebar, _) = sidebar_with(&["Inbox"]);
    sidebar.handle_key_events(key(KeyCode::Enter));
    sidebar.handle_key_events(key(KeyCode::Char('x')));
    assert_eq!(sidebar.handle_key_events(key(KeyCode::Esc)), Action::None);
    assert!(!sidebar.is_renaming());
}

use crate::config::UiConfig;
use crate::constants::{FLUSH_INTERVAL_MS, STATUS_LAST_TASK, STATUS_OPEN_FAILED, STATUS_SAVE_FAILED};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::storage::Persistence;
use crate::store::{Dirty, Intent, StoreError, TaskStore};
use crate::ui::components::{
    BookmarkListComponent, HelpPanel, LogsPanel, SidebarComponent, StatusBar, StatusInfo, TodoListComponent,
};
use crate::ui::components::list_rows;
use crate::ui::core::{
    actions::{Action, FocusArea},
    event_handler::EventType,
    Component,
};
use crate::ui::keymap::Keymap;
use crate::ui::layout::LayoutManager;
use crate::ui::opener::UriOpener;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::collections::VecDeque;
use tokio::time::{Duration, Instant};

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus_area: FocusArea,
    pub show_help: bool,
    pub show_logs: bool,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

impl AppState {
    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    bookmarks: BookmarkListComponent,
    todos: TodoListComponent,
    help: HelpPanel,
    logs: LogsPanel,

    // Application state
    state: AppState,
    store: TaskStore,
    dirty: Dirty,
    last_flush: Instant,
    queue: VecDeque<Action>,

    // Services
    storage: Box<dyn Persistence>,
    opener: Box<dyn UriOpener>,
    logger: Logger,

    ui_config: UiConfig,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(
        ui_config: UiConfig,
        store: TaskStore,
        storage: Box<dyn Persistence>,
        opener: Box<dyn UriOpener>,
        logger: Logger,
    ) -> Self {
        let keymap = Keymap::new(ui_config.command_modifier);
        let icons = IconService::new(ui_config.icon_theme);

        let mut app = Self {
            sidebar: SidebarComponent::new(),
            bookmarks: BookmarkListComponent::new(keymap, icons.clone()),
            todos: TodoListComponent::new(keymap, icons, ui_config.indent_width),
            help: HelpPanel::new(ui_config.command_modifier),
            logs: LogsPanel::new(logger.clone()),
            state: AppState::default(),
            store,
            dirty: Dirty::none(),
            last_flush: Instant::now(),
            queue: VecDeque::new(),
            storage,
            opener,
            logger,
            ui_config,
            should_quit: false,
        };

        app.focused_component_mut().on_focus();
        app.sync_component_data();
        app.drain_queue();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn dirty(&self) -> &Dirty {
        &self.dirty
    }

    pub fn bookmarks(&self) -> &BookmarkListComponent {
        &self.bookmarks
    }

    pub fn todos(&self) -> &TodoListComponent {
        &self.todos
    }

    pub fn sidebar(&self) -> &SidebarComponent {
        &self.sidebar
    }

    /// Lay the panels out for a screen of `area`, so clicks can be routed
    /// before the first frame is drawn
    pub fn set_viewport(&mut self, area: Rect) {
        let areas = LayoutManager::workspace(area, self.ui_config.sidebar_width, self.store.bookmarks().len());
        self.sidebar.set_area(areas.sidebar);
        self.bookmarks.set_area(areas.bookmarks);
        self.todos.set_area(areas.todos);
    }

    fn focused_component_mut(&mut self) -> &mut dyn Component {
        match self.state.focus_area {
            FocusArea::Sidebar => &mut self.sidebar,
            FocusArea::Bookmarks => &mut self.bookmarks,
            FocusArea::Todos => &mut self.todos,
        }
    }

    fn focused_component(&self) -> &dyn Component {
        match self.state.focus_area {
            FocusArea::Sidebar => &self.sidebar,
            FocusArea::Bookmarks => &self.bookmarks,
            FocusArea::Todos => &self.todos,
        }
    }

    /// Push the store's current snapshots into every panel
    fn sync_component_data(&mut self) {
        self.sidebar
            .update_data(self.store.tasks().to_vec(), self.store.active_task().map(|task| task.id));
        self.bookmarks.update_data(self.store.bookmarks().to_vec());
        self.todos.update_data(self.store.todos().to_vec());

        // Rows that lost focus while refreshing
        for action in self.bookmarks.take_outbox() {
            self.queue.push_back(action);
        }
    }

    fn set_focus_area(&mut self, area: FocusArea) {
        if self.state.focus_area == area {
            return;
        }
        let blur_action = self.focused_component_mut().on_blur();
        self.queue.push_back(blur_action);

        self.state.focus_area = area;
        self.focused_component_mut().on_focus();
        log::debug!("Focus moved to {area:?}");
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Tab => Action::NextArea,
            KeyCode::BackTab => Action::PreviousArea,
            KeyCode::Char('?') => Action::ShowHelp(!self.state.show_help),
            KeyCode::Char('G') => Action::ShowLogs(!self.state.show_logs),
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+Shift+C belongs to the todo panel (toggle completion)
        if key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::SHIFT)
        {
            log::info!("Global key: Ctrl+C - quitting application");
            return Action::Quit;
        }

        // Overlays have priority when visible
        if self.state.show_logs {
            return self.logs.handle_key_events(key);
        }
        if self.state.show_help {
            return self.help.handle_key_events(key);
        }

        // Any key press dismisses the previous message
        self.state.clear_messages();

        let editing = self.focused_component().is_editing();
        let action = self.focused_component_mut().handle_key_events(key);
        if !action.is_none() || editing {
            return action;
        }
        self.handle_global_key(key)
    }

    fn area_at(&self, column: u16, row: u16) -> Option<FocusArea> {
        if list_rows::contains(self.sidebar.area(), column, row) {
            Some(FocusArea::Sidebar)
        } else if list_rows::contains(self.bookmarks.area(), column, row) {
            Some(FocusArea::Bookmarks)
        } else if list_rows::contains(self.todos.area(), column, row) {
            Some(FocusArea::Todos)
        } else {
            None
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.state.show_help || self.state.show_logs || !self.ui_config.mouse_enabled {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(_) => {
                let Some(area) = self.area_at(mouse.column, mouse.row) else {
                    return Action::None;
                };
                self.state.clear_messages();
                self.set_focus_area(area);
                self.focused_component_mut().handle_mouse_events(mouse)
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => match self.area_at(mouse.column, mouse.row) {
                Some(FocusArea::Sidebar) => self.sidebar.handle_mouse_events(mouse),
                Some(FocusArea::Bookmarks) => self.bookmarks.handle_mouse_events(mouse),
                Some(FocusArea::Todos) => self.todos.handle_mouse_events(mouse),
                None => Action::None,
            },
            // A drag may end over any panel; only the one that started it reacts
            MouseEventKind::Up(_) => {
                let action = self.bookmarks.handle_mouse_events(mouse);
                if !action.is_none() {
                    return action;
                }
                self.todos.handle_mouse_events(mouse)
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::NextArea => self.set_focus_area(self.state.focus_area.next()),
            Action::PreviousArea => self.set_focus_area(self.state.focus_area.previous()),
            Action::Dispatch(intent) => self.dispatch(intent),
            Action::OpenUri(uri) => match self.opener.open(&uri) {
                Ok(()) => {
                    log::info!("Opened {uri}");
                    self.state.info_message = Some(format!("Opened {uri}"));
                }
                Err(e) => {
                    log::error!("Failed to open {uri}: {e:#}");
                    self.state.error_message = Some(STATUS_OPEN_FAILED.to_string());
                }
            },
            Action::ShowHelp(visible) => {
                self.state.show_help = visible;
                self.help.reset_scroll();
            }
            Action::ShowLogs(visible) => {
                self.state.show_logs = visible;
                self.logs.reset_scroll();
            }
            Action::None => {}
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        log::debug!("Dispatching {intent:?}");
        match self.store.dispatch(intent) {
            Ok(dirty) => self.dirty.merge(dirty),
            Err(StoreError::LastTask) => {
                self.state.info_message = Some(STATUS_LAST_TASK.to_string());
            }
            Err(e) => {
                log::debug!("Ignoring intent: {e}");
            }
        }
        self.sync_component_data();
    }

    /// Run queued actions until the panels settle
    fn drain_queue(&mut self) {
        while let Some(action) = self.queue.pop_front() {
            self.handle_app_action(action);
        }
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Paste(text) => {
                if self.state.show_help || self.state.show_logs {
                    Action::None
                } else {
                    self.focused_component_mut().handle_paste(text)
                }
            }
            EventType::Tick => {
                self.flush_if_due().await;
                Action::None
            }
            EventType::Resize(_, _) | EventType::Render | EventType::Other => Action::None,
        };

        self.queue.push_back(action);
        self.drain_queue();
        Ok(())
    }

    /// Write pending changes when the last write is old enough
    pub async fn flush_if_due(&mut self) {
        if !self.dirty.is_empty() && self.last_flush.elapsed() >= Duration::from_millis(FLUSH_INTERVAL_MS) {
            self.flush().await;
        }
    }

    /// Write every pending change now
    pub async fn flush(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        let dirty = std::mem::take(&mut self.dirty);
        if let Err(e) = self.storage.flush(&self.store, &dirty).await {
            log::error!("Failed to save changes: {e:#}");
            self.state.error_message = Some(STATUS_SAVE_FAILED.to_string());
            // Keep the collections dirty so the next tick retries
            self.dirty.merge(dirty);
        }
        self.last_flush = Instant::now();
    }

    /// Final write before the terminal is restored
    pub async fn shutdown(&mut self) {
        self.flush().await;
        log::info!("Shutting down");
        self.logger.flush();
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.route_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::workspace(rect, self.ui_config.sidebar_width, self.store.bookmarks().len());

        self.sidebar.render(f, areas.sidebar);
        self.bookmarks.render(f, areas.bookmarks);
        self.todos.render(f, areas.todos);

        let info = StatusInfo {
            area: self.state.focus_area,
            editing: self.focused_component().is_editing(),
            command: self.ui_config.command_modifier,
            error_message: self.state.error_message.as_deref(),
            info_message: self.state.info_message.as_deref(),
        };
        StatusBar::render(f, areas.status, &info);

        // Overlays on top
        if self.state.show_help {
            self.help.render(f, rect);
        }
        if self.state.show_logs {
            self.logs.render(f, rect);
        }
    }
}

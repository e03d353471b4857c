//! Terminal setup and the main event loop

use anyhow::Result;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

use crate::config::Config;
use crate::logger::Logger;
use crate::storage::Persistence;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crate::ui::opener::SystemOpener;

/// Run the TUI until the user quits
pub async fn run_app(config: Config, storage: Box<dyn Persistence>, logger: Logger) -> Result<()> {
    let store = storage.load_store().await?;
    log::info!("Loaded {} tasks", store.tasks().len());

    let mouse_enabled = config.ui.mouse_enabled;
    let mut app = AppComponent::new(config.ui, store, storage, Box::new(SystemOpener), logger);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    // Lets Ctrl+[ and Ctrl+Shift+C reach us instead of Escape and Ctrl+C
    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true))
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )
        .is_ok();
    log::debug!("Keyboard enhancement: {keyboard_enhanced}");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal(keyboard_enhanced);
        original_hook(panic_info);
    }));

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Write whatever is still pending, even after an error
    app.shutdown().await;

    // Restore terminal
    restore_terminal(keyboard_enhanced);
    terminal.show_cursor()?;

    result
}

fn restore_terminal(keyboard_enhanced: bool) {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if keyboard_enhanced {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(stdout, DisableBracketedPaste, DisableMouseCapture, LeaveAlternateScreen);
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        let idle = matches!(event, EventType::Tick | EventType::Other);

        app.handle_event(event).await?;

        // Ticks only flush; nothing on screen changes unless a save fails
        needs_render = !idle || app.state().error_message.is_some();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

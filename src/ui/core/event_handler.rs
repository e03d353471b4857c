use crate::constants::POLL_INTERVAL_MS;
use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(100))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Wait for the next terminal event, or a tick when the terminal is idle
    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        loop {
            // Check for terminal events without blocking first
            if poll(Duration::from_millis(0))? {
                return Ok(EventType::from(crossterm::event::read()?));
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(EventType::Tick);
            }

            tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
    Render,
    Other,
}

impl From<Event> for EventType {
    fn from(event: Event) -> Self {
        match event {
            // Release reports only show up with enhanced keyboards
            Event::Key(key) if key.kind == KeyEventKind::Release => EventType::Other,
            Event::Key(key) => EventType::Key(key),
            Event::Mouse(mouse) => EventType::Mouse(mouse),
            Event::Paste(text) => EventType::Paste(text),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

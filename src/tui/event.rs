use crossterm::event::{KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Synchronous event source: key events interleaved with ticks at a fixed
/// rate. Nothing here blocks longer than the tick interval, and no work
/// happens between user actions beyond redrawing.
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            last_tick: Instant::now(),
        }
    }

    /// Wait for the next event: a key press, or a tick when the interval
    /// elapses without input.
    pub fn next(&mut self) -> anyhow::Result<Event> {
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if crossterm::event::poll(timeout)? {
                if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                    // Filter for Press only (Windows compatibility)
                    if key.kind == KeyEventKind::Press {
                        return Ok(Event::Key(key));
                    }
                }
                // Resize and other events fall through to the next poll
                continue;
            }

            self.last_tick = Instant::now();
            return Ok(Event::Tick);
        }
    }
}

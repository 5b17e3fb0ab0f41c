use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent};

use crate::timer::TickToken;

/// Raw terminal input forwarded by an event source
#[derive(Clone, Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize,
}

/// Unified event type consumed by the app loop
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// One time unit elapsed for the run identified by the token
    Tick(TickToken),
    /// Nothing happened within one interval while no timer was armed
    Idle,
    /// The event source hung up
    Closed,
}

impl From<InputEvent> for AppEvent {
    fn from(ev: InputEvent) -> Self {
        match ev {
            InputEvent::Key(key) => AppEvent::Key(key),
            InputEvent::Resize => AppEvent::Resize,
        }
    }
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<InputEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<InputEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(InputEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(InputEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%err, "terminal event reader stopped");
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<InputEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// One tick per second, the unit the session window is counted in
    pub fn seconds() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<InputEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<InputEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<InputEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

#[derive(Clone, Copy, Debug)]
struct TickSchedule {
    token: TickToken,
    next: Instant,
}

/// Runner that serializes input events and timer ticks into one stream.
///
/// Ticks are only produced while armed. Arming with a token schedules the
/// first tick one interval from now, like a repeating timer started on the
/// first keystroke; every tick carries the token it was armed with.
pub struct Runner<E: EventSource, T: Ticker> {
    event_source: E,
    ticker: T,
    schedule: Option<TickSchedule>,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
            schedule: None,
        }
    }

    /// Follow the controller's timer: arm for a new token, disarm on `None`.
    /// Re-syncing with the token already armed keeps the current schedule.
    pub fn sync(&mut self, token: Option<TickToken>) {
        match (token, self.schedule) {
            (Some(token), Some(schedule)) if schedule.token == token => {}
            (Some(token), _) => {
                self.schedule = Some(TickSchedule {
                    token,
                    next: Instant::now() + self.ticker.interval(),
                });
            }
            (None, _) => self.schedule = None,
        }
    }

    pub fn armed_token(&self) -> Option<TickToken> {
        self.schedule.map(|s| s.token)
    }

    /// Blocks until the next input event or the next due tick
    pub fn step(&mut self) -> AppEvent {
        let interval = self.ticker.interval();

        match self.schedule.as_mut() {
            Some(schedule) => {
                let now = Instant::now();
                if now >= schedule.next {
                    schedule.next += interval;
                    return AppEvent::Tick(schedule.token);
                }
                match self.event_source.recv_timeout(schedule.next - now) {
                    Ok(ev) => ev.into(),
                    Err(RecvTimeoutError::Timeout) => {
                        schedule.next += interval;
                        AppEvent::Tick(schedule.token)
                    }
                    Err(RecvTimeoutError::Disconnected) => AppEvent::Closed,
                }
            }
            None => match self.event_source.recv_timeout(interval) {
                Ok(ev) => ev.into(),
                Err(RecvTimeoutError::Timeout) => AppEvent::Idle,
                Err(RecvTimeoutError::Disconnected) => AppEvent::Closed,
            },
        }
    }
}

use rand::rngs::StdRng;
use rand::Rng;

use crate::comparator::CharacterCell;
use crate::content::{Category, ContentBank};
use crate::session::{Metrics, Session};
use crate::timer::{SessionTimer, TickOutcome, TickToken, TimerState};

/// Outbound side of the controller: whatever draws the session implements this
pub trait Presenter {
    fn on_render_text(&mut self, text: &str);
    fn on_cells_updated(&mut self, cells: &[CharacterCell]);
    fn on_metrics_updated(&mut self, wpm: u32, accuracy: u32, errors: usize);
    fn on_time_updated(&mut self, remaining: u32);
    fn on_input_locked(&mut self, locked: bool);
}

/// Owns every piece of mutable session state: the draw banks, the timer and
/// the one active session.
#[derive(Debug)]
pub struct SessionController<P, R = StdRng> {
    bank: ContentBank<R>,
    presenter: P,
    mode: Category,
    session: Session,
    timer: SessionTimer,
    input_locked: bool,
    // elapsed time the displayed metrics were computed with
    metrics_elapsed: u32,
}

impl<P: Presenter, R: Rng> SessionController<P, R> {
    /// Draws and presents the first text of `mode`
    pub fn new(bank: ContentBank<R>, presenter: P, mode: Category) -> Self {
        let mut controller = Self {
            bank,
            presenter,
            mode,
            session: Session::new(String::new()),
            timer: SessionTimer::new(),
            input_locked: false,
            metrics_elapsed: 0,
        };
        controller.reset_session();
        controller
    }

    pub fn notify_input_changed(&mut self, buffer: &str) -> bool {
        if self.input_locked {
            tracing::debug!("input ignored, session locked");
            return false;
        }

        if self.timer.start().is_some() {
            tracing::debug!(mode = %self.mode, "timer started");
        }

        self.session.set_input(buffer);
        self.metrics_elapsed = self.timer.elapsed();
        self.presenter.on_cells_updated(self.session.cells());
        self.publish_metrics();
        true
    }

    pub fn notify_tick(&mut self, token: TickToken) -> TickOutcome {
        let outcome = self.timer.tick(token);
        match outcome {
            TickOutcome::Ignored => {
                tracing::debug!(?token, state = ?self.timer.state(), "stale tick ignored");
            }
            TickOutcome::Ticked { remaining } => {
                self.presenter.on_time_updated(remaining);
            }
            TickOutcome::Expired => {
                self.presenter.on_time_updated(0);
                self.input_locked = true;
                self.presenter.on_input_locked(true);
                let metrics = self.metrics();
                tracing::info!(
                    mode = %self.mode,
                    wpm = metrics.wpm,
                    accuracy = metrics.accuracy,
                    errors = metrics.errors,
                    "session expired"
                );
            }
        }
        outcome
    }

    pub fn notify_restart_requested(&mut self) {
        tracing::debug!(mode = %self.mode, "restart requested");
        self.reset_session();
    }

    pub fn notify_mode_changed(&mut self, category: Category) {
        tracing::info!(from = %self.mode, to = %category, "mode changed");
        self.mode = category;
        self.reset_session();
    }

    pub fn mode(&self) -> Category {
        self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn target(&self) -> &str {
        self.session.target()
    }

    /// Metrics as last presented
    pub fn metrics(&self) -> Metrics {
        self.session.metrics(self.metrics_elapsed)
    }

    pub fn remaining(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    /// Token ticks must carry while the timer runs
    pub fn tick_token(&self) -> Option<TickToken> {
        self.timer.token()
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn bank(&self) -> &ContentBank<R> {
        &self.bank
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn reset_session(&mut self) {
        self.timer.reset();
        self.metrics_elapsed = 0;
        self.presenter.on_time_updated(self.timer.remaining());
        let reset = Metrics::RESET;
        self.presenter
            .on_metrics_updated(reset.wpm, reset.accuracy, reset.errors);
        self.new_text();
    }

    fn new_text(&mut self) {
        let text = self.bank.draw(self.mode);
        tracing::debug!(
            mode = %self.mode,
            chars = text.chars().count(),
            left_in_pass = self.bank.remaining(self.mode),
            "drew text"
        );
        self.session = Session::new(text);
        self.input_locked = false;
        self.presenter.on_render_text(self.session.target());
        self.presenter.on_cells_updated(self.session.cells());
        self.presenter.on_input_locked(false);
    }

    fn publish_metrics(&mut self) {
        let metrics = self.metrics();
        self.presenter
            .on_metrics_updated(metrics.wpm, metrics.accuracy, metrics.errors);
    }
}

/// Length of every session, in ticks (seconds)
pub const SESSION_WINDOW: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Expired,
}

/// Proof that a tick belongs to the current run of the timer.
///
/// Handed out by `start`; `reset` bumps the epoch, so tokens from an earlier
/// run no longer match and their ticks are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken {
    epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale token, or the timer was not running
    Ignored,
    Ticked { remaining: u32 },
    Expired,
}

/// Countdown over a fixed window: idle until first input, then one unit per tick
#[derive(Debug, Clone)]
pub struct SessionTimer {
    state: TimerState,
    remaining: u32,
    epoch: u64,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            remaining: SESSION_WINDOW,
            epoch: 0,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whole units consumed since the timer started
    pub fn elapsed(&self) -> u32 {
        SESSION_WINDOW - self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }

    /// Token for the current run, if the timer is running
    pub fn token(&self) -> Option<TickToken> {
        self.is_running().then_some(TickToken { epoch: self.epoch })
    }

    /// Idle → running. Returns the token only on that transition; a running or
    /// expired timer is left as is.
    pub fn start(&mut self) -> Option<TickToken> {
        if self.state != TimerState::Idle {
            return None;
        }
        self.state = TimerState::Running;
        Some(TickToken { epoch: self.epoch })
    }

    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        if self.state != TimerState::Running || token.epoch != self.epoch {
            return TickOutcome::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = TimerState::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked {
                remaining: self.remaining,
            }
        }
    }

    /// Any state → idle with a full window. Outstanding tokens become stale.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.remaining = SESSION_WINDOW;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

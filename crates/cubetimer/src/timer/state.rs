use std::fmt;

/// Phase of the stopwatch cycle.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TimerState {
    /// Idle; the last run's time is on display.
    #[default]
    Stopped,
    /// Trigger held, waiting for release to start.
    Primed,
    Running,
}

impl TimerState {
    /// Upper-case name shown on the status line.
    pub fn label(self) -> &'static str {
        match self {
            TimerState::Stopped => "STOPPED",
            TimerState::Primed => "PRIMED",
            TimerState::Running => "RUNNING",
        }
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

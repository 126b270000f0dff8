//! In-game clock: seven discrete hours from midnight to dawn.

use crate::constants::{CLOCK_LABELS, DAWN_HOUR};
use crate::state::{RunState, RunStatus};

/// Result of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockOutcome {
    /// The night goes on.
    Progressed,
    /// The terminal hour arrived; the run is won.
    Dawn,
}

/// Advance the hour counter. At the terminal hour the run flips to `Won`.
pub fn advance_hour(state: &mut RunState) -> ClockOutcome {
    let next = state.hour.saturating_add(1);
    if next >= DAWN_HOUR {
        state.hour = DAWN_HOUR;
        state.clock_label = CLOCK_LABELS[usize::from(DAWN_HOUR)];
        state.end(RunStatus::Won);
        ClockOutcome::Dawn
    } else {
        state.hour = next;
        state.clock_label = CLOCK_LABELS[usize::from(next)];
        ClockOutcome::Progressed
    }
}

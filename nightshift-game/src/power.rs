//! Energy meter: per-second drain from engaged consumers.

use crate::constants::{BASE_DRAIN_PER_TICK, DOOR_DRAIN_SURCHARGE, VIEWPORT_DRAIN_SURCHARGE};
use crate::difficulty::DifficultyProfile;
use crate::state::{DoorState, RunState};

/// Energy removed by one meter tick for the given consumer engagement.
#[must_use]
pub fn drain_per_tick(doors: DoorState, viewport: usize, profile: &DifficultyProfile) -> f32 {
    let mut drain = BASE_DRAIN_PER_TICK;
    drain += DOOR_DRAIN_SURCHARGE * f32::from(doors.closed_count());
    if viewport > 0 {
        drain += VIEWPORT_DRAIN_SURCHARGE;
    }
    drain * profile.energy_drain_factor
}

/// Apply one meter tick. Returns true on the tick the meter empties, which
/// also forces both doors open.
pub fn apply_meter_tick(state: &mut RunState, profile: &DifficultyProfile) -> bool {
    let drain = drain_per_tick(state.doors, state.viewport, profile);
    let depleted = state.drain_energy(drain);
    if depleted {
        state.doors.force_open();
    }
    depleted
}

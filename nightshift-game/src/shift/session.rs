//! High-level session wrapper binding the timeline kernel to a run snapshot.

use std::rc::Rc;

use crate::difficulty::{Difficulty, DifficultyProfile};
use crate::graph::{LocationGraph, Side};
use crate::shift::kernel::ShiftKernel;
use crate::shift::{CueBuffer, RngBundle};
use crate::state::{RunState, RunStatus};

/// One live (or finished) night shift.
///
/// The embedder owns the timeline: it calls `advance_to` with a monotonic
/// millisecond clock, applies player commands between advances, and renders
/// from the returned snapshot and cues. Tests feed virtual time.
#[derive(Debug)]
pub struct ShiftSession {
    kernel: ShiftKernel,
    state: RunState,
}

impl ShiftSession {
    /// Begin a run at timeline origin with a resolved profile.
    #[must_use]
    pub fn begin(
        difficulty: Difficulty,
        profile: DifficultyProfile,
        graph: LocationGraph,
        seed: u64,
    ) -> Self {
        let state = RunState::fresh(difficulty);
        let mut kernel = ShiftKernel::new(profile, graph, Rc::new(RngBundle::from_user_seed(seed)));
        kernel.start(&state, 0);
        Self { kernel, state }
    }

    /// Process everything due up to `now_ms`, returning the cues emitted.
    pub fn advance_to(&mut self, now_ms: u64) -> CueBuffer {
        self.kernel.advance_to(&mut self.state, now_ms)
    }

    /// Toggle one door guard at the current timeline position.
    /// Returns false when the command had no effect.
    pub fn toggle_door(&mut self, side: Side) -> bool {
        self.kernel.toggle_door(&mut self.state, side)
    }

    /// Point the camera viewport at a node index.
    /// Returns false when the command had no effect.
    pub fn switch_viewport(&mut self, index: usize) -> bool {
        self.kernel.switch_viewport(&mut self.state, index)
    }

    /// Read-only snapshot for the presentation layer.
    #[must_use]
    pub const fn state(&self) -> &RunState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> RunStatus {
        self.state.status
    }

    /// Timeline position of the last processed item.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.kernel.now_ms()
    }

    #[must_use]
    pub const fn profile(&self) -> &DifficultyProfile {
        self.kernel.profile()
    }

    #[must_use]
    pub const fn graph(&self) -> &LocationGraph {
        self.kernel.graph()
    }

    /// The deterministic RNG bundle driving this run; exposed so tests can
    /// assert on draw counts.
    #[must_use]
    pub fn rng_bundle(&self) -> Rc<RngBundle> {
        self.kernel.rng_bundle()
    }

    /// Apply a closure to the mutable run snapshot. Test scaffolding.
    pub fn with_state_mut<R>(&mut self, f: impl FnOnce(&mut RunState) -> R) -> R {
        f(&mut self.state)
    }

    /// Consume the session, returning the final snapshot.
    #[must_use]
    pub fn into_state(self) -> RunState {
        self.state
    }
}

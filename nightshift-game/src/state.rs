//! Mutable run snapshot owned by the shift session.

use serde::{Deserialize, Serialize};

use crate::constants::{CLOCK_LABELS, ENERGY_MAX, INITIAL_AGGRESSION};
use crate::difficulty::Difficulty;
use crate::graph::{Side, StalkerNode};

#[cfg(debug_assertions)]
pub(crate) fn debug_log_enabled() -> bool {
    matches!(std::env::var(crate::constants::DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
pub(crate) const fn debug_log_enabled() -> bool {
    false
}

/// Why a run ended in defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossCause {
    /// The stalker reached an unguarded chokepoint.
    Attack,
    /// Power stayed out past the grace window.
    Captured,
}

/// One-way lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind", content = "cause")]
pub enum RunStatus {
    #[default]
    Active,
    Lost(LossCause),
    Won,
}

impl RunStatus {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !self.is_active()
    }
}

/// Player-controlled door guards, true = closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DoorState {
    pub left: bool,
    pub right: bool,
}

impl DoorState {
    #[must_use]
    pub const fn closed(self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub const fn set(&mut self, side: Side, closed: bool) {
        match side {
            Side::Left => self.left = closed,
            Side::Right => self.right = closed,
        }
    }

    #[must_use]
    pub const fn closed_count(self) -> u8 {
        self.left as u8 + self.right as u8
    }

    pub const fn force_open(&mut self) {
        self.left = false;
        self.right = false;
    }
}

/// Deferred one-shot mutation queued against the run timeline.
///
/// Effects are recorded rather than hidden inside timer callbacks so a
/// terminated run can simply stop draining the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "effect", content = "side")]
pub enum DeferredKind {
    /// Clear the stun flag and let the stalker schedule decisions again.
    StunClear,
    /// Finish a feint by re-appearing at the chokepoint it left.
    FeintRevert(Side),
    /// Power-out watchdog; captures the player if the run is still live.
    PowerGrace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredEffect {
    pub fire_at_ms: u64,
    pub kind: DeferredKind,
}

/// The authoritative snapshot every periodic task reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunState {
    pub energy: f32,
    pub doors: DoorState,
    pub viewport: usize,
    pub stalker: StalkerNode,
    pub aggression: f32,
    pub stunned: bool,
    pub hour: u8,
    pub clock_label: &'static str,
    pub status: RunStatus,
    pub difficulty: Difficulty,
    /// Pending one-shot effects, processed in timeline order by the kernel.
    pub pending: Vec<DeferredEffect>,
}

impl RunState {
    /// Fresh snapshot for a new run.
    #[must_use]
    pub fn fresh(difficulty: Difficulty) -> Self {
        Self {
            energy: ENERGY_MAX,
            doors: DoorState::default(),
            viewport: 0,
            stalker: StalkerNode::Home,
            aggression: INITIAL_AGGRESSION,
            stunned: false,
            hour: 0,
            clock_label: CLOCK_LABELS[0],
            status: RunStatus::Active,
            difficulty,
            pending: Vec::new(),
        }
    }

    /// Subtract drain, clamped at zero. Returns true when this call is the
    /// one that emptied the meter.
    pub fn drain_energy(&mut self, amount: f32) -> bool {
        if self.energy <= 0.0 {
            return false;
        }
        self.energy = (self.energy - amount.max(0.0)).max(0.0);
        self.energy <= 0.0
    }

    /// Raise aggression monotonically, clamped to the profile ceiling.
    pub fn raise_aggression(&mut self, amount: f32, max_aggression: f32) {
        if amount > 0.0 {
            self.aggression = (self.aggression + amount).min(max_aggression);
        }
    }

    /// Transition into a terminal status. Later calls lose; the first
    /// outcome of a run is the only one.
    pub fn end(&mut self, status: RunStatus) -> bool {
        if self.status.is_terminal() || status.is_active() {
            return false;
        }
        self.status = status;
        true
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn queue_effect(&mut self, fire_at_ms: u64, kind: DeferredKind) {
        self.pending.push(DeferredEffect { fire_at_ms, kind });
    }
}

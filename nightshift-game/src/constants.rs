//! Centralized balance and tuning constants for Nightshift game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Debug logging ------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "NIGHTSHIFT_DEBUG_LOGS";

// Timeline cadences --------------------------------------------------------
pub(crate) const CLOCK_PERIOD_MS: u64 = 15_000;
pub(crate) const METER_PERIOD_MS: u64 = 1_000;
pub(crate) const AMBIENT_PERIOD_MS: u64 = 8_000;

// Game clock ---------------------------------------------------------------
pub(crate) const DAWN_HOUR: u8 = 6;
pub(crate) const CLOCK_LABELS: [&str; 7] = [
    "12:00 AM", "1:00 AM", "2:00 AM", "3:00 AM", "4:00 AM", "5:00 AM", "6:00 AM",
];

// Energy meter -------------------------------------------------------------
pub(crate) const ENERGY_MAX: f32 = 100.0;
pub(crate) const BASE_DRAIN_PER_TICK: f32 = 0.5;
pub(crate) const DOOR_DRAIN_SURCHARGE: f32 = 2.0;
pub(crate) const VIEWPORT_DRAIN_SURCHARGE: f32 = 0.3;
pub(crate) const POWER_GRACE_MS: u64 = 2_000;

// Stalker decision tuning --------------------------------------------------
pub(crate) const INITIAL_AGGRESSION: f32 = 1.0;
pub(crate) const STALKER_FLOOR_MS: f32 = 500.0;
pub(crate) const INTERVAL_DECAY: f32 = 0.8;
pub(crate) const HOUR5_CALM: f32 = 0.3;
pub(crate) const LATE_GAME_HOUR: u8 = 4;
pub(crate) const AGGRESSION_BASE_INCREMENT: f32 = 0.05;
pub(crate) const AGGRESSION_MOVE_BONUS: f32 = 0.3;
pub(crate) const MOVE_CHANCE_CAP: f32 = 0.95;
pub(crate) const APPROACH_FORWARD_CHANCE: f32 = 0.8;
pub(crate) const CHOKEPOINT_RETREAT_CHANCE: f32 = 0.3;
pub(crate) const FEINT_CHANCE: f32 = 0.1;
pub(crate) const FEINT_REVERT_MS: u64 = 800;

// Hunting and trap escalation ----------------------------------------------
pub(crate) const HUNT_SPEEDUP: f32 = 0.25;
pub(crate) const HUNT_MOVE_BONUS: f32 = 0.15;
pub(crate) const TRAP_AGGRESSION_MULT: f32 = 3.0;
pub(crate) const TRAP_MOVE_BONUS: f32 = 0.1;

// Player interaction -------------------------------------------------------
pub(crate) const DOOR_STUN_MS: u64 = 3_000;
pub(crate) const CAMERA_STUN_MS: u64 = 2_000;
pub(crate) const DOOR_KNOCKBACK_STEPS: usize = 2;

// Ambient cue thresholds ---------------------------------------------------
pub(crate) const AMBIENT_HUM_ROLL: f32 = 0.10;
pub(crate) const AMBIENT_STATIC_ROLL: f32 = 0.15;
pub(crate) const AMBIENT_PROXIMITY_ROLL: f32 = 0.18;

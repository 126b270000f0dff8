//! Stalker decision engine.
//!
//! Each decision is a pure function of the current node, the door guard
//! state, the difficulty profile, and an injected uniform sampler, so every
//! branch can be pinned down in tests with a scripted RNG. The kernel owns
//! scheduling and side effects; this module owns the math.

use rand::Rng;

use crate::constants::{
    AGGRESSION_BASE_INCREMENT, AGGRESSION_MOVE_BONUS, APPROACH_FORWARD_CHANCE,
    CHOKEPOINT_RETREAT_CHANCE, FEINT_CHANCE, HOUR5_CALM, HUNT_MOVE_BONUS, HUNT_SPEEDUP,
    INTERVAL_DECAY, LATE_GAME_HOUR, MOVE_CHANCE_CAP, STALKER_FLOOR_MS, TRAP_AGGRESSION_MULT,
    TRAP_MOVE_BONUS,
};
use crate::difficulty::DifficultyProfile;
use crate::graph::{LocationGraph, Side, StalkerNode};
use crate::numbers::f32_to_interval_ms;
use crate::state::DoorState;

/// How a single movement step resolved spatially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// A regular relocation, or a deliberate hold at the current node.
    Step,
    /// Fake retreat to the junction; reverts to the chokepoint shortly.
    Feint { revert_to: Side },
}

/// Dusk slowdown factor: eases off once the late hours arrive, with a hard
/// lull in the final hour before dawn.
#[must_use]
pub fn late_game_calm(profile: &DifficultyProfile, hour: u8) -> f32 {
    if hour == 5 {
        HOUR5_CALM
    } else if hour >= LATE_GAME_HOUR {
        profile.late_game_calm
    } else {
        1.0
    }
}

#[must_use]
pub fn aggression_fraction(aggression: f32, profile: &DifficultyProfile) -> f32 {
    (aggression / profile.max_aggression).min(1.0)
}

/// Milliseconds until the next decision, recomputed after every decision.
#[must_use]
pub fn move_interval_ms(
    profile: &DifficultyProfile,
    aggression: f32,
    hour: u8,
    hunting: bool,
) -> u64 {
    let decay = 1.0 - aggression_fraction(aggression, profile) * INTERVAL_DECAY;
    let hunt_mult = if hunting { HUNT_SPEEDUP } else { 1.0 };
    let interval =
        profile.base_move_interval_ms * decay * late_game_calm(profile, hour) * hunt_mult;
    f32_to_interval_ms(interval, STALKER_FLOOR_MS)
}

/// Aggression gained by one decision. Grows with the hour; trap events
/// spike it sharply.
#[must_use]
pub fn aggression_step(profile: &DifficultyProfile, hour: u8, trapped: bool) -> f32 {
    let base = profile.aggression_growth * f32::from(hour + 1) * AGGRESSION_BASE_INCREMENT;
    if trapped {
        base * TRAP_AGGRESSION_MULT
    } else {
        base
    }
}

/// Probability that this decision relocates the stalker. Never reaches 1.
#[must_use]
pub fn move_chance(
    profile: &DifficultyProfile,
    aggression: f32,
    hour: u8,
    hunting: bool,
    trapped: bool,
) -> f32 {
    let base = profile.move_chance * late_game_calm(profile, hour);
    let aggression_bonus = aggression_fraction(aggression, profile) * AGGRESSION_MOVE_BONUS;
    let hunt_bonus = if hunting { HUNT_MOVE_BONUS } else { 0.0 };
    let trap_bonus = if trapped { TRAP_MOVE_BONUS } else { 0.0 };
    (base + aggression_bonus + hunt_bonus + trap_bonus).min(MOVE_CHANCE_CAP)
}

/// Whether occupying `node` with `doors` as guard state ends the run.
///
/// Evaluated against the post-move location, never the pre-move one.
#[must_use]
pub const fn is_attack_outcome(node: StalkerNode, doors: DoorState) -> bool {
    match node {
        StalkerNode::AtChokepoint(side) => !doors.closed(side),
        _ => false,
    }
}

fn roll<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..1.0)
}

/// One movement step for the current node. `aggression` is the post-growth
/// value for this decision.
pub fn transition<R: Rng + ?Sized>(
    node: StalkerNode,
    doors: DoorState,
    profile: &DifficultyProfile,
    aggression: f32,
    graph: &LocationGraph,
    rng: &mut R,
) -> (StalkerNode, StepAction) {
    match node {
        StalkerNode::Home => {
            let next = if roll(rng) < 0.5 {
                StalkerNode::Approach(1)
            } else {
                graph.forward_of(StalkerNode::Approach(1))
            };
            (next, StepAction::Step)
        }
        StalkerNode::Approach(_) => {
            let smart = roll(rng) < profile.smart_movement;
            let next = if smart || roll(rng) < APPROACH_FORWARD_CHANCE {
                graph.forward_of(node)
            } else {
                graph.retreat_of(node, 1)
            };
            (next, StepAction::Step)
        }
        StalkerNode::Junction => {
            let smart = roll(rng) < profile.smart_movement;
            let next = if smart {
                match (doors.left, doors.right) {
                    (false, false) => pick_side(rng),
                    (false, true) => StalkerNode::AtChokepoint(Side::Left),
                    (true, false) => StalkerNode::AtChokepoint(Side::Right),
                    (true, true) => StalkerNode::Junction,
                }
            } else {
                pick_side(rng)
            };
            (next, StepAction::Step)
        }
        StalkerNode::AtChokepoint(side) => {
            if !doors.closed(side) {
                // Unguarded: the decision is the attack itself.
                return (node, StepAction::Step);
            }
            if roll(rng) < FEINT_CHANCE {
                return (StalkerNode::Junction, StepAction::Feint { revert_to: side });
            }
            let switch_chance =
                profile.door_switch_speed * (1.0 + aggression_fraction(aggression, profile));
            if roll(rng) < switch_chance && !doors.closed(side.other()) {
                return (StalkerNode::AtChokepoint(side.other()), StepAction::Step);
            }
            if roll(rng) < CHOKEPOINT_RETREAT_CHANCE {
                return (StalkerNode::Junction, StepAction::Step);
            }
            (node, StepAction::Step)
        }
    }
}

fn pick_side<R: Rng + ?Sized>(rng: &mut R) -> StalkerNode {
    if roll(rng) < 0.5 {
        StalkerNode::AtChokepoint(Side::Left)
    } else {
        StalkerNode::AtChokepoint(Side::Right)
    }
}

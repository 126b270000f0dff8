//! Headless shift driver: virtual-time loop binding a policy to a session.

use nightshift_game::{
    CueKind, Difficulty, LossCause, NightEngine, RunStatus, ShiftSession,
};
use serde::Serialize;

use crate::policy::{PlayerPolicy, PolicyCommand, decide};

/// Poll cadence of the scripted player, in timeline milliseconds.
const POLL_MS: u64 = 250;
/// Hard stop well past dawn plus the capture grace window.
const TIMELINE_CAP_MS: u64 = 120_000;

/// Configuration for one simulated shift.
#[derive(Debug, Clone, Copy)]
pub struct ShiftConfig {
    pub difficulty: Difficulty,
    pub policy: PlayerPolicy,
    pub seed: u64,
}

/// Condensed outcome of one simulated shift.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftRecord {
    pub difficulty: String,
    pub policy: String,
    pub seed: u64,
    pub outcome: String,
    pub survived: bool,
    pub hours_survived: u8,
    pub final_energy: f32,
    pub ended_at_ms: u64,
    pub taunts: usize,
    pub attacks_repelled: usize,
}

/// Drive one full night under the scripted policy.
pub fn run_shift(config: ShiftConfig) -> anyhow::Result<ShiftRecord> {
    let engine = NightEngine::new();
    let mut session = engine.start_run(config.difficulty, config.seed)?;

    let mut taunts = 0usize;
    let mut attacks_repelled = 0usize;
    let mut now_ms = 0u64;
    while session.status().is_active() && now_ms < TIMELINE_CAP_MS {
        now_ms += POLL_MS;
        let cues = session.advance_to(now_ms);
        taunts += cues.iter().filter(|cue| cue.kind == CueKind::Taunt).count();
        if session.status().is_active() {
            attacks_repelled += apply_policy(&mut session, config.policy);
        }
    }

    log::debug!(
        "{}/{} seed {} finished: {:?} at {now_ms} ms",
        config.difficulty,
        config.policy.name(),
        config.seed,
        session.status()
    );

    let state = session.state();
    Ok(ShiftRecord {
        difficulty: config.difficulty.to_string(),
        policy: config.policy.name().to_string(),
        seed: config.seed,
        outcome: outcome_label(session.status()).to_string(),
        survived: session.status() == RunStatus::Won,
        hours_survived: state.hour,
        final_energy: state.energy,
        ended_at_ms: session.now_ms(),
        taunts,
        attacks_repelled,
    })
}

/// Apply the policy's commands, counting door-slams on an occupied
/// chokepoint as repelled attacks.
fn apply_policy(session: &mut ShiftSession, policy: PlayerPolicy) -> usize {
    let commands = decide(policy, session.state());
    let mut repelled = 0usize;
    for command in commands {
        match command {
            PolicyCommand::SetDoor(side, closed) => {
                let occupied = session.state().stalker
                    == nightshift_game::StalkerNode::AtChokepoint(side);
                if session.state().doors.closed(side) != closed
                    && session.toggle_door(side)
                    && closed
                    && occupied
                {
                    repelled += 1;
                }
            }
            PolicyCommand::Watch(index) => {
                session.switch_viewport(index);
            }
        }
    }
    repelled
}

const fn outcome_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Active => "timeout",
        RunStatus::Won => "survived",
        RunStatus::Lost(LossCause::Attack) => "attacked",
        RunStatus::Lost(LossCause::Captured) => "captured",
    }
}

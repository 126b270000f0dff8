//! Scripted player behaviors used to probe the simulation.

use clap::ValueEnum;
use nightshift_game::{RunState, Side, StalkerNode};

/// How the scripted guard plays the night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerPolicy {
    /// Touch nothing; measures the raw pressure of a difficulty.
    Idle,
    /// Keep both doors shut until the battery runs low, then give up on them.
    Fortress,
    /// Close only the threatened door and watch the stalker on camera.
    Reactive,
}

impl PlayerPolicy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fortress => "fortress",
            Self::Reactive => "reactive",
        }
    }
}

impl std::fmt::Display for PlayerPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One command the policy wants applied this poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyCommand {
    SetDoor(Side, bool),
    Watch(usize),
}

const FORTRESS_ENERGY_FLOOR: f32 = 25.0;

/// Decide the commands for the current snapshot. Commands that match the
/// existing door state are filtered out so polls stay idempotent.
pub fn decide(policy: PlayerPolicy, state: &RunState) -> Vec<PolicyCommand> {
    let mut wanted: Vec<PolicyCommand> = Vec::new();
    match policy {
        PlayerPolicy::Idle => {}
        PlayerPolicy::Fortress => {
            let keep_closed = state.energy > FORTRESS_ENERGY_FLOOR;
            wanted.push(PolicyCommand::SetDoor(Side::Left, keep_closed));
            wanted.push(PolicyCommand::SetDoor(Side::Right, keep_closed));
        }
        PlayerPolicy::Reactive => {
            let (left, right) = match state.stalker {
                StalkerNode::AtChokepoint(Side::Left) => (true, false),
                StalkerNode::AtChokepoint(Side::Right) => (false, true),
                StalkerNode::Junction => (true, true),
                _ => (false, false),
            };
            wanted.push(PolicyCommand::SetDoor(Side::Left, left));
            wanted.push(PolicyCommand::SetDoor(Side::Right, right));
            if let StalkerNode::Approach(index) = state.stalker {
                wanted.push(PolicyCommand::Watch(index));
            }
        }
    }
    wanted
        .into_iter()
        .filter(|command| match command {
            PolicyCommand::SetDoor(side, closed) => state.doors.closed(*side) != *closed,
            PolicyCommand::Watch(index) => state.viewport != *index,
        })
        .collect()
}

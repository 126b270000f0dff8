//! Fire-and-forget cue events published to the presentation layer.
//!
//! The core never waits on a cue; the embedder maps them to audio or visual
//! effects (or drops them). Terminal outcomes double as cues so a single
//! drain loop can drive both sound and screen transitions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Everything the simulation can announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueKind {
    /// The stalker reached an unguarded chokepoint; the run is lost.
    Attack,
    /// The meter emptied and the doors dropped open.
    PowerLost,
    /// The power-out grace window expired with the run still live.
    Captured,
    /// Dawn arrived; the run is won.
    Victory,
    /// The stalker is at (or moving between) the door chokepoints.
    Taunt,
    /// Forward movement deep into the approach.
    Footsteps,
    /// First arrival at the junction outside the office.
    Proximity,
    AmbientHum,
    StaticNoise,
    DoorSlam,
    CameraSwitch,
    ShiftStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueSeverity {
    Info,
    Warning,
    Critical,
}

impl CueKind {
    #[must_use]
    pub const fn severity(self) -> CueSeverity {
        match self {
            Self::Attack | Self::Captured => CueSeverity::Critical,
            Self::PowerLost => CueSeverity::Warning,
            _ => CueSeverity::Info,
        }
    }

    /// True for the four run-ending announcements.
    #[must_use]
    pub const fn is_outcome(self) -> bool {
        matches!(
            self,
            Self::Attack | Self::PowerLost | Self::Captured | Self::Victory
        )
    }
}

/// One emitted cue, stamped with its timeline position and a per-run
/// sequence number so consumers can replay them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueEvent {
    pub at_ms: u64,
    pub seq: u32,
    pub kind: CueKind,
    pub severity: CueSeverity,
}

/// Inline buffer sized for the usual burst of cues per advance.
pub type CueBuffer = SmallVec<[CueEvent; 4]>;

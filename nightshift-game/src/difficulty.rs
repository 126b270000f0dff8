//! Difficulty profiles driving drain rates and stalker behavior.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_PROFILE_DATA: &str = include_str!("../data/difficulty.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Nightmare,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Nightmare];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Nightmare => "nightmare",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "nightmare" => Ok(Self::Nightmare),
            _ => Err(()),
        }
    }
}

/// Immutable tuning record resolved once per run at `start_run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    #[serde(default = "default_one_f32")]
    pub energy_drain_factor: f32,
    pub base_move_interval_ms: f32,
    pub move_chance: f32,
    pub aggression_growth: f32,
    pub max_aggression: f32,
    pub smart_movement: f32,
    pub door_switch_speed: f32,
    #[serde(default = "default_one_f32")]
    pub late_game_calm: f32,
    /// Fraction of decisions that enter a short hunting burst.
    #[serde(default)]
    pub hunt_chance: f32,
    /// Fraction of decisions that trigger a sudden escalation event.
    #[serde(default)]
    pub trap_chance: f32,
}

impl DifficultyProfile {
    /// Check every field against its documented bounds.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` when any field violates the documented bounds.
    pub fn validate(&self, key: Difficulty) -> Result<(), ProfileError> {
        let probabilities = [
            ("move_chance", self.move_chance),
            ("smart_movement", self.smart_movement),
            ("door_switch_speed", self.door_switch_speed),
            ("late_game_calm", self.late_game_calm),
            ("hunt_chance", self.hunt_chance),
            ("trap_chance", self.trap_chance),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::RangeViolation {
                    key,
                    field,
                    min: 0.0,
                    max: 1.0,
                    value,
                });
            }
        }
        for (field, value) in [
            ("energy_drain_factor", self.energy_drain_factor),
            ("base_move_interval_ms", self.base_move_interval_ms),
            ("max_aggression", self.max_aggression),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ProfileError::MinViolation {
                    key,
                    field,
                    min: 0.0,
                    value,
                });
            }
        }
        if self.aggression_growth < 0.0 || !self.aggression_growth.is_finite() {
            return Err(ProfileError::MinViolation {
                key,
                field: "aggression_growth",
                min: 0.0,
                value: self.aggression_growth,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("no profile authored for difficulty '{0}'")]
    UnknownDifficulty(Difficulty),
    #[error("{key}.{field} must be between {min:.2} and {max:.2} (got {value:.2})")]
    RangeViolation {
        key: Difficulty,
        field: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },
    #[error("{key}.{field} must be greater than {min:.2} (got {value:.2})")]
    MinViolation {
        key: Difficulty,
        field: &'static str,
        min: f32,
        value: f32,
    },
}

/// Authored difficulty table, validated once at load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProfileCatalog {
    #[serde(default)]
    profiles: HashMap<Difficulty, DifficultyProfile>,
}

impl ProfileCatalog {
    #[must_use]
    pub fn new(profiles: HashMap<Difficulty, DifficultyProfile>) -> Self {
        Self { profiles }
    }

    /// Parse a catalog from its JSON representation and validate every entry.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or a profile violates
    /// its bounds. Authored-content bugs surface here instead of mid-run.
    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        let catalog: Self = serde_json::from_str(data)?;
        for (key, profile) in &catalog.profiles {
            profile.validate(*key)?;
        }
        Ok(catalog)
    }

    /// Built-in catalog embedded at compile time.
    ///
    /// # Panics
    ///
    /// Panics when the embedded data is malformed; that is a build defect,
    /// not a runtime condition.
    #[must_use]
    pub fn default_catalog() -> &'static Self {
        static CATALOG: OnceLock<ProfileCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Self::from_json(DEFAULT_PROFILE_DATA).expect("valid embedded difficulty data")
        })
    }

    /// Resolve one difficulty into its immutable profile.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::UnknownDifficulty` when the difficulty has no
    /// authored entry. Rejecting beats silently defaulting here.
    pub fn resolve(&self, difficulty: Difficulty) -> Result<DifficultyProfile, ProfileError> {
        self.profiles
            .get(&difficulty)
            .cloned()
            .ok_or(ProfileError::UnknownDifficulty(difficulty))
    }

    #[must_use]
    pub const fn profiles(&self) -> &HashMap<Difficulty, DifficultyProfile> {
        &self.profiles
    }
}

fn default_one_f32() -> f32 {
    1.0
}

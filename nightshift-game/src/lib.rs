//! Nightshift Game Engine
//!
//! Platform-agnostic core game logic for the Nightshift survival-horror game.
//! This crate provides all simulation mechanics without UI or platform-specific
//! dependencies: the stalker AI, the game clock, the energy meter, and the
//! timeline kernel that binds them.

pub mod clock;
pub mod constants;
pub mod difficulty;
pub mod graph;
pub mod numbers;
pub mod power;
pub mod shift;
pub mod stalker;
pub mod state;

// Re-export commonly used types
pub use clock::{ClockOutcome, advance_hour};
pub use difficulty::{Difficulty, DifficultyProfile, ProfileCatalog, ProfileError};
pub use graph::{GraphError, LocationGraph, Side, StalkerNode};
pub use power::{apply_meter_tick, drain_per_tick};
pub use shift::{CueBuffer, CueEvent, CueKind, CueSeverity, RngBundle, ShiftSession};
pub use stalker::{StepAction, is_attack_outcome, move_chance, move_interval_ms, transition};
pub use state::{DeferredEffect, DeferredKind, DoorState, LossCause, RunState, RunStatus};

/// Trait for abstracting difficulty-catalog loading.
/// Platform-specific implementations should provide this.
pub trait ProfileSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the authored difficulty catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or parsed.
    fn load_catalog(&self) -> Result<ProfileCatalog, Self::Error>;
}

/// Built-in catalog embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProfiles;

impl ProfileSource for StaticProfiles {
    type Error = std::convert::Infallible;

    fn load_catalog(&self) -> Result<ProfileCatalog, Self::Error> {
        Ok(ProfileCatalog::default_catalog().clone())
    }
}

/// Main engine facade for launching runs.
pub struct NightEngine<P>
where
    P: ProfileSource,
{
    profiles: P,
    graph: LocationGraph,
}

impl NightEngine<StaticProfiles> {
    /// Engine over the embedded difficulty catalog and stock layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            profiles: StaticProfiles,
            graph: LocationGraph::default_layout(),
        }
    }
}

impl Default for NightEngine<StaticProfiles> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> NightEngine<P>
where
    P: ProfileSource,
{
    /// Engine with an externally supplied catalog source and location graph.
    pub const fn with_config(profiles: P, graph: LocationGraph) -> Self {
        Self { profiles, graph }
    }

    #[must_use]
    pub const fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    /// Start a fresh run.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be loaded or carries no
    /// profile for the requested difficulty. Authored-content bugs are
    /// rejected here rather than silently defaulted.
    pub fn start_run(
        &self,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<ShiftSession, anyhow::Error>
    where
        P::Error: Into<anyhow::Error>,
    {
        let catalog = self.profiles.load_catalog().map_err(Into::into)?;
        let profile = catalog.resolve(difficulty)?;
        Ok(ShiftSession::begin(
            difficulty,
            profile,
            self.graph.clone(),
            seed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, Copy, Default)]
    struct EmptyCatalog;

    impl ProfileSource for EmptyCatalog {
        type Error = std::convert::Infallible;

        fn load_catalog(&self) -> Result<ProfileCatalog, Self::Error> {
            Ok(ProfileCatalog::new(HashMap::new()))
        }
    }

    #[test]
    fn engine_starts_runs_for_every_builtin_difficulty() {
        let engine = NightEngine::new();
        for difficulty in Difficulty::ALL {
            let session = engine.start_run(difficulty, 0xC0FFEE).expect("run starts");
            assert_eq!(session.status(), RunStatus::Active);
            assert_eq!(session.state().difficulty, difficulty);
        }
    }

    #[test]
    fn engine_rejects_unknown_difficulty_instead_of_defaulting() {
        let engine = NightEngine::with_config(EmptyCatalog, LocationGraph::default_layout());
        let err = engine.start_run(Difficulty::Medium, 1).unwrap_err();
        assert!(err.to_string().contains("no profile authored"));
    }

    #[test]
    fn custom_graph_flows_into_the_session() {
        let labels = (0..6).map(|i| format!("feed-{i}")).collect();
        let graph = LocationGraph::new(labels).expect("valid layout");
        let engine = NightEngine::with_config(StaticProfiles, graph);
        let session = engine.start_run(Difficulty::Easy, 5).expect("run starts");
        assert_eq!(session.graph().node_count(), 6);
        assert_eq!(session.graph().junction_index(), 3);
    }
}

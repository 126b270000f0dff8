//! Location graph walked by the stalker.
//!
//! The topology is a short gauntlet: a home node, a forward approach chain,
//! a junction, and two door-guarded chokepoints as the final pair of nodes.
//! Indices are stable so the presentation layer can map them to camera feeds.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which of the two door chokepoints is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged position of the stalker within the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "node", content = "at")]
pub enum StalkerNode {
    #[default]
    Home,
    Approach(usize),
    Junction,
    AtChokepoint(Side),
}

impl StalkerNode {
    #[must_use]
    pub const fn is_chokepoint(self) -> bool {
        matches!(self, Self::AtChokepoint(_))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("graph needs at least {min} nodes (got {got})")]
    TooFewNodes { min: usize, got: usize },
    #[error("node {index} has an empty label")]
    EmptyLabel { index: usize },
}

/// Immutable description of the walkable locations, supplied at `start_run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationGraph {
    labels: Vec<String>,
}

/// Home, both branch nodes, the junction, and both chokepoints.
const MIN_NODES: usize = 6;

impl LocationGraph {
    /// Build a graph from ordered node labels.
    ///
    /// # Errors
    ///
    /// Returns `GraphError` when the node list is too short to contain the
    /// mandatory home/approach/junction/chokepoint structure, or when a
    /// label is blank.
    pub fn new(labels: Vec<String>) -> Result<Self, GraphError> {
        if labels.len() < MIN_NODES {
            return Err(GraphError::TooFewNodes {
                min: MIN_NODES,
                got: labels.len(),
            });
        }
        for (index, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(GraphError::EmptyLabel { index });
            }
        }
        Ok(Self { labels })
    }

    /// The stock seven-node pizzeria layout.
    #[must_use]
    pub fn default_layout() -> Self {
        Self {
            labels: [
                "Show Stage",
                "Dining Hall",
                "Kitchen",
                "Service Corridor",
                "Vestibule",
                "Left Door",
                "Right Door",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn junction_index(&self) -> usize {
        self.labels.len() - 3
    }

    #[must_use]
    pub fn chokepoint_index(&self, side: Side) -> usize {
        match side {
            Side::Left => self.labels.len() - 2,
            Side::Right => self.labels.len() - 1,
        }
    }

    /// Index past which forward motion counts as closing in on the office.
    #[must_use]
    pub fn midpoint_index(&self) -> usize {
        self.labels.len() / 2
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Flat index of a tagged node position.
    #[must_use]
    pub fn index_of(&self, node: StalkerNode) -> usize {
        match node {
            StalkerNode::Home => 0,
            StalkerNode::Approach(index) => index.clamp(1, self.junction_index() - 1),
            StalkerNode::Junction => self.junction_index(),
            StalkerNode::AtChokepoint(side) => self.chokepoint_index(side),
        }
    }

    /// Tagged node position for a flat index, clamped into the graph.
    #[must_use]
    pub fn node_at(&self, index: usize) -> StalkerNode {
        if index == 0 {
            StalkerNode::Home
        } else if index < self.junction_index() {
            StalkerNode::Approach(index)
        } else if index == self.junction_index() {
            StalkerNode::Junction
        } else if index == self.chokepoint_index(Side::Left) {
            StalkerNode::AtChokepoint(Side::Left)
        } else {
            StalkerNode::AtChokepoint(Side::Right)
        }
    }

    /// One forward step along the approach chain.
    #[must_use]
    pub fn forward_of(&self, node: StalkerNode) -> StalkerNode {
        match node {
            StalkerNode::Home => StalkerNode::Approach(1),
            StalkerNode::Approach(_) => self.node_at(self.index_of(node) + 1),
            other => other,
        }
    }

    /// Step back `steps` nodes, floored at home.
    #[must_use]
    pub fn retreat_of(&self, node: StalkerNode, steps: usize) -> StalkerNode {
        self.node_at(self.index_of(node).saturating_sub(steps))
    }
}

impl Default for LocationGraph {
    fn default() -> Self {
        Self::default_layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_expected_structure() {
        let graph = LocationGraph::default_layout();
        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.junction_index(), 4);
        assert_eq!(graph.chokepoint_index(Side::Left), 5);
        assert_eq!(graph.chokepoint_index(Side::Right), 6);
        assert_eq!(graph.midpoint_index(), 3);
        assert_eq!(graph.label(0), Some("Show Stage"));
        assert_eq!(graph.label(7), None);
    }

    #[test]
    fn rejects_degenerate_layouts() {
        let too_short = LocationGraph::new(vec![String::from("a"); 5]);
        assert_eq!(
            too_short.unwrap_err(),
            GraphError::TooFewNodes { min: 6, got: 5 }
        );

        let blank = LocationGraph::new(vec![
            String::from("a"),
            String::from("  "),
            String::from("c"),
            String::from("d"),
            String::from("e"),
            String::from("f"),
        ]);
        assert_eq!(blank.unwrap_err(), GraphError::EmptyLabel { index: 1 });
    }

    #[test]
    fn index_round_trips_through_nodes() {
        let graph = LocationGraph::default_layout();
        for index in 0..graph.node_count() {
            assert_eq!(graph.index_of(graph.node_at(index)), index);
        }
        assert_eq!(graph.node_at(5), StalkerNode::AtChokepoint(Side::Left));
        assert_eq!(graph.node_at(6), StalkerNode::AtChokepoint(Side::Right));
    }

    #[test]
    fn forward_and_retreat_respect_bounds() {
        let graph = LocationGraph::default_layout();
        assert_eq!(graph.forward_of(StalkerNode::Home), StalkerNode::Approach(1));
        assert_eq!(
            graph.forward_of(StalkerNode::Approach(3)),
            StalkerNode::Junction
        );
        assert_eq!(
            graph.retreat_of(StalkerNode::AtChokepoint(Side::Left), 2),
            StalkerNode::Approach(3)
        );
        assert_eq!(
            graph.retreat_of(StalkerNode::AtChokepoint(Side::Right), 2),
            StalkerNode::Junction
        );
        assert_eq!(graph.retreat_of(StalkerNode::Approach(1), 5), StalkerNode::Home);
    }

    #[test]
    fn bigger_layout_keeps_chokepoints_last() {
        let labels = (0..9).map(|i| format!("node-{i}")).collect();
        let graph = LocationGraph::new(labels).expect("valid layout");
        assert_eq!(graph.junction_index(), 6);
        assert_eq!(graph.chokepoint_index(Side::Left), 7);
        assert_eq!(graph.chokepoint_index(Side::Right), 8);
        assert_eq!(graph.node_at(5), StalkerNode::Approach(5));
    }
}

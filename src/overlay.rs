// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Folds agent walks into one visitation state per graph element.

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::model::{
    Agent, CanonicalGraph, EdgeId, ElementRef, NodeId, VisitationState, WalkSet, WalkStep,
};

/// Visitation of one element.
///
/// `first_step` is the sequence index at which a single agent claimed the element; it is cleared
/// once the element becomes contested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visit {
    state: VisitationState,
    first_step: Option<u64>,
}

impl Visit {
    pub fn state(&self) -> VisitationState {
        self.state
    }

    pub(crate) fn first_step(&self) -> Option<u64> {
        self.first_step
    }

    fn apply(&mut self, agent: Agent, sequence_index: u64) {
        let next = self.state.visit(agent);
        match next {
            VisitationState::VisitedBy(_) if self.state == VisitationState::Unvisited => {
                self.first_step = Some(sequence_index);
            }
            VisitationState::VisitedByBoth => self.first_step = None,
            _ => {}
        }
        self.state = next;
    }
}

/// Visitation state for every node and edge of one canonical graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overlay {
    nodes: BTreeMap<NodeId, Visit>,
    edges: BTreeMap<EdgeId, Visit>,
}

impl Overlay {
    fn unvisited(graph: &CanonicalGraph) -> Self {
        Self {
            nodes: graph
                .nodes()
                .iter()
                .map(|node| (node.id().clone(), Visit::default()))
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| (edge.id().clone(), Visit::default()))
                .collect(),
        }
    }

    pub fn node_visit(&self, node_id: &str) -> Visit {
        self.nodes.get(node_id).copied().unwrap_or_default()
    }

    pub fn edge_visit(&self, edge_id: &str) -> Visit {
        self.edges.get(edge_id).copied().unwrap_or_default()
    }

    pub fn node_state(&self, node_id: &str) -> VisitationState {
        self.node_visit(node_id).state()
    }

    pub fn edge_state(&self, edge_id: &str) -> VisitationState {
        self.edge_visit(edge_id).state()
    }

    pub fn state(&self, element: &ElementRef) -> VisitationState {
        match element {
            ElementRef::Node(node_id) => self.node_state(node_id.as_str()),
            ElementRef::Edge(edge_id) => self.edge_state(edge_id.as_str()),
        }
    }

    /// Number of elements (nodes and edges) not in [`VisitationState::Unvisited`].
    pub fn visited_count(&self) -> usize {
        self.nodes
            .values()
            .chain(self.edges.values())
            .filter(|visit| visit.state != VisitationState::Unvisited)
            .count()
    }

    fn visit_mut(&mut self, element: &ElementRef) -> Option<&mut Visit> {
        match element {
            ElementRef::Node(node_id) => self.nodes.get_mut(node_id.as_str()),
            ElementRef::Edge(edge_id) => self.edges.get_mut(edge_id.as_str()),
        }
    }
}

/// Replays every agent's steps over the graph's elements.
///
/// Steps must be strictly increasing in `sequence_index` per agent and must reference elements of
/// `graph`. The fold is deterministic: identical inputs always produce identical overlays.
pub fn resolve_overlay(graph: &CanonicalGraph, walks: &WalkSet) -> Result<Overlay, ValidationError> {
    let mut overlay = Overlay::unvisited(graph);

    for agent in Agent::ALL {
        check_order(agent, walks.steps(agent))?;
    }
    for agent in Agent::ALL {
        replay_agent(&mut overlay, agent, walks.steps(agent))?;
    }

    tracing::trace!(visited = overlay.visited_count(), "resolved walk overlay");
    Ok(overlay)
}

fn check_order(agent: Agent, steps: &[WalkStep]) -> Result<(), ValidationError> {
    for pair in steps.windows(2) {
        let (previous, sequence_index) = (pair[0].sequence_index(), pair[1].sequence_index());
        if sequence_index <= previous {
            return Err(ValidationError::UnorderedWalk {
                agent,
                previous,
                sequence_index,
            });
        }
    }
    Ok(())
}

fn replay_agent(
    overlay: &mut Overlay,
    agent: Agent,
    steps: &[WalkStep],
) -> Result<(), ValidationError> {
    for step in steps {
        let sequence_index = step.sequence_index();
        let Some(visit) = overlay.visit_mut(step.target()) else {
            return Err(ValidationError::DanglingWalkReference {
                agent,
                sequence_index,
                target: step.target().clone(),
            });
        };
        visit.apply(agent, sequence_index);
    }

    Ok(())
}

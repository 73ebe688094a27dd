// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::{EdgeId, NodeId};

/// The walking agents. The set is closed: the graph service annotates at most two walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Agent {
    AgentA,
    AgentB,
}

impl Agent {
    /// Replay order of the overlay fold.
    pub const ALL: [Self; 2] = [Self::AgentA, Self::AgentB];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AgentA => "agentA",
            Self::AgentB => "agentB",
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to one graph element. Node and edge ids are separate namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementRef {
    Node(NodeId),
    Edge(EdgeId),
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node_id) => write!(f, "node {node_id}"),
            Self::Edge(edge_id) => write!(f, "edge {edge_id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep {
    agent: Agent,
    sequence_index: u64,
    target: ElementRef,
}

impl WalkStep {
    pub fn new(agent: Agent, sequence_index: u64, target: ElementRef) -> Self {
        Self {
            agent,
            sequence_index,
            target,
        }
    }

    pub fn agent(&self) -> Agent {
        self.agent
    }

    pub fn sequence_index(&self) -> u64 {
        self.sequence_index
    }

    pub fn target(&self) -> &ElementRef {
        &self.target
    }
}

/// Decoded walk steps for every agent, each list in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkSet {
    agent_a: Vec<WalkStep>,
    agent_b: Vec<WalkStep>,
}

impl WalkSet {
    pub fn new(agent_a: Vec<WalkStep>, agent_b: Vec<WalkStep>) -> Self {
        Self { agent_a, agent_b }
    }

    pub fn steps(&self, agent: Agent) -> &[WalkStep] {
        match agent {
            Agent::AgentA => &self.agent_a,
            Agent::AgentB => &self.agent_b,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.agent_a.is_empty() && self.agent_b.is_empty()
    }
}

/// Derived per-element classification of a walk overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitationState {
    #[default]
    Unvisited,
    VisitedBy(Agent),
    VisitedByBoth,
}

impl VisitationState {
    /// Applies one visit by `agent`.
    ///
    /// Revisits by the same agent are idempotent; a visit by the other agent promotes to
    /// [`VisitationState::VisitedByBoth`], which is absorbing.
    pub fn visit(self, agent: Agent) -> Self {
        match self {
            Self::Unvisited => Self::VisitedBy(agent),
            Self::VisitedBy(current) if current == agent => self,
            Self::VisitedBy(_) | Self::VisitedByBoth => Self::VisitedByBoth,
        }
    }
}

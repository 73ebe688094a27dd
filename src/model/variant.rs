// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Closed variant tags selecting the visual treatment of each element.
//!
//! A renderer maps every tag to one drawing routine; there is no open registry keyed by the wire
//! `type` string.

use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

use super::walk::{Agent, VisitationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum NodeVariant {
    Contested,
    AgentA,
    AgentB,
    Label,
    AgentAOrigin,
    AgentBOrigin,
    Default,
}

impl NodeVariant {
    /// Base treatment for a node no agent visited, keyed by the node kind.
    pub fn base_for_kind(kind: &str) -> Self {
        match kind {
            "labelNode" => Self::Label,
            "adaNode" => Self::AgentAOrigin,
            "bobNode" => Self::AgentBOrigin,
            _ => Self::Default,
        }
    }

    pub fn resolve(state: VisitationState, kind: &str) -> Self {
        match state {
            VisitationState::VisitedByBoth => Self::Contested,
            VisitationState::VisitedBy(Agent::AgentA) => Self::AgentA,
            VisitationState::VisitedBy(Agent::AgentB) => Self::AgentB,
            VisitationState::Unvisited => Self::base_for_kind(kind),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contested => "contested",
            Self::AgentA => "agent-a",
            Self::AgentB => "agent-b",
            Self::Label => "label",
            Self::AgentAOrigin => "agent-a-origin",
            Self::AgentBOrigin => "agent-b-origin",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for NodeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum EdgeVariant {
    #[serde(rename = "contested-edge")]
    Contested,
    #[serde(rename = "agent-a-edge")]
    AgentA,
    #[serde(rename = "agent-b-edge")]
    AgentB,
    #[serde(rename = "default-edge")]
    Default,
}

impl EdgeVariant {
    pub fn resolve(state: VisitationState) -> Self {
        match state {
            VisitationState::VisitedByBoth => Self::Contested,
            VisitationState::VisitedBy(Agent::AgentA) => Self::AgentA,
            VisitationState::VisitedBy(Agent::AgentB) => Self::AgentB,
            VisitationState::Unvisited => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contested => "contested-edge",
            Self::AgentA => "agent-a-edge",
            Self::AgentB => "agent-b-edge",
            Self::Default => "default-edge",
        }
    }
}

impl fmt::Display for EdgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

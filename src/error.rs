// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Validation failures of the normalization pipeline.
//!
//! Every failure aborts the whole invocation; there is no partial model.

use std::fmt;

use crate::model::{Agent, EdgeId, ElementRef, NodeId};

/// The closed classification of [`ValidationError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    MissingNodeId,
    MissingEdgeField,
    DuplicateId,
    MalformedWalkStep,
    UnorderedWalk,
    DanglingWalkReference,
    DanglingEdgeEndpoint,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingNodeId => "MissingNodeId",
            Self::MissingEdgeField => "MissingEdgeField",
            Self::DuplicateId => "DuplicateId",
            Self::MalformedWalkStep => "MalformedWalkStep",
            Self::UnorderedWalk => "UnorderedWalk",
            Self::DanglingWalkReference => "DanglingWalkReference",
            Self::DanglingEdgeEndpoint => "DanglingEdgeEndpoint",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Node,
    Edge,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Node => "node",
            Self::Edge => "edge",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeField {
    Id,
    Source,
    Target,
}

impl fmt::Display for EdgeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Id => "id",
            Self::Source => "source",
            Self::Target => "target",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeEndpoint {
    Source,
    Target,
}

impl fmt::Display for EdgeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Target => "target",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("node #{index} has no id")]
    MissingNodeId { index: usize },

    #[error("edge #{index} is missing `{field}`")]
    MissingEdgeField { index: usize, field: EdgeField },

    #[error("duplicate {element} id {id:?} at #{index} (first seen at #{first_index})")]
    DuplicateId {
        element: ElementKind,
        id: String,
        first_index: usize,
        index: usize,
    },

    #[error("{agent} step #{position} is malformed: {reason}")]
    MalformedWalkStep {
        agent: Agent,
        position: usize,
        reason: &'static str,
    },

    #[error("{agent} walk is not ordered: sequence index {sequence_index} follows {previous}")]
    UnorderedWalk {
        agent: Agent,
        previous: u64,
        sequence_index: u64,
    },

    #[error("{agent} step {sequence_index} references unknown {target}")]
    DanglingWalkReference {
        agent: Agent,
        sequence_index: u64,
        target: ElementRef,
    },

    #[error("edge {edge_id} {endpoint} references unknown node {node_id}")]
    DanglingEdgeEndpoint {
        edge_id: EdgeId,
        endpoint: EdgeEndpoint,
        node_id: NodeId,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingNodeId { .. } => ValidationErrorKind::MissingNodeId,
            Self::MissingEdgeField { .. } => ValidationErrorKind::MissingEdgeField,
            Self::DuplicateId { .. } => ValidationErrorKind::DuplicateId,
            Self::MalformedWalkStep { .. } => ValidationErrorKind::MalformedWalkStep,
            Self::UnorderedWalk { .. } => ValidationErrorKind::UnorderedWalk,
            Self::DanglingWalkReference { .. } => ValidationErrorKind::DanglingWalkReference,
            Self::DanglingEdgeEndpoint { .. } => ValidationErrorKind::DanglingEdgeEndpoint,
        }
    }
}

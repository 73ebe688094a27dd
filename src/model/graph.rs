// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Serialize;
use smol_str::SmolStr;

use super::ids::{EdgeId, NodeId};

/// Kind assigned to nodes and edges whose wire `type` is absent or empty.
pub const DEFAULT_KIND: &str = "default";

/// A canvas position. Both components are always finite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, JsonSchema)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    id: NodeId,
    kind: SmolStr,
    position: Position,
    label: String,
}

impl GraphNode {
    pub fn new(id: NodeId, kind: impl Into<SmolStr>, position: Position) -> Self {
        let label = id.as_str().to_owned();
        Self {
            id,
            kind: kind.into(),
            position,
            label,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    kind: SmolStr,
}

impl GraphEdge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, kind: impl Into<SmolStr>) -> Self {
        Self {
            id,
            source,
            target,
            kind: kind.into(),
        }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Normalized node/edge records of one response, in wire order.
///
/// Ids are unique within each collection. Edge endpoints are *not* guaranteed to resolve; that
/// check belongs to the model builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanonicalGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    node_index: HashMap<NodeId, usize>,
    edge_index: HashMap<EdgeId, usize>,
}

impl CanonicalGraph {
    /// Assembles a graph from records whose ids are already known to be unique.
    pub(crate) fn from_unique(
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
        node_index: HashMap<NodeId, usize>,
        edge_index: HashMap<EdgeId, usize>,
    ) -> Self {
        debug_assert_eq!(nodes.len(), node_index.len());
        debug_assert_eq!(edges.len(), edge_index.len());
        Self {
            nodes,
            edges,
            node_index,
            edge_index,
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node(&self, node_id: &str) -> Option<&GraphNode> {
        self.node_index.get(node_id).map(|&idx| &self.nodes[idx])
    }

    pub fn edge(&self, edge_id: &str) -> Option<&GraphEdge> {
        self.edge_index.get(edge_id).map(|&idx| &self.edges[idx])
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node_index.contains_key(node_id)
    }

    pub fn contains_edge(&self, edge_id: &str) -> bool {
        self.edge_index.contains_key(edge_id)
    }
}

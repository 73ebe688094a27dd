// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::Serialize;

use super::graph::Position;
use super::ids::{EdgeId, NodeId};
use super::variant::{EdgeVariant, NodeVariant};

/// Render-ready output: every element carries its resolved variant tag, in wire order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationModel {
    pub nodes: Vec<VisualizationNode>,
    pub edges: Vec<VisualizationEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationNode {
    #[schemars(with = "String")]
    pub id: NodeId,
    pub variant_tag: NodeVariant,
    pub position: Position,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationEdge {
    #[schemars(with = "String")]
    pub id: EdgeId,
    #[schemars(with = "String")]
    pub source: NodeId,
    #[schemars(with = "String")]
    pub target: NodeId,
    pub variant_tag: EdgeVariant,
}

impl VisualizationModel {
    pub fn node(&self, node_id: &str) -> Option<&VisualizationNode> {
        self.nodes.iter().find(|node| node.id.as_str() == node_id)
    }

    pub fn edge(&self, edge_id: &str) -> Option<&VisualizationEdge> {
        self.edges.iter().find(|edge| edge.id.as_str() == edge_id)
    }
}

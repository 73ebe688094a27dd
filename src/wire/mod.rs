// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire schema of the random-graph response, as produced by the graph service.
//!
//! These types mirror the protobuf-JSON encoding: every field may be absent, zero values are
//! usually omitted, and 64-bit integers may arrive as decimal strings. Defaults are applied by
//! [`crate::decode`], never here.

mod wide_int;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use wide_int::{WideInt, WideIntError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RandomGraphResponse {
    #[serde(default)]
    pub nodes: Vec<WireNode>,
    #[serde(default)]
    pub edges: Vec<WireEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walks: Option<WireWalks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<WirePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<WireNodeData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WirePosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<WideInt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<WideInt>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireNodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Per-agent walk annotations. A missing agent list means the agent did not walk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireWalks {
    #[serde(default)]
    pub agent_a: Vec<WireStep>,
    #[serde(default)]
    pub agent_b: Vec<WireStep>,
}

/// One walk step. `sequenceIndex` defaults to zero because protobuf-JSON omits zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireStep {
    #[serde(default)]
    pub sequence_index: WideInt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_id: Option<String>,
}

impl WireStep {
    pub fn node(sequence_index: u64, node_id: impl Into<String>) -> Self {
        Self {
            sequence_index: WideInt::from(sequence_index),
            node_id: Some(node_id.into()),
            edge_id: None,
        }
    }

    pub fn edge(sequence_index: u64, edge_id: impl Into<String>) -> Self {
        Self {
            sequence_index: WideInt::from(sequence_index),
            node_id: None,
            edge_id: Some(edge_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomGraphResponse, WideInt};

    #[test]
    fn decodes_protobuf_json_shape() {
        let response: RandomGraphResponse = serde_json::from_str(
            r#"{
  "nodes": [
    { "id": "0", "type": "adaNode", "position": { "x": "-300", "y": 12 } },
    { "id": "1", "data": { "label": "One" } }
  ],
  "edges": [{ "id": "e-0", "source": "0", "target": "1", "type": "unwalkedEdge" }],
  "walks": { "agentA": [{ "nodeId": "0" }, { "sequenceIndex": "1", "edgeId": "e-0" }] }
}"#,
        )
        .expect("response");

        assert_eq!(response.nodes.len(), 2);
        assert_eq!(response.nodes[0].kind.as_deref(), Some("adaNode"));
        let position = response.nodes[0].position.as_ref().expect("position");
        assert_eq!(position.x, Some(WideInt::Signed(-300)));
        assert_eq!(position.y, Some(WideInt::Signed(12)));
        assert_eq!(
            response.nodes[1].data.as_ref().and_then(|data| data.label.as_deref()),
            Some("One")
        );

        let walks = response.walks.expect("walks");
        assert_eq!(walks.agent_a.len(), 2);
        assert_eq!(walks.agent_a[0].sequence_index, WideInt::ZERO);
        assert_eq!(walks.agent_a[1].edge_id.as_deref(), Some("e-0"));
        assert!(walks.agent_b.is_empty());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let response: RandomGraphResponse = serde_json::from_str("{}").expect("response");
        assert!(response.nodes.is_empty());
        assert!(response.edges.is_empty());
        assert!(response.walks.is_none());
    }
}

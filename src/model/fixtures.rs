// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::wire::{
    RandomGraphResponse, WideInt, WireEdge, WireNode, WireNodeData, WirePosition, WireStep,
    WireWalks,
};

pub(crate) fn wire_node(id: &str) -> WireNode {
    WireNode {
        id: Some(id.to_owned()),
        ..WireNode::default()
    }
}

pub(crate) fn wire_node_at(id: &str, kind: &str, x: i64, y: i64) -> WireNode {
    WireNode {
        id: Some(id.to_owned()),
        kind: Some(kind.to_owned()),
        position: Some(WirePosition {
            x: Some(WideInt::Signed(x)),
            y: Some(WideInt::Signed(y)),
        }),
        data: Some(WireNodeData {
            label: Some(format!("Node {id}")),
        }),
    }
}

pub(crate) fn wire_edge(id: &str, source: &str, target: &str) -> WireEdge {
    WireEdge {
        id: Some(id.to_owned()),
        source: Some(source.to_owned()),
        target: Some(target.to_owned()),
        kind: None,
    }
}

pub(crate) fn graph_response(nodes: &[&str], edges: &[(&str, &str, &str)]) -> RandomGraphResponse {
    RandomGraphResponse {
        nodes: nodes.iter().map(|id| wire_node(id)).collect(),
        edges: edges
            .iter()
            .map(|(id, source, target)| wire_edge(id, source, target))
            .collect(),
        walks: None,
    }
}

pub(crate) fn with_walks(
    mut response: RandomGraphResponse,
    agent_a: Vec<WireStep>,
    agent_b: Vec<WireStep>,
) -> RandomGraphResponse {
    response.walks = Some(WireWalks { agent_a, agent_b });
    response
}

/// Three nodes, one edge, agent A walks `n1 -> e1 -> n2`, agent B stays home.
pub(crate) fn single_agent_walk() -> RandomGraphResponse {
    with_walks(
        graph_response(&["n1", "n2", "n3"], &[("e1", "n1", "n2")]),
        vec![
            WireStep::node(0, "n1"),
            WireStep::edge(1, "e1"),
            WireStep::node(2, "n2"),
        ],
        Vec::new(),
    )
}

/// A small ring where both agents cross at `c`, laid out the way the graph service emits it.
pub(crate) fn crossing_walks() -> RandomGraphResponse {
    let response = RandomGraphResponse {
        nodes: vec![
            wire_node_at("a", "adaNode", 300, 0),
            wire_node_at("b", "labelNode", 0, 300),
            wire_node_at("c", "labelNode", -300, 0),
            wire_node_at("d", "bobNode", 0, -300),
        ],
        edges: vec![
            wire_edge("e-0", "a", "b"),
            wire_edge("e-1", "b", "c"),
            wire_edge("e-2", "c", "d"),
            wire_edge("e-3", "a", "d"),
        ],
        walks: None,
    };
    with_walks(
        response,
        vec![
            WireStep::node(0, "a"),
            WireStep::edge(1, "e-0"),
            WireStep::node(2, "b"),
            WireStep::edge(3, "e-1"),
            WireStep::node(4, "c"),
        ],
        vec![
            WireStep::node(0, "d"),
            WireStep::edge(1, "e-2"),
            WireStep::node(2, "c"),
        ],
    )
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-record normalization of the wire graph and its walk annotations.
//!
//! Decoding is all-or-nothing: the first invalid record aborts the response. Referential checks
//! (edge endpoints, walk targets) happen later, once both collections are known.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::coerce::coerce_position;
use crate::error::{EdgeField, ElementKind, ValidationError};
use crate::model::{
    Agent, CanonicalGraph, EdgeId, ElementRef, GraphEdge, GraphNode, Id, NodeId, WalkSet, WalkStep,
    DEFAULT_KIND,
};
use crate::wire::{RandomGraphResponse, WireEdge, WireNode, WireStep, WireWalks};

/// Normalizes the node and edge collections, preserving wire order.
pub fn decode_graph(response: &RandomGraphResponse) -> Result<CanonicalGraph, ValidationError> {
    let mut nodes = Vec::with_capacity(response.nodes.len());
    let mut node_index = HashMap::with_capacity(response.nodes.len());
    for (index, wire) in response.nodes.iter().enumerate() {
        let node = decode_node(index, wire)?;
        claim_id(&mut node_index, node.id(), ElementKind::Node, index)?;
        nodes.push(node);
    }

    let mut edges = Vec::with_capacity(response.edges.len());
    let mut edge_index = HashMap::with_capacity(response.edges.len());
    for (index, wire) in response.edges.iter().enumerate() {
        let edge = decode_edge(index, wire)?;
        claim_id(&mut edge_index, edge.id(), ElementKind::Edge, index)?;
        edges.push(edge);
    }

    tracing::trace!(nodes = nodes.len(), edges = edges.len(), "decoded graph");
    Ok(CanonicalGraph::from_unique(nodes, edges, node_index, edge_index))
}

/// Converts the per-agent wire steps. Ordering is checked by the overlay resolver.
pub fn decode_walks(walks: Option<&WireWalks>) -> Result<WalkSet, ValidationError> {
    let Some(walks) = walks else {
        return Ok(WalkSet::default());
    };

    let agent_a = decode_agent_steps(Agent::AgentA, &walks.agent_a)?;
    let agent_b = decode_agent_steps(Agent::AgentB, &walks.agent_b)?;
    Ok(WalkSet::new(agent_a, agent_b))
}

fn decode_node(index: usize, wire: &WireNode) -> Result<GraphNode, ValidationError> {
    let id: NodeId =
        required_id(wire.id.as_deref()).ok_or(ValidationError::MissingNodeId { index })?;
    let kind = non_empty(wire.kind.as_deref()).unwrap_or(DEFAULT_KIND);
    let position = coerce_position(wire.position.as_ref());

    let node = GraphNode::new(id, kind, position);
    match non_empty(wire.data.as_ref().and_then(|data| data.label.as_deref())) {
        Some(label) => Ok(node.with_label(label)),
        None => Ok(node),
    }
}

fn decode_edge(index: usize, wire: &WireEdge) -> Result<GraphEdge, ValidationError> {
    let missing = |field| ValidationError::MissingEdgeField { index, field };

    let id: EdgeId = required_id(wire.id.as_deref()).ok_or_else(|| missing(EdgeField::Id))?;
    let source: NodeId =
        required_id(wire.source.as_deref()).ok_or_else(|| missing(EdgeField::Source))?;
    let target: NodeId =
        required_id(wire.target.as_deref()).ok_or_else(|| missing(EdgeField::Target))?;
    let kind = non_empty(wire.kind.as_deref()).unwrap_or(DEFAULT_KIND);

    Ok(GraphEdge::new(id, source, target, kind))
}

fn decode_agent_steps(agent: Agent, steps: &[WireStep]) -> Result<Vec<WalkStep>, ValidationError> {
    steps
        .iter()
        .enumerate()
        .map(|(position, wire)| decode_step(agent, position, wire))
        .collect()
}

fn decode_step(agent: Agent, position: usize, wire: &WireStep) -> Result<WalkStep, ValidationError> {
    let malformed = |reason| ValidationError::MalformedWalkStep {
        agent,
        position,
        reason,
    };

    if wire.sequence_index.is_negative() {
        return Err(malformed("sequence index is negative"));
    }
    let sequence_index = wire
        .sequence_index
        .to_u64()
        .ok_or_else(|| malformed("sequence index exceeds 64 bits"))?;

    let node_id: Option<NodeId> = required_id(wire.node_id.as_deref());
    let edge_id: Option<EdgeId> = required_id(wire.edge_id.as_deref());
    let target = match (node_id, edge_id) {
        (Some(node_id), None) => ElementRef::Node(node_id),
        (None, Some(edge_id)) => ElementRef::Edge(edge_id),
        (Some(_), Some(_)) => return Err(malformed("step sets both nodeId and edgeId")),
        (None, None) => return Err(malformed("step sets neither nodeId nor edgeId")),
    };

    Ok(WalkStep::new(agent, sequence_index, target))
}

/// Proto3 cannot tell an empty string from an absent one, so both count as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn required_id<T>(value: Option<&str>) -> Option<Id<T>> {
    non_empty(value).and_then(|value| value.parse().ok())
}

fn claim_id<T>(
    seen: &mut HashMap<Id<T>, usize>,
    id: &Id<T>,
    element: ElementKind,
    index: usize,
) -> Result<(), ValidationError>
where
    Id<T>: Hash + Eq + Clone,
{
    match seen.entry(id.clone()) {
        Entry::Occupied(first) => Err(ValidationError::DuplicateId {
            element,
            id: id.to_string(),
            first_index: *first.get(),
            index,
        }),
        Entry::Vacant(slot) => {
            slot.insert(index);
            Ok(())
        }
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Combines the canonical graph and its overlay into the render-ready model.

use crate::error::{EdgeEndpoint, ValidationError};
use crate::model::{
    CanonicalGraph, EdgeVariant, GraphEdge, NodeVariant, VisualizationEdge, VisualizationModel,
    VisualizationNode,
};
use crate::overlay::Overlay;

/// Builds the visualization model.
///
/// Every edge endpoint must resolve to a node of `graph`; otherwise the whole build fails with
/// [`ValidationError::DanglingEdgeEndpoint`]. Output order is wire order, never re-sorted, so
/// re-rendering the same data diffs to nothing.
pub fn build_model(
    graph: &CanonicalGraph,
    overlay: &Overlay,
) -> Result<VisualizationModel, ValidationError> {
    for edge in graph.edges() {
        check_endpoints(graph, edge)?;
    }

    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            let visit = overlay.node_visit(node.id().as_str());
            let variant_tag = NodeVariant::resolve(visit.state(), node.kind());
            tracing::trace!(
                node = %node.id(),
                variant = %variant_tag,
                first_step = ?visit.first_step(),
                "tagged node"
            );
            VisualizationNode {
                id: node.id().clone(),
                variant_tag,
                position: node.position(),
                label: node.label().to_owned(),
            }
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| {
            let visit = overlay.edge_visit(edge.id().as_str());
            let variant_tag = EdgeVariant::resolve(visit.state());
            tracing::trace!(
                edge = %edge.id(),
                variant = %variant_tag,
                first_step = ?visit.first_step(),
                "tagged edge"
            );
            VisualizationEdge {
                id: edge.id().clone(),
                source: edge.source().clone(),
                target: edge.target().clone(),
                variant_tag,
            }
        })
        .collect();

    Ok(VisualizationModel { nodes, edges })
}

fn check_endpoints(graph: &CanonicalGraph, edge: &GraphEdge) -> Result<(), ValidationError> {
    for (endpoint, node_id) in [
        (EdgeEndpoint::Source, edge.source()),
        (EdgeEndpoint::Target, edge.target()),
    ] {
        if !graph.contains_node(node_id.as_str()) {
            return Err(ValidationError::DanglingEdgeEndpoint {
                edge_id: edge.id().clone(),
                endpoint,
                node_id: node_id.clone(),
            });
        }
    }
    Ok(())
}

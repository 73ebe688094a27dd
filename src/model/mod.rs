// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canonical graph, walk and visualization types.
//!
//! The canonical graph is the referential ground truth for one response; the visualization model
//! is what the renderer consumes.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod variant;
pub mod visual;
pub mod walk;

pub use graph::{CanonicalGraph, GraphEdge, GraphNode, Position, DEFAULT_KIND};
pub use ids::{EdgeId, Id, IdError, NodeId};
pub use variant::{EdgeVariant, NodeVariant};
pub use visual::{VisualizationEdge, VisualizationModel, VisualizationNode};
pub use walk::{Agent, ElementRef, VisitationState, WalkSet, WalkStep};

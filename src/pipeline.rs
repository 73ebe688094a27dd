// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end normalization: wire response in, visualization model out.
//!
//! Every stage is a pure function of its input, so calls may run in parallel and results may be
//! memoized by the caller.

use rayon::prelude::*;

use crate::build::build_model;
use crate::decode::{decode_graph, decode_walks};
use crate::error::ValidationError;
use crate::model::VisualizationModel;
use crate::overlay::resolve_overlay;
use crate::wire::RandomGraphResponse;

/// Runs decode, overlay resolution and model building for one response.
///
/// The first validation failure aborts the invocation; no partial model is returned.
pub fn normalize_response(
    response: &RandomGraphResponse,
) -> Result<VisualizationModel, ValidationError> {
    let _span = tracing::debug_span!(
        "normalize_response",
        nodes = response.nodes.len(),
        edges = response.edges.len()
    )
    .entered();

    let result = decode_graph(response).and_then(|graph| {
        let walks = decode_walks(response.walks.as_ref())?;
        let overlay = resolve_overlay(&graph, &walks)?;
        build_model(&graph, &overlay)
    });

    match &result {
        Ok(model) => tracing::debug!(
            nodes = model.nodes.len(),
            edges = model.edges.len(),
            "normalized graph response"
        ),
        Err(err) => tracing::debug!(kind = %err.kind(), error = %err, "rejected graph response"),
    }
    result
}

/// Normalizes independent responses in parallel. Results keep the input order.
pub fn normalize_batch(
    responses: &[RandomGraphResponse],
) -> Vec<Result<VisualizationModel, ValidationError>> {
    responses.par_iter().map(normalize_response).collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_batch, normalize_response};
    use crate::error::ValidationErrorKind;
    use crate::model::fixtures::{crossing_walks, graph_response, single_agent_walk, with_walks};
    use crate::wire::WireStep;

    #[test]
    fn normalize_is_byte_for_byte_idempotent() {
        let response = crossing_walks();

        let first = normalize_response(&response).expect("first");
        let second = normalize_response(&response).expect("second");
        assert_eq!(
            serde_json::to_vec(&first).expect("json"),
            serde_json::to_vec(&second).expect("json")
        );
    }

    #[test]
    fn first_failing_stage_wins() {
        // Duplicate ids are reported before the dangling walk reference is ever looked at.
        let response = with_walks(
            graph_response(&["n1", "n1"], &[]),
            vec![WireStep::edge(0, "missing")],
            Vec::new(),
        );

        let err = normalize_response(&response).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn batch_keeps_input_order_and_isolates_failures() {
        let broken = graph_response(&["n1"], &[("e1", "n1", "ghost")]);
        let responses = vec![single_agent_walk(), broken, crossing_walks()];

        let results = normalize_batch(&responses);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().expect("first").nodes.len(), 3);
        assert_eq!(
            results[1].as_ref().unwrap_err().kind(),
            ValidationErrorKind::DanglingEdgeEndpoint
        );
        assert_eq!(results[2].as_ref().expect("third").nodes.len(), 4);
    }
}

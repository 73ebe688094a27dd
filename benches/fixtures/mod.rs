// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use walkview::wire::{
    RandomGraphResponse, WideInt, WireEdge, WireNode, WirePosition, WireStep, WireWalks,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    RingSmall,
    RingMedium,
    RingLarge,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::RingSmall => "ring_small",
            Self::RingMedium => "ring_medium",
            Self::RingLarge => "ring_large",
        }
    }

    fn node_count(self) -> usize {
        match self {
            Self::RingSmall => 50,
            Self::RingMedium => 1_000,
            Self::RingLarge => 20_000,
        }
    }
}

/// A ring lattice with `k = 4` neighbours, positioned on a circle, with two walks of
/// `n / 4` steps starting on opposite sides so they overlap in the middle.
pub fn fixture(case: Case) -> RandomGraphResponse {
    let n = case.node_count();
    let radius = 300.0_f64;

    let nodes = (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64;
            WireNode {
                id: Some(i.to_string()),
                kind: Some("labelNode".to_owned()),
                position: Some(WirePosition {
                    x: Some(WideInt::Signed((radius * angle.cos()) as i64)),
                    y: Some(WideInt::Signed((radius * angle.sin()) as i64)),
                }),
                data: None,
            }
        })
        .collect();

    let mut edges = Vec::with_capacity(n * 2);
    for i in 0..n {
        for hop in 1..=2 {
            let j = (i + hop) % n;
            edges.push(WireEdge {
                id: Some(format!("e-{}", edges.len())),
                source: Some(i.to_string()),
                target: Some(j.to_string()),
                kind: Some("unwalkedEdge".to_owned()),
            });
        }
    }

    let walk_len = n / 4;
    RandomGraphResponse {
        nodes,
        edges,
        walks: Some(WireWalks {
            agent_a: walk(n, 0, walk_len),
            agent_b: walk(n, n / 8, walk_len),
        }),
    }
}

/// Steps forward along the `hop = 1` edges, which have id `e-{2 * node}`.
fn walk(n: usize, start: usize, len: usize) -> Vec<WireStep> {
    let mut steps = Vec::with_capacity(len * 2 + 1);
    let mut node = start;
    steps.push(WireStep::node(0, node.to_string()));
    for _ in 0..len {
        let seq = steps.len() as u64;
        steps.push(WireStep::edge(seq, format!("e-{}", node * 2)));
        node = (node + 1) % n;
        steps.push(WireStep::node(seq + 1, node.to_string()));
    }
    steps
}

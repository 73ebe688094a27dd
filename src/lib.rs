// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Walkview: random-graph response normalization and walk-overlay resolution.
//!
//! The pipeline is `wire -> decode -> overlay -> build`: a decoded [`wire::RandomGraphResponse`]
//! becomes a [`model::VisualizationModel`] whose nodes and edges carry closed variant tags
//! describing which agent walked them.

pub mod build;
pub mod cache;
pub mod coerce;
pub mod decode;
pub mod error;
pub mod model;
pub mod overlay;
pub mod pipeline;
pub mod query;
pub mod wire;

pub use error::{ValidationError, ValidationErrorKind};
pub use pipeline::{normalize_batch, normalize_response};

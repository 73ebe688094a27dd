// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire coordinates to canvas coordinates.

use crate::model::Position;
use crate::wire::{WideInt, WirePosition};

/// Coerces an optional wire position into finite canvas coordinates.
///
/// An absent position, or an absent component, is `0.0`. Integers wider than an `f64` mantissa
/// lose precision and magnitudes beyond `f64::MAX` saturate; both are acceptable for display
/// coordinates, so this never fails.
pub fn coerce_position(position: Option<&WirePosition>) -> Position {
    match position {
        Some(position) => Position::new(
            coerce_coordinate(position.x.as_ref()),
            coerce_coordinate(position.y.as_ref()),
        ),
        None => Position::ORIGIN,
    }
}

pub fn coerce_coordinate(value: Option<&WideInt>) -> f64 {
    value.map_or(0.0, WideInt::to_f64_lossy)
}

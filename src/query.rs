// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Query-parameter surface of the graph page.
//!
//! The two seeds only select which random graph the service generates. They are validated here,
//! before any request is made; the normalization pipeline never sees them.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphQuery {
    pub seed1: u64,
    pub seed2: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("missing query parameter `{0}`")]
    Missing(&'static str),
    #[error("query parameter `{0}` given more than once")]
    Duplicate(&'static str),
    #[error("query parameter `{name}` is not an unsigned 64-bit integer: {value:?}")]
    InvalidSeed {
        name: &'static str,
        value: String,
        #[source]
        cause: ParseIntError,
    },
}

impl GraphQuery {
    pub fn new(seed1: u64, seed2: u64) -> Self {
        Self { seed1, seed2 }
    }

    /// Parses `seed1=..&seed2=..`, with or without a leading `?`. Unknown keys are ignored.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut seed1 = None;
        let mut seed2 = None;

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (name, slot) = match key {
                "seed1" => ("seed1", &mut seed1),
                "seed2" => ("seed2", &mut seed2),
                _ => continue,
            };
            if slot.is_some() {
                return Err(QueryError::Duplicate(name));
            }
            let seed = value.parse::<u64>().map_err(|cause| QueryError::InvalidSeed {
                name,
                value: value.to_owned(),
                cause,
            })?;
            *slot = Some(seed);
        }

        Ok(Self {
            seed1: seed1.ok_or(QueryError::Missing("seed1"))?,
            seed2: seed2.ok_or(QueryError::Missing("seed2"))?,
        })
    }
}

impl FromStr for GraphQuery {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GraphQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seed1={}&seed2={}", self.seed1, self.seed2)
    }
}

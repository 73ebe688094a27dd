// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Memoization for the data-fetching side.
//!
//! Freshness is an explicit [`CacheConfig`] value handed to whoever fetches graphs; the
//! normalization pipeline itself is cache-agnostic. Timestamps are passed in so expiry is
//! deterministic.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::model::VisualizationModel;

/// Staleness settings. On the wire both durations are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheConfig {
    #[serde(with = "millis")]
    pub stale_time: Duration,
    #[serde(with = "millis")]
    pub cache_time: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::ZERO,
            cache_time: Duration::from_secs(5 * 60),
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Younger than `stale_time`; use without refetching.
    Fresh(Arc<VisualizationModel>),
    /// Younger than `cache_time`; usable, but the caller should revalidate.
    Stale(Arc<VisualizationModel>),
    Miss,
}

#[derive(Debug, Clone)]
struct Entry {
    model: Arc<VisualizationModel>,
    stored_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ModelCache<K> {
    config: CacheConfig,
    entries: HashMap<K, Entry>,
}

impl<K: Hash + Eq> ModelCache<K> {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classifies the entry for `key` at `now`, dropping it once `cache_time` has passed.
    pub fn lookup(&mut self, key: &K, now: Instant) -> Lookup {
        let Some(entry) = self.entries.get(key) else {
            return Lookup::Miss;
        };

        let age = now.saturating_duration_since(entry.stored_at);
        if age >= self.config.cache_time {
            self.entries.remove(key);
            return Lookup::Miss;
        }
        if age < self.config.stale_time {
            Lookup::Fresh(Arc::clone(&entry.model))
        } else {
            Lookup::Stale(Arc::clone(&entry.model))
        }
    }

    pub fn insert(&mut self, key: K, model: Arc<VisualizationModel>, now: Instant) {
        self.entries.insert(
            key,
            Entry {
                model,
                stored_at: now,
            },
        );
    }

    /// Returns the fresh entry for `key`, or loads, stores and returns a new one.
    ///
    /// A stale entry is revalidated through `load`. Load failures leave the cache untouched.
    pub fn get_or_load<E>(
        &mut self,
        key: K,
        now: Instant,
        load: impl FnOnce(&K) -> Result<VisualizationModel, E>,
    ) -> Result<Arc<VisualizationModel>, E> {
        if let Lookup::Fresh(model) = self.lookup(&key, now) {
            return Ok(model);
        }

        let model = Arc::new(load(&key)?);
        self.insert(key, Arc::clone(&model), now);
        Ok(model)
    }

    /// Drops every entry older than `cache_time`; returns how many were dropped.
    pub fn evict_expired(&mut self, now: Instant) -> usize {
        let cache_time = self.config.cache_time;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) < cache_time);
        before - self.entries.len()
    }
}

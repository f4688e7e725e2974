// ABOUTME: Process-lifetime cache of model-backed exercise selections
// ABOUTME: Fingerprint keyed, never expires, with per-fingerprint shared flights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dashmap::DashMap;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};

use crate::models::{SelectionRequest, SelectionResponse};

/// Result shared by every caller joined to one flight: the model-backed
/// response, or the number of model attempts that failed
pub type FlightOutcome = Result<Arc<SelectionResponse>, u32>;

/// Cache key for a request: workout type, sorted muscle groups, exercise count.
///
/// Goal, experience level, equipment, limitations and modifiers are not part
/// of the key, so requests differing only in those share an entry.
#[must_use]
pub fn fingerprint(request: &SelectionRequest) -> String {
    let muscle_groups: Vec<&str> = request.muscle_groups.iter().map(String::as_str).collect();
    format!(
        "{}:{}:{}",
        request.workout_type,
        muscle_groups.join(","),
        request.exercise_count
    )
}

/// In-memory selection cache shared by concurrent `select` calls.
///
/// Entries live until [`SelectionCache::clear`]. Identical concurrent
/// requests join one flight through [`SelectionCache::run_flight`]: a single
/// caller runs the model and every joined caller receives its outcome,
/// success or failure.
#[derive(Debug, Default)]
pub struct SelectionCache {
    entries: RwLock<HashMap<String, Arc<SelectionResponse>>>,
    in_flight: DashMap<String, Arc<OnceCell<FlightOutcome>>>,
}

impl SelectionCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached response for `key`
    pub async fn get(&self, key: &str) -> Option<Arc<SelectionResponse>> {
        self.entries.read().await.get(key).cloned()
    }

    /// Store a response under `key`, replacing any previous one
    pub async fn insert(&self, key: String, response: Arc<SelectionResponse>) {
        self.entries.write().await.insert(key, response);
    }

    /// Remove every entry
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Join the flight for `key`, running `run` only if no flight is active.
    ///
    /// Callers arriving while `run` executes wait for it and share its
    /// outcome instead of starting their own. If the running caller is
    /// cancelled, a waiting caller takes over. The flight is forgotten once
    /// it completes, so later calls start fresh.
    pub async fn run_flight<F, Fut>(&self, key: &str, run: F) -> FlightOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FlightOutcome>,
    {
        let flight = Arc::clone(self.in_flight.entry(key.to_owned()).or_default().value());
        let outcome = flight.get_or_init(run).await.clone();
        self.in_flight
            .remove_if(key, |_, active| Arc::ptr_eq(active, &flight));
        outcome
    }
}

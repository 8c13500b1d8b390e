//! Structural inventory snapshots.
//!
//! A snapshot is the normalized, point-in-time view the tracker diffs:
//! quantities per canonical name, quantities per category label, and a
//! first-seen name→category lookup. Snapshots are built once from a raw
//! observation and never mutated afterwards.

use std::collections::HashMap;

use serde::Serialize;

use crate::normalize::canonical_name;
use crate::objclass::{MAX_OBJECT_CLASSES, category_label};
use crate::obs::{Observation, decode_slot};

/// Point-in-time structural view of the inventory.
///
/// Invariant: the totals of `counts` and `categories` are equal, because
/// every counted slot contributes to exactly one name and one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventorySnapshot {
    /// Quantity present per canonical item name.
    pub counts: HashMap<String, u64>,
    /// Quantity present per category label.
    pub categories: HashMap<&'static str, u64>,
    /// First-seen category per name. Within one snapshot a name is
    /// expected to map to a single category.
    pub name_to_category: HashMap<String, &'static str>,
}

impl InventorySnapshot {
    /// Quantity of `name` present, zero if absent. Never inserts.
    pub fn count(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }
}

/// Converts raw per-slot observations into [`InventorySnapshot`]s.
///
/// Holds the positions of the inventory text and class channels within the
/// observation bundle; those are environment-specific and fixed for the
/// extractor's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotExtractor {
    strs_index: usize,
    oclasses_index: usize,
}

impl SnapshotExtractor {
    pub fn new(strs_index: usize, oclasses_index: usize) -> Self {
        SnapshotExtractor {
            strs_index,
            oclasses_index,
        }
    }

    /// Build a snapshot from one observation.
    ///
    /// Returns `None` when no observation is available or when either
    /// channel is missing or of the wrong kind; the caller must treat that
    /// as "no information yet", not as an empty inventory. Slots carrying
    /// the empty-slot sentinel, all-zero text, or text that normalizes to
    /// an empty name contribute to no counter.
    pub fn extract(&self, observation: Option<&Observation>) -> Option<InventorySnapshot> {
        let observation = observation?;
        let inv_strs = observation.text(self.strs_index)?;
        let inv_oclasses = observation.codes(self.oclasses_index)?;

        let mut snapshot = InventorySnapshot::default();
        for (raw_line, &oclass) in inv_strs.iter().zip(inv_oclasses.iter()) {
            if oclass == MAX_OBJECT_CLASSES {
                continue;
            }
            if raw_line.iter().all(|&b| b == 0) {
                continue;
            }
            let decoded = decode_slot(raw_line);
            if decoded.is_empty() {
                continue;
            }
            let name = canonical_name(&decoded);
            if name.is_empty() {
                continue;
            }
            let category = category_label(oclass);
            *snapshot.counts.entry(name.clone()).or_insert(0) += 1;
            *snapshot.categories.entry(category).or_insert(0) += 1;
            snapshot.name_to_category.entry(name).or_insert(category);
        }
        Some(snapshot)
    }
}

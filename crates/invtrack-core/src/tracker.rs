//! Episode-scoped inventory statistics.
//!
//! [`InventoryTracker`] diffs consecutive [`InventorySnapshot`]s and
//! accumulates per-episode counters: quantity increases are pickups,
//! quantity decreases are usages attributed to the most recent relevant
//! action. Some actions (eat, quaff, ...) prompt a follow-up selection, so
//! their effect on inventory only shows up on the next frame; a one-slot
//! pending label carries the attribution across that gap.

use std::collections::HashMap;

use serde_json::{Map, Value, json};

use crate::action::Action;
use crate::obs::Observation;
use crate::snapshot::{InventorySnapshot, SnapshotExtractor};

/// Serialized episode metadata: keys from [`METADATA_KEYS`], values
/// integer-valued JSON mappings. Empty when nothing notable happened.
pub type EpisodeMetadata = Map<String, Value>;

/// Keys emitted by [`InventoryTracker::finalize_episode`], in output order.
pub const METADATA_KEYS: [&str; 7] = [
    "inv_pickups_by_name",
    "inv_pickups_by_class",
    "inv_uses_by_action",
    "inv_uses_by_name",
    "inv_uses_by_class",
    "inv_by_name",
    "inv_by_category",
];

/// Per-name or per-category statistics accumulated over one episode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStats {
    /// Total quantity gained.
    pub acquired: u64,
    /// Quantity consumed/used, per action label.
    pub actions: HashMap<String, u64>,
}

/// Tracks inventory additions and usages within an episode.
///
/// Inert unless both observation channel indices were supplied at
/// construction; a disabled tracker turns every operation into a no-op so
/// it can be wired into an environment unconditionally.
#[derive(Debug, Default)]
pub struct InventoryTracker {
    extractor: Option<SnapshotExtractor>,
    current_snapshot: Option<InventorySnapshot>,
    pending_action_label: Option<String>,
    pickups_by_name: HashMap<String, u64>,
    pickups_by_class: HashMap<&'static str, u64>,
    uses_by_action: HashMap<String, u64>,
    uses_by_name: HashMap<String, HashMap<String, u64>>,
    uses_by_class: HashMap<&'static str, HashMap<String, u64>>,
    items_by_name: HashMap<String, ItemStats>,
    items_by_category: HashMap<&'static str, ItemStats>,
}

impl InventoryTracker {
    /// `strs_index` and `oclasses_index` locate the inventory text and
    /// class channels within the observation bundle. If either is absent
    /// the tracker is permanently disabled.
    pub fn new(strs_index: Option<usize>, oclasses_index: Option<usize>) -> Self {
        let extractor = match (strs_index, oclasses_index) {
            (Some(strs), Some(oclasses)) => Some(SnapshotExtractor::new(strs, oclasses)),
            _ => None,
        };
        InventoryTracker {
            extractor,
            ..InventoryTracker::default()
        }
    }

    pub fn enabled(&self) -> bool {
        self.extractor.is_some()
    }

    /// Begin a new episode. Resets every counter and seeds the previous
    /// snapshot from the initial observation, treating the starting
    /// inventory as an implicit acquisition. If extraction fails the next
    /// `record_step` seeds instead.
    pub fn start_episode(&mut self, observation: Option<&Observation>) {
        let Some(extractor) = self.extractor else {
            return;
        };
        self.reset_stats();
        let Some(snapshot) = extractor.extract(observation) else {
            self.current_snapshot = None;
            return;
        };
        self.register_initial_inventory(&snapshot);
        self.current_snapshot = Some(snapshot);
    }

    /// Record one step: the action just taken and the resulting
    /// observation. Diffs against the previous snapshot, attributing
    /// increases as pickups and decreases as usages.
    pub fn record_step(&mut self, action: &Action, observation: Option<&Observation>) {
        let Some(extractor) = self.extractor else {
            return;
        };
        if self.current_snapshot.is_none() {
            // First usable frame: seed only, nothing to diff against.
            self.current_snapshot = extractor.extract(observation);
            return;
        }
        let Some(next_snapshot) = extractor.extract(observation) else {
            // Transient invalid frame: keep prior state for the next call.
            return;
        };
        let previous = self
            .current_snapshot
            .take()
            .unwrap_or_default();

        self.register_pickups(&previous, &next_snapshot);

        if let Some(tracked) = action.tracked_label() {
            // Overrides any label still pending from an earlier step.
            self.pending_action_label = Some(tracked.to_string());
        }
        let effective_label = match &self.pending_action_label {
            Some(pending) => pending.clone(),
            None => action.label(),
        };

        let used = self.register_usage(&effective_label, &previous, &next_snapshot);
        if used && self.pending_action_label.is_some() {
            self.pending_action_label = None;
        }

        self.current_snapshot = Some(next_snapshot);
    }

    /// Emit the episode's counters as a JSON-ready mapping and reset all
    /// state. Returns an empty mapping if nothing notable happened (or the
    /// tracker is disabled); a second call without intervening activity is
    /// therefore also empty.
    pub fn finalize_episode(&mut self) -> EpisodeMetadata {
        if !self.enabled() {
            return EpisodeMetadata::new();
        }
        let mut metadata = EpisodeMetadata::new();
        metadata.insert(
            "inv_pickups_by_name".to_string(),
            counter_to_value(&self.pickups_by_name),
        );
        metadata.insert(
            "inv_pickups_by_class".to_string(),
            counter_to_value(&self.pickups_by_class),
        );
        metadata.insert(
            "inv_uses_by_action".to_string(),
            counter_to_value(&self.uses_by_action),
        );
        metadata.insert(
            "inv_uses_by_name".to_string(),
            nested_counter_to_value(&self.uses_by_name),
        );
        metadata.insert(
            "inv_uses_by_class".to_string(),
            nested_counter_to_value(&self.uses_by_class),
        );
        metadata.insert(
            "inv_by_name".to_string(),
            stats_to_value(&self.items_by_name),
        );
        metadata.insert(
            "inv_by_category".to_string(),
            stats_to_value(&self.items_by_category),
        );
        let has_data = metadata
            .values()
            .any(|value| value.as_object().is_some_and(|obj| !obj.is_empty()));
        self.reset_stats();
        if has_data { metadata } else { EpisodeMetadata::new() }
    }

    fn reset_stats(&mut self) {
        self.pickups_by_name.clear();
        self.pickups_by_class.clear();
        self.uses_by_action.clear();
        self.uses_by_name.clear();
        self.uses_by_class.clear();
        self.items_by_name.clear();
        self.items_by_category.clear();
        self.current_snapshot = None;
        self.pending_action_label = None;
    }

    fn register_initial_inventory(&mut self, snapshot: &InventorySnapshot) {
        for (name, &count) in &snapshot.counts {
            let category = snapshot.name_to_category.get(name).copied();
            self.record_acquisition(name, count, category);
        }
    }

    fn register_pickups(&mut self, before: &InventorySnapshot, after: &InventorySnapshot) {
        for (name, &count) in &after.counts {
            let diff = count.saturating_sub(before.count(name));
            if diff > 0 {
                let category = after.name_to_category.get(name).copied();
                self.record_acquisition(name, diff, category);
            }
        }
    }

    fn record_acquisition(&mut self, name: &str, quantity: u64, category: Option<&'static str>) {
        if quantity == 0 {
            return;
        }
        *self.pickups_by_name.entry(name.to_string()).or_insert(0) += quantity;
        if let Some(category) = category {
            *self.pickups_by_class.entry(category).or_insert(0) += quantity;
            self.items_by_category.entry(category).or_default().acquired += quantity;
        }
        self.items_by_name.entry(name.to_string()).or_default().acquired += quantity;
    }

    /// Attribute every per-name decrease to `action_label`. All names that
    /// decrease in the same step share the label; there is no per-item
    /// causal disambiguation within one frame.
    fn register_usage(
        &mut self,
        action_label: &str,
        before: &InventorySnapshot,
        after: &InventorySnapshot,
    ) -> bool {
        let mut used_any = false;
        for (name, &prev_count) in &before.counts {
            let diff = prev_count.saturating_sub(after.count(name));
            if diff == 0 {
                continue;
            }
            *self.uses_by_action.entry(action_label.to_string()).or_insert(0) += diff;
            *self
                .uses_by_name
                .entry(name.clone())
                .or_default()
                .entry(action_label.to_string())
                .or_insert(0) += diff;
            if let Some(&category) = before.name_to_category.get(name) {
                *self
                    .uses_by_class
                    .entry(category)
                    .or_default()
                    .entry(action_label.to_string())
                    .or_insert(0) += diff;
                *self
                    .items_by_category
                    .entry(category)
                    .or_default()
                    .actions
                    .entry(action_label.to_string())
                    .or_insert(0) += diff;
            }
            *self
                .items_by_name
                .entry(name.clone())
                .or_default()
                .actions
                .entry(action_label.to_string())
                .or_insert(0) += diff;
            used_any = true;
        }
        used_any
    }
}

/// Flat counter to a JSON object, dropping zero entries.
fn counter_to_value<K: AsRef<str>>(counter: &HashMap<K, u64>) -> Value {
    let mut obj = Map::new();
    for (key, &val) in counter {
        if val > 0 {
            obj.insert(key.as_ref().to_string(), Value::from(val));
        }
    }
    Value::Object(obj)
}

/// Nested counter to a JSON object, dropping empty inner maps.
fn nested_counter_to_value<K: AsRef<str>>(nested: &HashMap<K, HashMap<String, u64>>) -> Value {
    let mut obj = Map::new();
    for (key, counter) in nested {
        let inner = counter_to_value(counter);
        if inner.as_object().is_some_and(|map| !map.is_empty()) {
            obj.insert(key.as_ref().to_string(), inner);
        }
    }
    Value::Object(obj)
}

/// ItemStats mapping to `{<key>: {"acquired": n, "actions": {...}}}`,
/// dropping entries with nothing recorded.
fn stats_to_value<K: AsRef<str>>(mapping: &HashMap<K, ItemStats>) -> Value {
    let mut obj = Map::new();
    for (key, stats) in mapping {
        let actions = counter_to_value(&stats.actions);
        let has_actions = actions.as_object().is_some_and(|map| !map.is_empty());
        if stats.acquired > 0 || has_actions {
            obj.insert(
                key.as_ref().to_string(),
                json!({ "acquired": stats.acquired, "actions": actions }),
            );
        }
    }
    Value::Object(obj)
}

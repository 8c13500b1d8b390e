//! invtrack-core: episodic inventory-change tracking.
//!
//! Observes an agent's raw per-slot inventory each simulation step, diffs
//! successive snapshots, and attributes quantity increases to pickups and
//! decreases to the most plausible triggering action. Produces one compact
//! JSON-serializable metadata mapping per episode.
//!
//! This crate is pure: no I/O, no threads, no suspension points. One
//! [`InventoryTracker`] is owned by exactly one environment instance.

pub mod action;
pub mod normalize;
pub mod objclass;
pub mod obs;
pub mod snapshot;
pub mod tracker;

pub use action::{Action, Command, CompassDirection, MiscAction, MiscDirection};
pub use normalize::canonical_name;
pub use objclass::{MAX_OBJECT_CLASSES, ObjectClass, category_label};
pub use obs::{INV_STR_WIDTH, ObsChannel, Observation};
pub use snapshot::{InventorySnapshot, SnapshotExtractor};
pub use tracker::{EpisodeMetadata, InventoryTracker, ItemStats, METADATA_KEYS};

//! Configuration types for the engine.
//!
//! These structures are deserialized from `engine.yaml`.

use serde::Deserialize;

use crate::query::SortOrder;

/// Engine settings.
///
/// Every field has a default, so an empty `engine.yaml` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of snapshots kept for undo/redo. `None` keeps all.
    #[serde(default)]
    pub history_limit: Option<usize>,
    /// Sort order used by filter commands that do not name one.
    #[serde(default)]
    pub default_sort_order: SortOrder,
}

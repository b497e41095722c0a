//! Immutable per-batch snapshot of resolved reference standards

use crate::app::models::{StandardCategory, StandardDefinition};
use crate::constants::default_standards;
use std::collections::BTreeMap;

/// The resolved reference-limit tables for one batch.
///
/// Entries are split by category so a symbol like "Fe" can carry a
/// quality-parameter standard (mg/L) without clashing with metal standards
/// (ppb). The snapshot is never mutated after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardsSnapshot {
    /// Heavy-metal standards by symbol, ppb
    pub metals: BTreeMap<String, StandardDefinition>,

    /// Quality-parameter standards by symbol, native units
    pub parameters: BTreeMap<String, StandardDefinition>,
}

impl StandardsSnapshot {
    /// Snapshot holding only the built-in defaults
    pub fn builtin() -> Self {
        let mut snapshot = Self {
            metals: BTreeMap::new(),
            parameters: BTreeMap::new(),
        };
        for (symbol, name, permissible, ideal, max_allowable) in default_standards::HEAVY_METALS {
            snapshot.overlay(StandardDefinition::heavy_metal(
                *symbol,
                *name,
                *permissible,
                *ideal,
                *max_allowable,
            ));
        }
        for (symbol, name, permissible, ideal) in default_standards::QUALITY_PARAMETERS {
            snapshot.overlay(StandardDefinition::parameter(
                *symbol, *name, *permissible, *ideal,
            ));
        }
        snapshot
    }

    /// Insert or replace the entry for a symbol within its category
    pub fn overlay(&mut self, definition: StandardDefinition) {
        let table = match definition.category {
            StandardCategory::HeavyMetal => &mut self.metals,
            StandardCategory::Parameter => &mut self.parameters,
        };
        table.insert(definition.symbol.clone(), definition);
    }

    /// Overlay a batch of definitions (later entries win within the batch)
    pub fn overlay_all(&mut self, definitions: impl IntoIterator<Item = StandardDefinition>) {
        for definition in definitions {
            self.overlay(definition);
        }
    }

    /// Metal standard for a symbol, if resolved
    pub fn metal(&self, symbol: &str) -> Option<&StandardDefinition> {
        self.metals.get(symbol)
    }

    /// Parameter standard for a symbol, if resolved
    pub fn parameter(&self, symbol: &str) -> Option<&StandardDefinition> {
        self.parameters.get(symbol)
    }

    /// Total number of resolved entries across both categories
    pub fn len(&self) -> usize {
        self.metals.len() + self.parameters.len()
    }

    /// Whether the snapshot holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.metals.is_empty() && self.parameters.is_empty()
    }
}

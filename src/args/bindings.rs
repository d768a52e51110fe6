//! Bindings: output cells written by the parser.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::args::registry::Slot;

/// Literal bound to a flag-only option when it is present.
pub const FLAG_PRESENT: &str = "true";

/// One output cell per registered argument.
///
/// Cells the parser never reached stay unbound; callers supply their own
/// default through [`Bindings::get_or`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    keys: Vec<String>,
    values: Vec<Option<String>>,
}

impl Bindings {
    pub(crate) fn with_keys(keys: Vec<String>) -> Self {
        let values = vec![None; keys.len()];
        Self { keys, values }
    }

    /// Write `value` into the cell behind `slot`, replacing any earlier value.
    pub(crate) fn bind(&mut self, slot: Slot, value: &str) {
        if let Some(cell) = self.values.get_mut(slot.0) {
            tracing::trace!(key = %self.keys[slot.0], value, "bound");
            *cell = Some(value.to_string());
        }
    }

    /// Value bound to `slot`, if the parser wrote one.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.values.get(slot.0).and_then(|v| v.as_deref())
    }

    /// Value bound to `slot`, or `default` when unbound.
    pub fn get_or<'a>(&'a self, slot: Slot, default: &'a str) -> &'a str {
        self.get(slot).unwrap_or(default)
    }

    /// True when a flag-only option was present on the command line.
    pub fn is_set(&self, slot: Slot) -> bool {
        self.get(slot) == Some(FLAG_PRESENT)
    }

    /// Look a value up by positional name or option key (long, else short).
    pub fn get_key(&self, key: &str) -> Option<&str> {
        let index = self.keys.iter().position(|k| k == key)?;
        self.values[index].as_deref()
    }

    /// Bound cells in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .zip(&self.values)
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Number of bound cells.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl Serialize for Bindings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

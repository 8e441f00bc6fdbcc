//! Persisted column preferences: display order plus the hidden subset.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::column::{column_keys, ColumnDef, ColumnKey};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ColumnPrefs {
    order: Vec<ColumnKey>,
    hidden: Vec<ColumnKey>,
}

#[derive(Deserialize)]
struct StoredPrefs {
    order: Vec<ColumnKey>,
    #[serde(default)]
    hidden: Vec<ColumnKey>,
}

impl ColumnPrefs {
    /// All keys visible, in the supplied sequence. Repeated keys keep their first slot.
    pub fn fresh(keys: &[ColumnKey]) -> Self {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let order = keys
            .iter()
            .filter(|key| seen.insert(key.as_str()))
            .cloned()
            .collect();
        Self {
            order,
            hidden: Vec::new(),
        }
    }

    pub fn from_columns(columns: &[ColumnDef]) -> Self {
        Self::fresh(&column_keys(columns))
    }

    pub fn order(&self) -> &[ColumnKey] {
        &self.order
    }

    pub fn hidden(&self) -> &[ColumnKey] {
        &self.hidden
    }

    pub fn is_hidden(&self, key: &str) -> bool {
        self.hidden.iter().any(|k| k.as_str() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k.as_str() == key)
    }

    /// Align with the caller's current keys.
    ///
    /// Unknown keys are dropped from both lists, keys the record has not seen are
    /// appended in caller order and start out visible. The result's `hidden`
    /// follows `order`'s sequence.
    pub fn reconcile(&self, keys: &[ColumnKey]) -> Self {
        let known: FxHashSet<&str> = keys.iter().map(ColumnKey::as_str).collect();
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        let mut order: Vec<ColumnKey> = Vec::with_capacity(keys.len());
        for key in &self.order {
            if known.contains(key.as_str()) && seen.insert(key.as_str()) {
                order.push(key.clone());
            }
        }

        let hidden_before: FxHashSet<&str> = self
            .hidden
            .iter()
            .map(ColumnKey::as_str)
            .filter(|key| seen.contains(key))
            .collect();

        for key in keys {
            if seen.insert(key.as_str()) {
                order.push(key.clone());
            }
        }

        let hidden = order
            .iter()
            .filter(|key| hidden_before.contains(key.as_str()))
            .cloned()
            .collect();

        Self { order, hidden }
    }

    pub fn reconcile_columns(&self, columns: &[ColumnDef]) -> Self {
        self.reconcile(&column_keys(columns))
    }

    /// Single-element move: remove at `from`, insert at `to` (counted after removal).
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.order.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let moved = self.order.remove(from);
        self.order.insert(to, moved);
        true
    }

    pub fn set_visible(&mut self, key: &str, visible: bool) -> bool {
        if visible {
            let before = self.hidden.len();
            self.hidden.retain(|k| k.as_str() != key);
            return self.hidden.len() != before;
        }

        if !self.contains(key) || self.is_hidden(key) {
            return false;
        }
        self.hidden.push(ColumnKey::new(key));
        true
    }

    /// Caller columns minus hidden ones, arranged by `order`.
    ///
    /// Columns whose key the record has never seen go last, in caller order. When
    /// the caller repeats a key the first column carrying it wins.
    pub fn visible_columns<'a>(&self, columns: &'a [ColumnDef]) -> Vec<&'a ColumnDef> {
        let mut by_key: FxHashMap<ColumnKey, &'a ColumnDef> = FxHashMap::default();
        let mut unseen: Vec<&'a ColumnDef> = Vec::new();
        let ordered: FxHashSet<&str> = self.order.iter().map(ColumnKey::as_str).collect();

        for (idx, col) in columns.iter().enumerate() {
            let key = col.resolve_key(idx);
            if self.is_hidden(key.as_str()) {
                continue;
            }
            if !ordered.contains(key.as_str()) {
                if !by_key.contains_key(&key) {
                    by_key.insert(key, col);
                    unseen.push(col);
                }
                continue;
            }
            by_key.entry(key).or_insert(col);
        }

        let mut result = Vec::with_capacity(by_key.len());
        for key in &self.order {
            if let Some(col) = by_key.get(key) {
                result.push(*col);
            }
        }
        result.extend(unseen);
        result
    }

    /// Strict parse of the persisted form. Anything but an object carrying an
    /// `order` array of strings yields `None`.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(bytes).ok()?;
        if !value.is_object() {
            return None;
        }
        let stored: StoredPrefs = serde_json::from_value(value).ok()?;
        Some(Self {
            order: stored.order,
            hidden: stored.hidden,
        })
    }

    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/prefs.rs"]
mod tests;

//! 列定义与列标识
//!
//! 调用方持有列定义，内核只读取 key 和 title，其余元数据原样透传。

use compact_str::{format_compact, CompactString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Borrow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnKey(CompactString);

impl ColumnKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(CompactString::new(key.as_ref()))
    }

    /// 位置回退 key：`col_<index>`。调用方重排列时不稳定。
    pub fn positional(index: usize) -> Self {
        Self(format_compact!("col_{index}"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ColumnKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColumnKey {
    fn from(value: String) -> Self {
        Self(CompactString::from(value))
    }
}

impl Borrow<str> for ColumnKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnDef {
    #[serde(default, rename = "dataIndex", skip_serializing_if = "Option::is_none")]
    pub data_index: Option<ColumnKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ColumnKey>,
    pub title: String,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl ColumnDef {
    pub fn new(data_index: impl AsRef<str>, title: impl Into<String>) -> Self {
        Self {
            data_index: Some(ColumnKey::new(data_index)),
            key: None,
            title: title.into(),
            meta: Map::new(),
        }
    }

    pub fn anonymous(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl AsRef<str>) -> Self {
        self.key = Some(ColumnKey::new(key));
        self
    }

    pub fn with_meta(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.meta.insert(name.to_string(), value.into());
        self
    }

    pub fn meta_u64(&self, name: &str) -> Option<u64> {
        self.meta.get(name).and_then(Value::as_u64)
    }

    pub fn meta_str(&self, name: &str) -> Option<&str> {
        self.meta.get(name).and_then(Value::as_str)
    }

    /// 列标识：`data_index`，其次 `key`，最后回退到 `col_<index>`。
    pub fn resolve_key(&self, index: usize) -> ColumnKey {
        self.data_index
            .clone()
            .or_else(|| self.key.clone())
            .unwrap_or_else(|| ColumnKey::positional(index))
    }
}

pub fn column_keys(columns: &[ColumnDef]) -> Vec<ColumnKey> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, col)| col.resolve_key(idx))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/column.rs"]
mod tests;

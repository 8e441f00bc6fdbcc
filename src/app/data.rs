//! Demo datasets for the two table pages.

use serde_json::{json, Map, Value};

use crate::kernel::ColumnDef;

pub const TABLE_STORAGE_KEY: &str = "table.columns";
pub const PRO_TABLE_STORAGE_KEY: &str = "pro-table.columns";

pub type Record = Map<String, Value>;

pub fn table_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("id", "ID").with_key("id"),
        ColumnDef::new("name", "Name").with_key("name"),
        ColumnDef::new("age", "Age").with_key("age"),
        ColumnDef::new("city", "City").with_key("city"),
    ]
}

pub fn pro_table_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("id", "ID"),
        ColumnDef::new("name", "Name"),
        ColumnDef::new("age", "Age").with_meta("valueType", "digit"),
        ColumnDef::new("city", "City"),
    ]
}

pub fn people() -> Vec<Record> {
    let rows = [
        json!({ "key": 1, "id": 1, "name": "Ivan", "age": 28, "city": "Moscow" }),
        json!({ "key": 2, "id": 2, "name": "Anna", "age": 24, "city": "Saint Petersburg" }),
        json!({ "key": 3, "id": 3, "name": "Petr", "age": 32, "city": "Kazan" }),
    ];
    rows.into_iter()
        .filter_map(|row| match row {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

/// Cell text for `field`; strings unquoted, missing values blank.
pub fn cell_text(record: &Record, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

use crate::sheets::SheetsError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// response
//  ├── range            "hub!A1:N38"
//  ├── majorDimension   "ROWS"
//  └── values           [[cell, ...], ...]   (absent when the range is empty)

/// Body of a `spreadsheets.values.get` response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: String,
    pub major_dimension: Option<String>,
    #[serde(default, deserialize_with = "deserialize_cells")]
    pub values: Vec<Vec<String>>,
}

pub fn decode_value_range(body: &str) -> Result<ValueRange, SheetsError> {
    serde_json::from_str(body).map_err(|e| SheetsError::Decode(e.to_string()))
}

// Formatted values come back as strings, but unformatted ranges carry
// numbers and booleans; null shows up for explicitly empty cells.
fn deserialize_cells<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Vec<Value>>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect())
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

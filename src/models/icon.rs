use serde_json::Value;

/// One icon/label pair from a multi-value field.
///
/// Entries are transient: parsed from the field value per request,
/// rendered, and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// URL-like path of the image resource
    pub value: String,
    /// Display string shown as tooltip or caption
    pub label: String,
}

impl IconEntry {
    /// Parse one record from a field value array.
    ///
    /// Returns `None` unless the record is an object carrying both
    /// `value` and `label` as strings.
    pub fn from_value(item: &Value) -> Option<Self> {
        let record = item.as_object()?;
        let value = record.get("value")?.as_str()?;
        let label = record.get("label")?.as_str()?;

        Some(Self {
            value: value.to_string(),
            label: label.to_string(),
        })
    }
}

//! Test fixtures and constants.

use serde_json::{json, Value};

/// Field names used across scenarios
pub mod fields {
    /// Default field the shortcode falls back to
    pub const DEFAULT: &str = "komplekt";

    /// A second configured field
    pub const FEATURES: &str = "features";

    /// Never populated
    pub const MISSING: &str = "no_such_field";
}

/// A well-formed three-entry field value
pub fn equipment_icons() -> Value {
    json!([
        {"value": "/uploads/icons/klima.svg", "label": "Climate control"},
        {"value": "/uploads/icons/abs.svg", "label": "ABS"},
        {"value": "/uploads/icons/audio.svg", "label": "Audio system"},
    ])
}

/// A field value mixing conforming and malformed entries
pub fn mixed_icons() -> Value {
    json!([
        {"value": "/uploads/icons/a.svg", "label": "A"},
        {"value": "/uploads/icons/missing-label.svg"},
        {"label": "Missing value"},
        "not a record",
        {"value": "/uploads/icons/b.svg", "label": "B"},
    ])
}

/// A field value whose strings carry HTML-significant characters
pub fn hostile_icons() -> Value {
    json!([
        {"value": "/up loads/\"x\".svg", "label": "<b>Bold</b> & \"quoted\""},
    ])
}

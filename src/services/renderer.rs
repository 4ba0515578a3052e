use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use serde_json::Value;

use crate::models::{DisplayMode, IconEntry, LabelPosition, RenderParams};
use crate::services::escape::{escape_attr, escape_url, sanitize_html_class};
use crate::services::FieldSource;

/// Renders a multi-value icon field as an HTML fragment.
///
/// The render path never fails: missing or malformed field data degrades
/// to a placeholder comment, bad parameters are corrected to defaults.
pub struct IconListRenderer {
    source: Arc<dyn FieldSource>,
    default_field: String,
}

impl IconListRenderer {
    pub fn new(source: Arc<dyn FieldSource>) -> Self {
        Self::with_default_field(source, "komplekt")
    }

    /// Use a configured fallback field instead of the built-in one.
    pub fn with_default_field(source: Arc<dyn FieldSource>, field: impl Into<String>) -> Self {
        Self {
            source,
            default_field: field.into(),
        }
    }

    /// Render the shortcode body for the given raw attributes.
    ///
    /// Always returns a well-formed string: either the populated wrapper
    /// or an HTML comment naming the empty field.
    pub fn render(&self, atts: &HashMap<String, String>) -> String {
        let params = RenderParams::from_atts(atts, &self.default_field);

        let items = match self.source.get(&params.field) {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => {
                tracing::debug!(field = %params.field, "Field empty or not a list");
                return empty_field_comment(&params.field);
            }
        };

        let instance_class = format!(
            "acf-icons-{}-{}-{}",
            sanitize_html_class(&params.field),
            params.layout,
            params.display
        );

        let mut out = String::new();
        let _ = write!(
            out,
            r#"<div class="acf-icons-wrapper {} layout-{} display-{}" style="--icon-size: {}px;">"#,
            instance_class, params.layout, params.display, params.size
        );

        let mut rendered = 0usize;
        for item in &items {
            match IconEntry::from_value(item) {
                Some(entry) => {
                    push_item(&mut out, &entry, &params);
                    rendered += 1;
                }
                None => {
                    tracing::debug!(field = %params.field, "Skipping malformed entry");
                }
            }
        }
        out.push_str("</div>");

        tracing::trace!(field = %params.field, total = items.len(), rendered, "Rendered icon list");
        out
    }
}

/// Placeholder emitted instead of the wrapper when there is nothing to show.
fn empty_field_comment(field: &str) -> String {
    format!(
        "<!-- acf-icons: field \"{}\" is empty -->",
        escape_attr(field)
    )
}

fn push_item(out: &mut String, entry: &IconEntry, params: &RenderParams) {
    let label = escape_attr(&entry.label);
    let src = escape_url(&entry.value);
    let img = format!(r#"<img src="{src}" alt="{label}" class="acf-icon">"#);

    match params.display {
        DisplayMode::Tooltip => {
            let _ = write!(
                out,
                r#"<div class="acf-icon-item" data-tooltip="{label}">{img}</div>"#
            );
        }
        DisplayMode::Label => {
            let caption = format!(r#"<span class="acf-icon-label">{label}</span>"#);
            match params.label_position {
                LabelPosition::Top => {
                    let _ = write!(
                        out,
                        r#"<div class="acf-icon-item with-label label-top">{caption}{img}</div>"#
                    );
                }
                LabelPosition::Bottom => {
                    let _ = write!(
                        out,
                        r#"<div class="acf-icon-item with-label label-bottom">{img}{caption}</div>"#
                    );
                }
            }
        }
    }
}

use std::collections::HashMap;

use crate::editor::schema::{DropdownOption, ElementSchema, ParamDescriptor};

/// Trait for the host's visual-editor element registry.
///
/// Mapping the same `base` twice overwrites the earlier entry, so
/// registration is safe to repeat from multiple host lifecycle hooks.
pub trait SchemaRegistry {
    fn map(&mut self, schema: ElementSchema);
}

/// In-memory registry, keyed by shortcode base.
#[derive(Debug, Default)]
pub struct InMemorySchemaRegistry {
    elements: HashMap<String, ElementSchema>,
}

impl InMemorySchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, base: &str) -> Option<&ElementSchema> {
        self.elements.get(base)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl SchemaRegistry for InMemorySchemaRegistry {
    fn map(&mut self, schema: ElementSchema) {
        self.elements.insert(schema.base.clone(), schema);
    }
}

/// Declares the shortcode's parameter schema to a visual page builder.
pub struct VisualEditorSchemaProvider {
    base: String,
    default_field: String,
}

impl VisualEditorSchemaProvider {
    pub fn new(base: impl Into<String>, default_field: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            default_field: default_field.into(),
        }
    }

    /// Build the element metadata. Same parameter space as the renderer,
    /// expressed declaratively for the editor GUI.
    pub fn schema(&self) -> ElementSchema {
        ElementSchema {
            name: "ACF icon list".to_string(),
            base: self.base.clone(),
            category: "Content".to_string(),
            icon: "fas fa-icons".to_string(),
            description: "Render icons from an ACF field".to_string(),
            params: vec![
                ParamDescriptor::textfield(
                    "ACF field name",
                    "field",
                    self.default_field.clone(),
                    "Machine name of the ACF field (for example: komplekt)",
                )
                .admin_label(),
                ParamDescriptor::dropdown(
                    "Orientation",
                    "layout",
                    vec![
                        DropdownOption::new("Horizontal", "horizontal"),
                        DropdownOption::new("Vertical", "vertical"),
                    ],
                    "horizontal",
                    "Direction the icons flow in",
                )
                .admin_label(),
                ParamDescriptor::dropdown(
                    "Label display",
                    "display",
                    vec![
                        DropdownOption::new("Tooltip on hover", "tooltip"),
                        DropdownOption::new("Visible caption", "label"),
                    ],
                    "tooltip",
                    "How each icon's label is shown",
                ),
                ParamDescriptor::dropdown(
                    "Caption position",
                    "label_position",
                    vec![
                        DropdownOption::new("Above icon", "top"),
                        DropdownOption::new("Below icon", "bottom"),
                    ],
                    "bottom",
                    "Where the caption sits relative to the icon",
                )
                .depends_on("display", "label"),
                ParamDescriptor::textfield(
                    "Icon size (px)",
                    "size",
                    "28",
                    "Icon size in pixels (for example: 28, 32, 40)",
                )
                .holder_class("vc_colored-bg"),
            ],
        }
    }

    /// Register the element with the host registry.
    ///
    /// Idempotent: the registry overwrites by base, so calling this from
    /// both an early and a late host hook is safe.
    pub fn register(&self, registry: &mut dyn SchemaRegistry) {
        registry.map(self.schema());
        tracing::debug!(base = %self.base, "Editor element schema mapped");
    }
}

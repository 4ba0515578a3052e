use serde::Serialize;

/// Parameter control kind shown in the editor UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Textfield,
    Dropdown,
}

/// One choice in a dropdown parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Declarative UI dependency: show this parameter only while another
/// parameter holds the given value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDependency {
    pub element: String,
    pub value: String,
}

/// One configurable parameter of the editor element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamDescriptor {
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub heading: String,
    pub param_name: String,

    /// Default for text fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Choices for dropdowns, in display order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<DropdownOption>,

    /// Default choice for dropdowns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<String>,

    pub description: String,

    /// Surface the value in the element's admin listing
    pub admin_label: bool,

    /// Extra CSS class for the editor input holder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_holder_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency: Option<ParamDependency>,
}

impl ParamDescriptor {
    pub fn textfield(
        heading: impl Into<String>,
        param_name: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: ParamKind::Textfield,
            heading: heading.into(),
            param_name: param_name.into(),
            value: Some(value.into()),
            options: Vec::new(),
            std: None,
            description: description.into(),
            admin_label: false,
            param_holder_class: None,
            dependency: None,
        }
    }

    pub fn dropdown(
        heading: impl Into<String>,
        param_name: impl Into<String>,
        options: Vec<DropdownOption>,
        std: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: ParamKind::Dropdown,
            heading: heading.into(),
            param_name: param_name.into(),
            value: None,
            options,
            std: Some(std.into()),
            description: description.into(),
            admin_label: false,
            param_holder_class: None,
            dependency: None,
        }
    }

    pub fn admin_label(mut self) -> Self {
        self.admin_label = true;
        self
    }

    pub fn holder_class(mut self, class: impl Into<String>) -> Self {
        self.param_holder_class = Some(class.into());
        self
    }

    pub fn depends_on(mut self, element: impl Into<String>, value: impl Into<String>) -> Self {
        self.dependency = Some(ParamDependency {
            element: element.into(),
            value: value.into(),
        });
        self
    }
}

/// Metadata describing the shortcode to a visual page builder.
///
/// Pure data: no rendering or validation logic lives here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSchema {
    pub name: String,
    /// The shortcode tag this element expands to
    pub base: String,
    pub category: String,
    pub icon: String,
    pub description: String,
    pub params: Vec<ParamDescriptor>,
}

use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// How the stylesheet reaches the page
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StyleDelivery {
    /// Hand the sheet to the host asset pipeline under a handle
    Enqueue,
    /// Inject a `<style>` block into the page head
    Inline,
}

/// Plugin configuration loaded from YAML
#[derive(Debug, Deserialize, Clone)]
pub struct PluginConfig {
    /// Shortcode tag registered with the host
    #[serde(default = "default_shortcode_tag")]
    pub shortcode_tag: String,

    /// Field looked up when the shortcode gives no `field` attribute
    #[serde(default = "default_field")]
    pub default_field: String,

    /// Handle the stylesheet is enqueued under
    #[serde(default = "default_style_handle")]
    pub style_handle: String,

    /// Stylesheet delivery mode
    #[serde(default = "default_style_delivery")]
    pub style: StyleDelivery,
}

fn default_shortcode_tag() -> String {
    "acf_icons".to_string()
}

fn default_field() -> String {
    "komplekt".to_string()
}

fn default_style_handle() -> String {
    "acf-icons-shortcode".to_string()
}

fn default_style_delivery() -> StyleDelivery {
    StyleDelivery::Enqueue
}

impl PluginConfig {
    /// Strict parse for callers that want the failure.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Strict load from a config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Lenient load: parse failures fall back to defaults with a warning.
    pub fn load_str(content: &str) -> Self {
        match Self::from_yaml(content) {
            Ok(config) => {
                tracing::info!(
                    tag = %config.shortcode_tag,
                    field = %config.default_field,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Load the embedded default configuration.
    pub fn load_embedded() -> Self {
        Self::load_str(&crate::assets::default_config_yaml())
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            shortcode_tag: default_shortcode_tag(),
            default_field: default_field(),
            style_handle: default_style_handle(),
            style: default_style_delivery(),
        }
    }
}

//! Embedded static assets: the stylesheet implementing the class contract
//! and the default plugin configuration.

use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.css"]
#[include = "*.yaml"]
struct EmbeddedAssets;

fn embedded_str(name: &str) -> Cow<'static, str> {
    match EmbeddedAssets::get(name) {
        Some(file) => match file.data {
            Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
            Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
        },
        None => {
            tracing::warn!(name, "Embedded asset missing");
            Cow::Borrowed("")
        }
    }
}

/// The plugin stylesheet.
pub fn stylesheet() -> Cow<'static, str> {
    embedded_str("acf-icons.css")
}

/// The default configuration YAML.
pub fn default_config_yaml() -> Cow<'static, str> {
    embedded_str("config.yaml")
}

/// The stylesheet wrapped in a `<style>` element for inline delivery.
pub fn inline_style_block(handle: &str) -> String {
    format!(
        "<style id=\"{}\">\n{}</style>",
        crate::services::escape::escape_attr(handle),
        stylesheet()
    )
}

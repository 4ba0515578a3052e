//! Host wiring: one explicit startup routine instead of ambient hook tables.
//!
//! The host hands its registration surfaces in as a [`HostContext`];
//! [`Plugin::register_all`] runs once at plugin initialization and
//! [`Plugin::on_init`] again at the host's late init hook.

use std::collections::HashMap;
use std::sync::Arc;

use crate::assets;
use crate::editor::{SchemaRegistry, VisualEditorSchemaProvider};
use crate::models::{PluginConfig, StyleDelivery};
use crate::services::{FieldSource, IconListRenderer};

/// A registered shortcode body: raw attribute map in, HTML fragment out.
pub type ShortcodeHandler = Arc<dyn Fn(&HashMap<String, String>) -> String + Send + Sync>;

/// The host's shortcode table.
pub trait ShortcodeHost {
    fn add_shortcode(&mut self, tag: &str, handler: ShortcodeHandler);
}

/// The host's styling surface.
pub trait StyleSink {
    /// Hand a stylesheet to the host asset pipeline under a handle.
    fn enqueue_style(&mut self, handle: &str, css: &str);

    /// Inject a raw block into the page head.
    fn add_inline_block(&mut self, block: &str);
}

/// Everything the plugin needs from the host, passed explicitly.
pub trait HostContext {
    fn shortcodes(&mut self) -> &mut dyn ShortcodeHost;

    fn styles(&mut self) -> &mut dyn StyleSink;

    /// Capability probe: `None` while the visual editor is not loaded.
    fn editor_registry(&mut self) -> Option<&mut dyn SchemaRegistry>;
}

/// The assembled plugin: renderer plus editor schema, wired from config.
pub struct Plugin {
    config: PluginConfig,
    renderer: Arc<IconListRenderer>,
    schema_provider: VisualEditorSchemaProvider,
}

impl Plugin {
    pub fn new(config: PluginConfig, source: Arc<dyn FieldSource>) -> Self {
        let renderer = Arc::new(IconListRenderer::with_default_field(
            source,
            config.default_field.clone(),
        ));
        let schema_provider =
            VisualEditorSchemaProvider::new(config.shortcode_tag.clone(), config.default_field.clone());

        Self {
            config,
            renderer,
            schema_provider,
        }
    }

    /// Early host hook: register the shortcode, deliver styles, and make
    /// the first editor registration attempt.
    pub fn register_all(&self, host: &mut dyn HostContext) {
        let renderer = self.renderer.clone();
        host.shortcodes().add_shortcode(
            &self.config.shortcode_tag,
            Arc::new(move |atts| renderer.render(atts)),
        );

        match self.config.style {
            StyleDelivery::Enqueue => {
                host.styles()
                    .enqueue_style(&self.config.style_handle, &assets::stylesheet());
            }
            StyleDelivery::Inline => {
                host.styles()
                    .add_inline_block(&assets::inline_style_block(&self.config.style_handle));
            }
        }

        self.try_register_editor(host);
        tracing::info!(tag = %self.config.shortcode_tag, "Shortcode registered");
    }

    /// Late host hook. The editor registry's readiness is not guaranteed
    /// by the early hook, so registration is re-attempted here; the
    /// registry overwrites by base, so running both hooks is harmless.
    pub fn on_init(&self, host: &mut dyn HostContext) {
        self.try_register_editor(host);
    }

    fn try_register_editor(&self, host: &mut dyn HostContext) {
        match host.editor_registry() {
            Some(registry) => self.schema_provider.register(registry),
            None => tracing::debug!("Visual editor registry not available"),
        }
    }
}

//! Common test infrastructure for acf-icons integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::Arc;

use acf_icons::services::{IconListRenderer, InMemoryFieldSource};
use serde_json::Value;

/// Swallow the init error when a second test file races us.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acf_icons=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Build an attribute map from literal pairs.
pub fn atts(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Renderer backed by a single pre-populated field.
pub fn renderer_with_field(field: &str, value: Value) -> IconListRenderer {
    let mut source = InMemoryFieldSource::new();
    source.set(field, value);
    IconListRenderer::new(Arc::new(source))
}

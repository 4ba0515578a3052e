//! End-to-end rendering contract: parameters in, HTML fragment out.

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use acf_icons::services::{IconListRenderer, InMemoryFieldSource};
use common::fixtures::{self, fields};
use common::{atts, init_tracing, renderer_with_field};
use pretty_assertions::assert_eq;

#[test]
fn renders_one_item_per_conforming_entry() {
    init_tracing();
    let renderer = renderer_with_field(fields::DEFAULT, fixtures::equipment_icons());

    let html = renderer.render(&HashMap::new());

    assert_eq!(html.matches("acf-icon-item").count(), 3);
    assert_eq!(html.matches("<img").count(), 3);
}

#[test]
fn skips_malformed_entries_keeping_order() {
    init_tracing();
    let renderer = renderer_with_field(fields::DEFAULT, fixtures::mixed_icons());

    let html = renderer.render(&HashMap::new());

    assert_eq!(html.matches("acf-icon-item").count(), 2);
    let a = html.find("/uploads/icons/a.svg").expect("first entry rendered");
    let b = html.find("/uploads/icons/b.svg").expect("last entry rendered");
    assert!(a < b);
    assert!(!html.contains("missing-label"));
}

#[test]
fn missing_field_renders_placeholder_comment_only() {
    init_tracing();
    let renderer = IconListRenderer::new(Arc::new(InMemoryFieldSource::new()));

    let html = renderer.render(&atts(&[("field", fields::MISSING)]));

    assert_eq!(html, "<!-- acf-icons: field \"no_such_field\" is empty -->");
}

#[test]
fn non_list_field_value_renders_placeholder() {
    init_tracing();
    let renderer = renderer_with_field(fields::DEFAULT, serde_json::json!({"value": "x"}));

    let html = renderer.render(&HashMap::new());

    assert!(html.starts_with("<!--"));
    assert!(!html.contains("<div"));
}

#[test]
fn wrapper_carries_layout_display_and_size() {
    init_tracing();
    let renderer = renderer_with_field(fields::DEFAULT, fixtures::equipment_icons());

    let html = renderer.render(&atts(&[
        ("layout", "vertical"),
        ("display", "label"),
        ("size", "64"),
    ]));

    assert!(html.contains("acf-icons-wrapper"));
    assert!(html.contains("layout-vertical"));
    assert!(html.contains("display-label"));
    assert!(html.contains("acf-icons-komplekt-vertical-label"));
    assert!(html.contains("--icon-size: 64px;"));
}

#[test]
fn instance_class_distinguishes_fields_on_one_page() {
    init_tracing();
    let mut source = InMemoryFieldSource::new();
    source.set(fields::DEFAULT, fixtures::equipment_icons());
    source.set(fields::FEATURES, fixtures::equipment_icons());
    let renderer = IconListRenderer::new(Arc::new(source));

    let first = renderer.render(&HashMap::new());
    let second = renderer.render(&atts(&[("field", fields::FEATURES)]));

    assert!(first.contains("acf-icons-komplekt-horizontal-tooltip"));
    assert!(second.contains("acf-icons-features-horizontal-tooltip"));
}

#[test]
fn size_is_clamped_at_both_bounds() {
    init_tracing();
    let renderer = renderer_with_field(fields::DEFAULT, fixtures::equipment_icons());

    let low = renderer.render(&atts(&[("size", "3")]));
    let high = renderer.render(&atts(&[("size", "1000")]));
    let inside = renderer.render(&atts(&[("size", "120")]));

    assert!(low.contains("--icon-size: 10px;"));
    assert!(high.contains("--icon-size: 200px;"));
    assert!(inside.contains("--icon-size: 120px;"));
}

#[test]
fn unrecognized_parameters_fall_back_to_defaults() {
    init_tracing();
    let renderer = renderer_with_field(fields::DEFAULT, fixtures::equipment_icons());

    let html = renderer.render(&atts(&[
        ("layout", "sideways"),
        ("display", "banner"),
        ("size", "huge"),
    ]));

    assert!(html.contains("layout-horizontal"));
    assert!(html.contains("display-tooltip"));
    assert!(html.contains("--icon-size: 28px;"));
}

#[test]
fn caption_position_follows_label_position() {
    init_tracing();
    let renderer = renderer_with_field(
        fields::DEFAULT,
        serde_json::json!([{"value": "/a.svg", "label": "A"}]),
    );

    let top = renderer.render(&atts(&[("display", "label"), ("label_position", "top")]));
    let bottom = renderer.render(&atts(&[("display", "label"), ("label_position", "bottom")]));

    assert!(top.find("acf-icon-label").unwrap() < top.find("<img").unwrap());
    assert!(bottom.find("<img").unwrap() < bottom.find("acf-icon-label").unwrap());
}

#[test]
fn hostile_field_data_is_fully_escaped() {
    init_tracing();
    let renderer = renderer_with_field(fields::DEFAULT, fixtures::hostile_icons());

    for mode in [
        vec![],
        vec![("display", "label")],
        vec![("display", "label"), ("label_position", "top")],
    ] {
        let html = renderer.render(&atts(&mode));

        assert!(!html.contains("<b>"), "raw markup leaked: {html}");
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; &quot;quoted&quot;"));
        assert!(html.contains("/up%20loads/%22x%22.svg"));
    }
}

#[test]
fn vertical_layout_with_undersized_icons_end_to_end() {
    init_tracing();
    let renderer = renderer_with_field(
        fields::DEFAULT,
        serde_json::json!([{"value": "/a.svg", "label": "A"}]),
    );

    let html = renderer.render(&atts(&[
        ("field", "komplekt"),
        ("layout", "vertical"),
        ("size", "9"),
    ]));

    assert!(html.contains("layout-vertical"));
    assert!(html.contains("--icon-size: 10px;"));
    assert_eq!(html.matches(r#"data-tooltip="A""#).count(), 1);
    assert!(html.contains(r#"<img src="/a.svg" alt="A" class="acf-icon">"#));
}

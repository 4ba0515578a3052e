//! acf-icons - icon-list shortcode renderer
//!
//! Renders a multi-value custom field (icon/label pairs) as an HTML list
//! with tooltips or captions, and declares the matching element schema to
//! a visual page builder. Host surfaces are consumed through the traits
//! in [`plugin`].

pub mod assets;
pub mod editor;
pub mod error;
pub mod models;
pub mod plugin;
pub mod services;

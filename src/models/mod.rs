pub mod config;
pub mod icon;
pub mod params;

pub use config::{PluginConfig, StyleDelivery};
pub use icon::IconEntry;
pub use params::{DisplayMode, LabelPosition, Layout, RenderParams};

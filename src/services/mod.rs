pub mod escape;
pub mod field_source;
pub mod renderer;

pub use field_source::{FieldSource, InMemoryFieldSource};
pub use renderer::IconListRenderer;

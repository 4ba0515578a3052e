pub mod provider;
pub mod schema;

pub use provider::{InMemorySchemaRegistry, SchemaRegistry, VisualEditorSchemaProvider};
pub use schema::{DropdownOption, ElementSchema, ParamDependency, ParamDescriptor, ParamKind};

//! Framework adapters for variant-driven components.
//!
//! This crate sits between callers that pass variant props and the rendering
//! primitive that expects a single class-bearing prop. It strips variant
//! props, merges resolved classes with caller classes, and can render the
//! result as static markup.

pub mod element;
pub mod inline;
pub mod preact;
pub mod props;
pub mod react;
pub mod registry;
pub mod styled;
pub mod traits;
pub mod variant_props;

pub use element::Element;
pub use inline::{parse_inline_jsx, InlineJsx};
pub use preact::PreactAdapter;
pub use props::{props, PropValue, Props};
pub use react::ReactAdapter;
pub use registry::{ComponentDefinition, ComponentRegistry, RegisteredComponent, RegistryError};
pub use styled::{Styled, StyledConfig};
pub use traits::{adapter_for, FrameworkAdapter};
pub use variant_props::{ClassAttribute, VariantProps};

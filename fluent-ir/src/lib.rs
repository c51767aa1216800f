//! Declaration model for the fluentgen builder generator.
//!
//! These types describe what the extractor found in a source file and are
//! the only input the builder synthesizer looks at. They are plain data:
//! built once, never mutated.

mod declaration;
mod source;
mod types;

pub use declaration::{Declaration, DeclarationKind, Field};
pub use source::{ShapeSource, module_specifier};
pub use types::{Primitive, ResolvedType, TypeDescription, TypeKind};

//! TypeScript AST builders for classes, functions, type aliases, imports
//! and exports.
//!
//! Each node implements [`Renderable`](fluentgen_codegen::builder::Renderable)
//! and can be emitted through a `CodeBuilder`.

mod class;
mod exports;
mod fns;
mod imports;
mod types;

pub use class::{Class, Method, Property};
pub use exports::Export;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use types::TypeAlias;

//! TypeScript emitter for the fluentgen builder generator.
//!
//! For every declaration a [`ShapeSource`](fluentgen_ir::ShapeSource)
//! reports, the generator writes a `<Name>Builder.ts` unit holding a fluent
//! builder class and its `a<Name>Builder` factory.
//!
//! ```ignore
//! use fluentgen_codegen_typescript::{Generator, LanguageCodegen};
//! use fluentgen_core::Config;
//! use fluentgen_source::SourceFile;
//! use std::path::Path;
//!
//! let source = SourceFile::open("schema.ts")?;
//! let config = Config::default();
//! let generator = Generator::new(&source, &config);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("builders"))?;
//! ```
//!
//! # Generated Output
//!
//! - `<Name>Builder.ts` - one per declaration with fields
//! - the input file, copied unmodified
//! - `deep-partial.ts` - the recursive-partial marker, unless configured to
//!   import it from another module
//! - `index.ts` - re-exports every builder unit

mod code_file;
mod generator;
mod naming;
mod renderer;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use fluentgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::{TS_NAMING, property_access};
pub use renderer::{BuilderRenderer, DEEP_PARTIAL_MODULE};

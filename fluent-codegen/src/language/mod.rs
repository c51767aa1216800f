//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - main trait for language backends
//! - [`NamingConvention`] - reserved-word rules
//! - [`GenerateResult`] - result of code generation
//! - [`PreviewFile`] - generated file preview

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};

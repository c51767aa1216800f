//! Builder synthesis and shared code generation utilities for fluentgen.
//!
//! # Module Organization
//!
//! - [`builder`] - code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - backend abstractions (LanguageCodegen, NamingConvention, etc.)
//! - [`synth`] - declaration to builder specification

pub mod builder;
pub mod language;
pub mod synth;

mod diagnostic;

pub use diagnostic::Diagnostic;
pub use synth::{BuilderSpec, Synthesis, Synthesizer};

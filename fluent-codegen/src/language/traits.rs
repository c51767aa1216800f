//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

use crate::Diagnostic;

/// A backend that turns extracted declarations into builder units.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Number of declarations the source reported
    pub declarations: usize,
    /// Class names of the builders written
    pub builders: Vec<String>,
    /// Declarations that produced no builder
    pub skipped: Vec<String>,
    /// Diagnostics collected while synthesizing
    pub diagnostics: Vec<Diagnostic>,
    /// Every file written, relative to the output directory
    pub files: Vec<String>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    pub content: String,
}

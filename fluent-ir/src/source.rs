//! The shape-source seam between the extractor and the generator.

use crate::Declaration;

/// File suffixes stripped when turning a file name into an import path.
const SOURCE_SUFFIXES: &[&str] = &[".d.ts", ".tsx", ".mts", ".cts", ".ts"];

/// Something that can enumerate the structural declarations of one
/// source file.
///
/// The generator only ever talks to a source through this trait, so any
/// type-introspection backend can stand in for the bundled parser.
pub trait ShapeSource {
    /// File name of the source, used when copying it next to the output.
    fn file_name(&self) -> &str;

    /// Original source text, copied unmodified.
    fn text(&self) -> &str;

    /// Declarations in extraction order: aliases first, then interfaces.
    fn declarations(&self) -> Vec<Declaration>;

    /// Relative import path of the copied source (e.g., `./schema`).
    fn module_specifier(&self) -> String {
        module_specifier(self.file_name())
    }
}

/// Relative import path for a file sitting in the same directory.
pub fn module_specifier(file_name: &str) -> String {
    let stem = SOURCE_SUFFIXES
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .unwrap_or(file_name);
    format!("./{}", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_specifier() {
        assert_eq!(module_specifier("schema.ts"), "./schema");
        assert_eq!(module_specifier("types.d.ts"), "./types");
        assert_eq!(module_specifier("view.tsx"), "./view");
        assert_eq!(module_specifier("plain"), "./plain");
    }
}

//! Summary of a generation run.

use std::path::{Path, PathBuf};

use fluentgen_codegen::language::GenerateResult;

use super::output::{Output, Report};

/// What a run found and wrote.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub result: GenerateResult,
}

impl GenerateReport {
    pub fn new(output_dir: &Path, result: GenerateResult) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            result,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let result = &self.result;

        for diagnostic in &result.diagnostics {
            out.diagnostic(&diagnostic.to_string());
        }

        out.key_value("Declarations", &result.declarations.to_string());
        out.newline();

        out.section(&format!("Builders ({})", result.builders.len()));
        for name in &result.builders {
            out.added_item(&format!("{}.ts", name));
        }

        if !result.skipped.is_empty() {
            out.newline();
            out.section(&format!("Skipped ({})", result.skipped.len()));
            for name in &result.skipped {
                out.removed_item(name);
            }
        }

        out.newline();
        out.key_value("Generated", &format!("{}/", self.output_dir.display()));
    }
}

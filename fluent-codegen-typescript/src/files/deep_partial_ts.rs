//! deep-partial.ts: the recursive-partial marker type.

use std::path::{Path, PathBuf};

use fluentgen_core::GeneratedFile;

use crate::{ast::TypeAlias, code_file::CodeFile, renderer::DEEP_PARTIAL_MODULE};

pub struct DeepPartialTs {
    name: String,
}

impl DeepPartialTs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for DeepPartialTs {
    fn path(&self, base: &Path) -> PathBuf {
        let stem = DEEP_PARTIAL_MODULE.trim_start_matches("./");
        base.join(format!("{}.ts", stem))
    }

    fn render(&self) -> String {
        let name = &self.name;
        let body = [
            "T extends (infer U)[]".to_string(),
            format!("  ? {}<U>[]", name),
            "  : T extends object".to_string(),
            format!("    ? {{ [K in keyof T]?: {}<T[K]> }}", name),
            "    : T".to_string(),
        ]
        .join("\n");

        CodeFile::new()
            .add(
                TypeAlias::new(name, body)
                    .param("T")
                    .doc("Makes every property optional, at every depth."),
            )
            .render()
    }
}

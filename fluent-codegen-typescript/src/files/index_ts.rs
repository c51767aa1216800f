//! index.ts re-exporting every builder unit.

use std::path::{Path, PathBuf};

use fluentgen_core::GeneratedFile;

use crate::{ast::Export, code_file::CodeFile};

pub struct IndexTs {
    modules: Vec<String>,
}

impl IndexTs {
    /// Re-export the given builder classes, sorted by name.
    pub fn new(class_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut modules: Vec<String> = class_names.into_iter().map(Into::into).collect();
        modules.sort();
        modules.dedup();
        Self { modules }
    }
}

impl GeneratedFile for IndexTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn render(&self) -> String {
        if self.modules.is_empty() {
            return CodeFile::new().export(Export::new()).render();
        }
        CodeFile::new()
            .exports(
                self.modules
                    .iter()
                    .map(|m| Export::new().from(format!("./{}", m))),
            )
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_re_exports() {
        let index = IndexTs::new(["UserBuilder", "AddressBuilder"]);
        assert_eq!(
            index.render(),
            "export * from \"./AddressBuilder\";\nexport * from \"./UserBuilder\";\n"
        );
        assert_eq!(index.path(Path::new("out")), PathBuf::from("out/index.ts"));
    }

    #[test]
    fn test_empty_index_is_a_module() {
        let index = IndexTs::new(Vec::<String>::new());
        assert_eq!(index.render(), "export {};\n");
    }
}

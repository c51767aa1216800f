//! `<ClassName>.ts`: one builder class and its factory.

use std::path::{Path, PathBuf};

use fluentgen_codegen::BuilderSpec;
use fluentgen_core::GeneratedFile;

use crate::renderer::BuilderRenderer;

pub struct BuilderTs<'a> {
    spec: &'a BuilderSpec,
    renderer: &'a BuilderRenderer,
}

impl<'a> BuilderTs<'a> {
    pub fn new(spec: &'a BuilderSpec, renderer: &'a BuilderRenderer) -> Self {
        Self { spec, renderer }
    }

    /// File name of the unit for a builder class.
    pub fn file_name(class_name: &str) -> String {
        format!("{}.ts", class_name)
    }
}

impl GeneratedFile for BuilderTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::file_name(&self.spec.class_name))
    }

    fn render(&self) -> String {
        self.renderer.file(self.spec).render()
    }
}

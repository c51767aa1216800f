//! TypeScript builder generator.

use std::{collections::HashSet, path::Path};

use eyre::{Result, bail};
use fluentgen_codegen::{
    BuilderSpec, Diagnostic, Synthesis, Synthesizer,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use fluentgen_core::{Config, File, GeneratedFile};
use fluentgen_ir::ShapeSource;
use rayon::prelude::*;

use crate::{
    files::{BuilderTs, DeepPartialTs, IndexTs},
    renderer::BuilderRenderer,
};

/// Generates one builder unit per declaration of a [`ShapeSource`].
pub struct Generator<'a, S> {
    source: &'a S,
    config: &'a Config,
}

/// Synthesis results for every declaration of the source.
struct Plan {
    declarations: usize,
    builders: Vec<BuilderSpec>,
    skipped: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<S: ShapeSource> LanguageCodegen for Generator<'_, S> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let plan = self.plan();
        let renderer = self.renderer();
        self.files(&plan, &renderer)
            .iter()
            .map(|file| PreviewFile {
                path: relative_path(file.as_ref()),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a, S: ShapeSource> Generator<'a, S> {
    pub fn new(source: &'a S, config: &'a Config) -> Self {
        Self { source, config }
    }

    fn renderer(&self) -> BuilderRenderer {
        BuilderRenderer::new(self.config, self.source.module_specifier())
    }

    fn plan(&self) -> Plan {
        let synthesizer = Synthesizer::new(self.config);
        let declarations = self.source.declarations();

        let mut plan = Plan {
            declarations: declarations.len(),
            builders: Vec::new(),
            skipped: Vec::new(),
            diagnostics: Vec::new(),
        };

        for declaration in &declarations {
            match synthesizer.synthesize(declaration) {
                Synthesis::Builder(spec) => {
                    tracing::debug!(
                        declaration = %declaration.name,
                        class = %spec.class_name,
                        setters = spec.setters.len(),
                        "synthesized builder"
                    );
                    plan.builders.push(spec);
                }
                Synthesis::Skipped(diagnostic) => {
                    match &diagnostic {
                        Some(d) => tracing::debug!(
                            declaration = %declaration.name,
                            phase = %d.phase,
                            "skipping declaration: {}",
                            d.message
                        ),
                        None => tracing::debug!(
                            declaration = %declaration.name,
                            "skipping declaration without fields"
                        ),
                    }
                    plan.skipped.push(declaration.name.clone());
                    plan.diagnostics.extend(diagnostic);
                }
            }
        }

        plan
    }

    /// Every output unit: the source copy, builders, the partial helper
    /// (unless imported from elsewhere) and the index.
    fn files<'p>(
        &'p self,
        plan: &'p Plan,
        renderer: &'p BuilderRenderer,
    ) -> Vec<Box<dyn GeneratedFile + 'p>> {
        let mut files: Vec<Box<dyn GeneratedFile + 'p>> = Vec::new();

        files.push(Box::new(File::new(
            self.source.file_name(),
            self.source.text(),
        )));

        for spec in &plan.builders {
            files.push(Box::new(BuilderTs::new(spec, renderer)));
        }

        if self.config.partial_module.is_none() {
            files.push(Box::new(DeepPartialTs::new(&self.config.partial_type)));
        }

        files.push(Box::new(IndexTs::new(
            plan.builders.iter().map(|s| s.class_name.as_str()),
        )));

        files
    }

    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let plan = self.plan();
        let renderer = self.renderer();
        let files = self.files(&plan, &renderer);

        let names: Vec<String> = files.iter().map(|f| relative_path(f.as_ref())).collect();
        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                bail!(
                    "'{}' would be written twice; rename the input file or the declaration",
                    name
                );
            }
        }

        files
            .par_iter()
            .map(|file| file.write(output_dir))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            output = %output_dir.display(),
            builders = plan.builders.len(),
            skipped = plan.skipped.len(),
            files = names.len(),
            "wrote builders"
        );
        drop(files);

        Ok(GenerateResult {
            declarations: plan.declarations,
            builders: plan.builders.into_iter().map(|s| s.class_name).collect(),
            skipped: plan.skipped,
            diagnostics: plan.diagnostics,
            files: names,
        })
    }
}

fn relative_path(file: &dyn GeneratedFile) -> String {
    file.path(Path::new("")).display().to_string()
}

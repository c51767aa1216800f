use std::{convert::Infallible, path::Path, str::FromStr};

use fluentgen_ir::{Declaration, ShapeSource};

use crate::{
    error::{Error, Result},
    parser::parse,
    resolve::Resolver,
    syntax::Module,
};

/// A parsed TypeScript source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    file_name: String,
    text: String,
    module: Module,
    strict_null_checks: bool,
}

impl FromStr for SourceFile {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(Self::parse("schema.ts", s))
    }
}

impl SourceFile {
    /// Read and parse the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::parse(file_name, text))
    }

    /// Parse `text` as a file called `file_name`.
    ///
    /// Never fails: syntax the reader does not understand is skipped.
    pub fn parse(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let text = text.into();
        let module = parse(&text);
        tracing::debug!(
            file = %file_name,
            aliases = module.aliases.len(),
            interfaces = module.interfaces.len(),
            enums = module.enums.len(),
            "parsed source"
        );
        Self {
            file_name,
            text,
            module,
            strict_null_checks: true,
        }
    }

    /// Resolve optional properties with or without strict null checks.
    pub fn with_strict_null_checks(mut self, strict: bool) -> Self {
        self.strict_null_checks = strict;
        self
    }
}

impl ShapeSource for SourceFile {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn declarations(&self) -> Vec<Declaration> {
        Resolver::new(&self.module, self.module_specifier(), self.strict_null_checks).extract()
    }
}

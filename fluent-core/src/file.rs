use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file.
///
/// Implementors must be shareable across threads: an output batch is
/// written in parallel.
pub trait GeneratedFile: Send + Sync {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, returning the path written.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// A file with fixed content, written verbatim.
pub struct File {
    name: PathBuf,
    content: String,
}

impl File {
    /// Create a file at `name` (relative to the output directory).
    pub fn new(name: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Get the relative file name
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for File {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

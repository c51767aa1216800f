use std::path::Path;

use fluentgen_core::{CONFIG_FILE_NAME, Config};

use crate::error::{Error, Result, SourceContext};

/// Load `fluentgen.toml` from the directory containing `input`.
///
/// A missing file yields the default settings.
pub fn discover_config(input: impl AsRef<Path>) -> Result<Config> {
    let dir = input
        .as_ref()
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let path = dir.join(CONFIG_FILE_NAME);

    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|e| {
        Box::new(Error::Io {
            path: path.clone(),
            source: e,
        })
    })?;
    let ctx = SourceContext::new(content.as_str(), path.display().to_string());
    let config = toml::from_str(&content).map_err(|e| ctx.config_error(e))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(config)
}

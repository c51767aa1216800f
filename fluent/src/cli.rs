use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use fluentgen_codegen_typescript::{Generator, LanguageCodegen};
use fluentgen_source::{SourceFile, discover_config};

use crate::reports::{GenerateReport, Report, TerminalOutput};

/// Extension trait for exiting on source errors with pretty formatting
trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for fluentgen_source::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "fluentgen")]
#[command(version)]
#[command(about = "Generate fluent builders from TypeScript type declarations")]
pub(crate) struct Cli {
    /// TypeScript file declaring the shapes
    pub input: PathBuf,

    /// Directory the builder units are written to
    pub output: PathBuf,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = discover_config(&self.input).unwrap_or_exit();
        let source = SourceFile::open(&self.input)
            .unwrap_or_exit()
            .with_strict_null_checks(config.strict_null_checks);

        std::fs::create_dir_all(&self.output).wrap_err_with(|| {
            format!("Failed to create output directory {}", self.output.display())
        })?;

        let generator = Generator::new(&source, &config);
        tracing::debug!(
            language = generator.language(),
            input = %self.input.display(),
            "generating"
        );

        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate builders")?;

        GenerateReport::new(&self.output, result).render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["fluentgen", "schema.ts", "out"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("schema.ts"));
        assert_eq!(cli.output, PathBuf::from("out"));

        assert!(Cli::try_parse_from(["fluentgen", "schema.ts"]).is_err());
        assert!(Cli::try_parse_from(["fluentgen", "a.ts", "out", "extra"]).is_err());
    }
}

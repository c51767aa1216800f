//! TypeScript export builder.

use fluentgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript export statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    from: Option<String>,
    named: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn build(&self) -> String {
        format!("{}\n", self.statement())
    }

    fn statement(&self) -> String {
        let named = self.named.join(", ");
        match &self.from {
            Some(from) if self.named.is_empty() => format!("export * from \"{}\";", from),
            Some(from) => format!("export {{ {} }} from \"{}\";", named, from),
            None if self.named.is_empty() => "export {};".to_string(),
            None => format!("export {{ {} }};", named),
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

//! TypeScript type alias builder.

use fluentgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `type Name<Params> = ...;` declarations.
///
/// A multi-line body is placed on its own indented lines after `=`.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    params: Vec<String>,
    body: Vec<String>,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            body: ty.into().lines().map(str::to_string).collect(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a type parameter.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn head(&self) -> String {
        if self.params.is_empty() {
            format!("export type {} =", self.name)
        } else {
            format!("export type {}<{}> =", self.name, self.params.join(", "))
        }
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.as_str()));
        }

        match self.body.as_slice() {
            [] => fragments.push(CodeFragment::line(format!("{} never;", self.head()))),
            [single] => fragments.push(CodeFragment::line(format!("{} {};", self.head(), single))),
            [init @ .., last] => fragments.push(CodeFragment::block(
                self.head(),
                init.iter()
                    .map(CodeFragment::line)
                    .chain(std::iter::once(CodeFragment::line(format!("{};", last))))
                    .collect(),
                None,
            )),
        }

        fragments
    }
}

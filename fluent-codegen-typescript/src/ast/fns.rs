//! TypeScript function builder.

use fluentgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter of a function, method or constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    /// Default value expression (e.g., `{}`).
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// Comma-separated parameter list.
pub(crate) fn param_list(params: &[Param]) -> String {
    params
        .iter()
        .map(Param::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder for top-level TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn signature(&self) -> String {
        let params = param_list(&self.params);
        match &self.return_type {
            Some(ret) => format!("export function {}({}): {} {{", self.name, params, ret),
            None => format!("export function {}({}) {{", self.name, params),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self.body.iter().map(CodeFragment::line).collect();
        vec![CodeFragment::braced(self.signature(), body)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_function() {
        let f = Fn::new("aUserBuilder")
            .param(Param::new("instance", "DeepPartial<Types.User>").default_value("{}"))
            .returns("UserBuilder")
            .body_line("return new UserBuilder(instance);")
            .build();
        assert_eq!(
            f,
            concat!(
                "export function aUserBuilder(instance: DeepPartial<Types.User> = {}): ",
                "UserBuilder {\n",
                "  return new UserBuilder(instance);\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_empty_body() {
        let f = Fn::new("noop").build();
        assert_eq!(f, "export function noop() {\n}\n");
    }
}

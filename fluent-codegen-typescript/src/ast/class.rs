//! TypeScript class builder.

use fluentgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::fns::{Param, param_list};

/// A class property declaration.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    private: bool,
    readonly: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            private: false,
            readonly: false,
        }
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    fn declaration(&self) -> String {
        let private = if self.private { "private " } else { "" };
        let readonly = if self.readonly { "readonly " } else { "" };
        format!("{}{}{}: {};", private, readonly, self.name, self.ty)
    }
}

/// A method or constructor.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn constructor() -> Self {
        Self::new("constructor")
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

    fn signature(&self) -> String {
        let params = param_list(&self.params);
        match &self.return_type {
            Some(ret) => format!("{}({}): {} {{", self.name, params, ret),
            None => format!("{}({}) {{", self.name, params),
        }
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self.body.iter().map(CodeFragment::line).collect();
        vec![CodeFragment::braced(self.signature(), body)]
    }
}

/// Builder for TypeScript classes.
///
/// Members render in declaration order: properties, the constructor, then
/// methods, separated by blank lines.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    properties: Vec<Property>,
    constructor: Option<Method>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            constructor: None,
            methods: Vec::new(),
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn constructor(mut self, constructor: Method) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn members(&self) -> Vec<CodeFragment> {
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();

        if !self.properties.is_empty() {
            sections.push(
                self.properties
                    .iter()
                    .map(|p| CodeFragment::line(p.declaration()))
                    .collect(),
            );
        }
        if let Some(constructor) = &self.constructor {
            sections.push(constructor.to_fragments());
        }
        sections.extend(self.methods.iter().map(Method::to_fragments));

        let mut body = Vec::new();
        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(section);
        }
        body
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let members = self.members();
        if members.is_empty() {
            vec![CodeFragment::line(format!("export class {} {{}}", self.name))]
        } else {
            vec![CodeFragment::braced(
                format!("export class {} {{", self.name),
                members,
            )]
        }
    }
}

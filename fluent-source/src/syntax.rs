//! Syntax tree for the declaration subset of TypeScript.
//!
//! Only what the resolver needs survives parsing; constructs it never
//! inspects (tuples, function types, template literals, indexed access)
//! are kept as [`TypeExpr::Opaque`] source text.

/// Built-in type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    String,
    Number,
    Boolean,
    Any,
    Unknown,
    Undefined,
    Void,
    Null,
    Never,
    Object,
    Bigint,
    Symbol,
}

impl Keyword {
    pub fn from_ident(ident: &str) -> Option<Self> {
        let keyword = match ident {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "any" => Self::Any,
            "unknown" => Self::Unknown,
            "undefined" => Self::Undefined,
            "void" => Self::Void,
            "null" => Self::Null,
            "never" => Self::Never,
            "object" => Self::Object,
            "bigint" => Self::Bigint,
            "symbol" => Self::Symbol,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Undefined => "undefined",
            Self::Void => "void",
            Self::Null => "null",
            Self::Never => "never",
            Self::Object => "object",
            Self::Bigint => "bigint",
            Self::Symbol => "symbol",
        }
    }
}

/// A type expression as written.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Keyword(Keyword),
    /// String, numeric or boolean literal, in source form.
    Literal(String),
    /// A (possibly dotted) type name with optional type arguments.
    Reference { name: String, args: Vec<TypeExpr> },
    Object(Vec<Member>),
    Array(Box<TypeExpr>),
    Union(Vec<TypeExpr>),
    Intersection(Vec<TypeExpr>),
    Opaque(String),
}

impl TypeExpr {
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// A property or method signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub optional: bool,
    pub ty: TypeExpr,
}

/// `type Name = ...`
#[derive(Debug, Clone, PartialEq)]
pub struct AliasDecl {
    pub name: String,
    /// Declared with type parameters.
    pub generic: bool,
    pub ty: TypeExpr,
}

/// `interface Name extends ... { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub name: String,
    pub generic: bool,
    pub extends: Vec<TypeExpr>,
    pub members: Vec<Member>,
}

/// Top-level declarations of one file, each list in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub aliases: Vec<AliasDecl>,
    pub interfaces: Vec<InterfaceDecl>,
    pub enums: Vec<String>,
}

impl Module {
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.interfaces.is_empty() && self.enums.is_empty()
    }
}

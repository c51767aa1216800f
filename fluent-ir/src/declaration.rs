//! Structural declarations and their fields.

use crate::TypeDescription;

/// How a declaration was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `type Name = ...`
    Alias,
    /// `interface Name { ... }`
    Interface,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Alias => "type",
            DeclarationKind::Interface => "interface",
        }
    }
}

/// A named property of a declaration together with its resolved type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeDescription,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescription) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A top-level named structural declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    /// The declaration's own resolved type.
    pub ty: TypeDescription,
    /// Properties in the order the resolver reports them.
    pub fields: Vec<Field>,
}

impl Declaration {
    pub fn new(
        name: impl Into<String>,
        kind: DeclarationKind,
        ty: TypeDescription,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            ty,
            fields,
        }
    }

    /// Returns true if the declaration's root type is a union.
    pub fn is_union(&self) -> bool {
        self.ty.is_union()
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

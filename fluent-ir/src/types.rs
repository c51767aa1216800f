//! Resolved type descriptions.

/// Primitive classifications. Anything in this set is passed to a setter
/// as-is rather than through the recursive-partial wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    /// String or numeric literal.
    Literal,
    /// `true` or `false`.
    Boolean,
    Undefined,
    Null,
    Any,
    Enum,
}

/// Classification of a single resolved type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Primitive(Primitive),
    /// A nested structural shape (declared reference or inline object).
    Composite,
    /// An array; the element description is kept for one level of descent.
    Array(Box<TypeDescription>),
    /// The resolver could not classify the type; its text is used verbatim.
    Unresolved,
}

/// One resolved type with its textual rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedType {
    pub text: String,
    pub kind: TypeKind,
}

impl ResolvedType {
    pub fn new(text: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn primitive(text: impl Into<String>, primitive: Primitive) -> Self {
        Self::new(text, TypeKind::Primitive(primitive))
    }

    pub fn composite(text: impl Into<String>) -> Self {
        Self::new(text, TypeKind::Composite)
    }

    pub fn unresolved(text: impl Into<String>) -> Self {
        Self::new(text, TypeKind::Unresolved)
    }

    /// An array whose text is derived from its element.
    pub fn array(element: TypeDescription) -> Self {
        let text = if needs_parens(element.text()) {
            format!("({})[]", element.text())
        } else {
            format!("{}[]", element.text())
        };
        Self::new(text, TypeKind::Array(Box::new(element)))
    }

    /// The array element, if this is an array type.
    pub fn element(&self) -> Option<&TypeDescription> {
        match &self.kind {
            TypeKind::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Primitive classification. Unresolved types fall back to primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_) | TypeKind::Unresolved)
    }

    pub fn is_nullish(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Primitive(Primitive::Undefined | Primitive::Null)
        )
    }
}

/// Element texts that would bind wrongly in front of `[]`.
fn needs_parens(text: &str) -> bool {
    text.contains(" | ") || text.contains(" & ") || text.contains("=>")
}

/// A field or declaration type: a single resolved type or a union of them.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescription {
    Single(ResolvedType),
    Union {
        text: String,
        members: Vec<ResolvedType>,
    },
}

impl TypeDescription {
    pub fn single(ty: ResolvedType) -> Self {
        Self::Single(ty)
    }

    pub fn union(text: impl Into<String>, members: Vec<ResolvedType>) -> Self {
        Self::Union {
            text: text.into(),
            members,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Single(ty) => &ty.text,
            Self::Union { text, .. } => text,
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union { .. })
    }

    /// Constituent types; a non-union is a one-element union.
    pub fn constituents(&self) -> &[ResolvedType] {
        match self {
            Self::Single(ty) => std::slice::from_ref(ty),
            Self::Union { members, .. } => members,
        }
    }

    /// Primitive when every constituent is primitive.
    pub fn is_primitive(&self) -> bool {
        self.constituents().iter().all(ResolvedType::is_primitive)
    }
}

//! Text-free description of one builder unit.

/// One alternative of a setter's accepted type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeAlternative {
    /// Type text with module qualifiers rewritten to the namespace alias.
    pub text: String,
    /// Wrap in the recursive-partial marker.
    pub partial: bool,
    /// Accept an array of the type.
    pub array: bool,
}

impl TypeAlternative {
    /// A primitive, non-array alternative.
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            partial: false,
            array: false,
        }
    }

    pub fn partial(text: impl Into<String>) -> Self {
        Self {
            partial: true,
            ..Self::bare(text)
        }
    }

    pub fn into_array(mut self) -> Self {
        self.array = true;
        self
    }

    pub(crate) fn is_bare(&self, text: &str) -> bool {
        !self.partial && !self.array && self.text == text
    }
}

/// The parameter type of a setter: alternatives joined as a union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedType {
    pub alternatives: Vec<TypeAlternative>,
}

impl AcceptedType {
    pub fn new(alternatives: Vec<TypeAlternative>) -> Self {
        Self { alternatives }
    }
}

/// `with<Field>(value)`: assigns one field and returns the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterSpec {
    pub method: String,
    /// Property name on the accumulator.
    pub field: String,
    pub accepted: AcceptedType,
}

/// Stamps the discriminator with the declaration name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMethodSpec {
    pub method: String,
    pub field: String,
    pub value: String,
}

/// Returns the accumulator as the full declared shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSpec {
    pub method: String,
}

/// Free function wrapping an optional seed in a new builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorySpec {
    pub name: String,
}

/// Everything needed to emit one builder class and its factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSpec {
    /// Name of the source declaration.
    pub name: String,
    pub class_name: String,
    /// Namespace-qualified declared type (e.g., `Types.User`).
    pub target: String,
    pub setters: Vec<SetterSpec>,
    pub tag: TagMethodSpec,
    pub accessor: AccessorSpec,
    pub factory: FactorySpec,
}

impl BuilderSpec {
    /// Setters plus the two fixed methods.
    pub fn method_count(&self) -> usize {
        self.setters.len() + 2
    }

    pub fn setter(&self, field: &str) -> Option<&SetterSpec> {
        self.setters.iter().find(|s| s.field == field)
    }
}

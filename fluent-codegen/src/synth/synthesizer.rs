//! Declaration to builder specification.

use std::sync::LazyLock;

use fluentgen_core::{Config, capitalize, is_identifier, to_pascal_case};
use fluentgen_ir::{Declaration, Field, Primitive, ResolvedType, TypeDescription, TypeKind};
use regex::Regex;

use super::{
    AcceptedType, AccessorSpec, BuilderSpec, FactorySpec, SetterSpec, TagMethodSpec,
    TypeAlternative,
};
use crate::Diagnostic;

const PHASE: &str = "synthesize";

/// `import("./schema").` style module qualifiers.
static MODULE_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\("[^"]*"\)\."#).expect("module qualifier pattern is valid")
});

/// Outcome of synthesizing one declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Synthesis {
    Builder(BuilderSpec),
    /// No builder; union roots carry a warning.
    Skipped(Option<Diagnostic>),
}

impl Synthesis {
    pub fn builder(&self) -> Option<&BuilderSpec> {
        match self {
            Synthesis::Builder(spec) => Some(spec),
            Synthesis::Skipped(_) => None,
        }
    }
}

/// Derives builder specifications from declarations.
///
/// Stateless apart from the naming settings, so one instance can serve
/// any number of declarations in any order.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    namespace: String,
    typename_field: String,
    tag_method: String,
    accessor_method: String,
}

impl Synthesizer {
    pub fn new(config: &Config) -> Self {
        Self {
            namespace: config.namespace.clone(),
            typename_field: config.typename_field.clone(),
            tag_method: config.tag_method.clone(),
            accessor_method: config.accessor_method.clone(),
        }
    }

    pub fn synthesize(&self, declaration: &Declaration) -> Synthesis {
        let name = &declaration.name;

        if declaration.fields.is_empty() {
            return Synthesis::Skipped(None);
        }
        if declaration.is_union() {
            let diagnostic = Diagnostic::warning(
                PHASE,
                format!("'{}' is a union type, no builder generated", name),
            )
            .at(name);
            return Synthesis::Skipped(Some(diagnostic));
        }

        let class_name = format!("{}Builder", name);
        let setters = declaration
            .fields
            .iter()
            .filter(|f| f.name != self.typename_field)
            .map(|f| self.setter(f))
            .collect();

        Synthesis::Builder(BuilderSpec {
            name: name.clone(),
            target: self.qualify(declaration.ty.text()),
            setters,
            tag: TagMethodSpec {
                method: self.tag_method.clone(),
                field: self.typename_field.clone(),
                value: name.clone(),
            },
            accessor: AccessorSpec {
                method: self.accessor_method.clone(),
            },
            factory: FactorySpec {
                name: format!("a{}", class_name),
            },
            class_name,
        })
    }

    fn setter(&self, field: &Field) -> SetterSpec {
        let suffix = if is_identifier(&field.name) {
            capitalize(&field.name)
        } else {
            to_pascal_case(&field.name)
        };
        SetterSpec {
            method: format!("with{}", suffix),
            field: field.name.clone(),
            accepted: self.accepted(&field.ty),
        }
    }

    /// Map every constituent, dropping bare `false` and repeats.
    pub fn accepted(&self, ty: &TypeDescription) -> AcceptedType {
        let mut alternatives: Vec<TypeAlternative> = Vec::new();
        for constituent in ty.constituents() {
            let alternative = self.alternative(constituent);
            if alternative.is_bare("false") || alternatives.contains(&alternative) {
                continue;
            }
            alternatives.push(alternative);
        }

        if alternatives.is_empty() {
            alternatives.push(TypeAlternative::bare("boolean"));
        }
        AcceptedType::new(alternatives)
    }

    fn alternative(&self, ty: &ResolvedType) -> TypeAlternative {
        if let Some(element) = ty.element() {
            return self.element_alternative(element).into_array();
        }

        if ty.is_primitive() {
            TypeAlternative::bare(self.primitive_text(ty))
        } else {
            TypeAlternative::partial(self.qualify(&ty.text))
        }
    }

    fn element_alternative(&self, element: &TypeDescription) -> TypeAlternative {
        match element {
            TypeDescription::Single(ty) if ty.is_primitive() => {
                TypeAlternative::bare(self.primitive_text(ty))
            }
            _ if element.is_primitive() => TypeAlternative::bare(self.qualify(element.text())),
            _ => TypeAlternative::partial(self.qualify(element.text())),
        }
    }

    /// Primitive rendering; a bare `true` widens to `boolean`.
    fn primitive_text(&self, ty: &ResolvedType) -> String {
        if ty.kind == TypeKind::Primitive(Primitive::Boolean) && ty.text == "true" {
            "boolean".to_string()
        } else {
            self.qualify(&ty.text)
        }
    }

    /// Rewrite module qualifiers to the namespace alias.
    fn qualify(&self, text: &str) -> String {
        let replacement = format!("{}.", self.namespace);
        MODULE_QUALIFIER
            .replace_all(text, regex::NoExpand(&replacement))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use fluentgen_ir::DeclarationKind;

    use super::*;

    fn synth() -> Synthesizer {
        Synthesizer::new(&Config::default())
    }

    fn string() -> TypeDescription {
        TypeDescription::single(ResolvedType::primitive("string", Primitive::String))
    }

    fn boolean() -> TypeDescription {
        TypeDescription::union(
            "boolean",
            vec![
                ResolvedType::primitive("false", Primitive::Boolean),
                ResolvedType::primitive("true", Primitive::Boolean),
            ],
        )
    }

    fn shape(name: &str) -> ResolvedType {
        ResolvedType::composite(format!("import(\"./schema\").{}", name))
    }

    fn declaration(name: &str, fields: Vec<Field>) -> Declaration {
        Declaration::new(
            name,
            DeclarationKind::Interface,
            TypeDescription::single(shape(name)),
            fields,
        )
    }

    fn accepted(ty: TypeDescription) -> Vec<TypeAlternative> {
        synth().accepted(&ty).alternatives
    }

    fn build(declaration: &Declaration) -> BuilderSpec {
        match synth().synthesize(declaration) {
            Synthesis::Builder(spec) => spec,
            other => panic!("Expected builder, got {:?}", other),
        }
    }

    #[test]
    fn test_setter_per_field_plus_fixed_methods() {
        let decl = declaration(
            "User",
            vec![
                Field::new("id", string()),
                Field::new("name", string()),
                Field::new("active", boolean()),
            ],
        );
        let spec = build(&decl);
        assert_eq!(spec.class_name, "UserBuilder");
        assert_eq!(spec.factory.name, "aUserBuilder");
        assert_eq!(spec.target, "Types.User");
        assert_eq!(spec.setters.len(), 3);
        assert_eq!(spec.method_count(), 5);

        let methods: Vec<_> = spec.setters.iter().map(|s| s.method.as_str()).collect();
        assert_eq!(methods, vec!["withId", "withName", "withActive"]);
        assert_eq!(spec.tag.method, "withTypename");
        assert_eq!(spec.tag.field, "__typename");
        assert_eq!(spec.tag.value, "User");
        assert_eq!(spec.accessor.method, "build");
    }

    #[test]
    fn test_tag_field_is_excluded() {
        let decl = declaration(
            "Node",
            vec![
                Field::new(
                    "__typename",
                    TypeDescription::single(ResolvedType::primitive(
                        "\"Node\"",
                        Primitive::Literal,
                    )),
                ),
                Field::new("id", string()),
            ],
        );
        let spec = build(&decl);
        assert_eq!(spec.setters.len(), 1);
        assert_eq!(spec.method_count(), 3);
        assert!(spec.setter("__typename").is_none());
    }

    #[test]
    fn test_zero_fields_skip_silently() {
        let decl = declaration("Empty", Vec::new());
        assert_eq!(synth().synthesize(&decl), Synthesis::Skipped(None));

        let alias = Declaration::new("Id", DeclarationKind::Alias, string(), Vec::new());
        assert!(synth().synthesize(&alias).builder().is_none());
    }

    #[test]
    fn test_union_root_skips_with_one_warning() {
        let decl = Declaration::new(
            "Shape",
            DeclarationKind::Alias,
            TypeDescription::union(
                "import(\"./schema\").Circle | import(\"./schema\").Square",
                vec![shape("Circle"), shape("Square")],
            ),
            vec![Field::new("kind", string())],
        );
        match synth().synthesize(&decl) {
            Synthesis::Skipped(Some(diagnostic)) => {
                assert_eq!(diagnostic.phase, "synthesize");
                assert!(diagnostic.message.contains("Shape"));
                assert_eq!(diagnostic.location.as_deref(), Some("Shape"));
            }
            other => panic!("Expected warning skip, got {:?}", other),
        }
    }

    #[test]
    fn test_string_field() {
        assert_eq!(accepted(string()), vec![TypeAlternative::bare("string")]);
    }

    #[test]
    fn test_composite_field_is_partial_and_namespaced() {
        let ty = TypeDescription::single(shape("Address"));
        assert_eq!(
            accepted(ty),
            vec![TypeAlternative::partial("Types.Address")]
        );
    }

    #[test]
    fn test_array_fields() {
        let tags = ResolvedType::array(string());
        assert_eq!(
            accepted(TypeDescription::single(tags)),
            vec![TypeAlternative::bare("string").into_array()]
        );

        let addresses = ResolvedType::array(TypeDescription::single(shape("Address")));
        assert_eq!(
            accepted(TypeDescription::single(addresses)),
            vec![TypeAlternative::partial("Types.Address").into_array()]
        );

        let flags = ResolvedType::array(boolean());
        assert_eq!(
            accepted(TypeDescription::single(flags)),
            vec![TypeAlternative::bare("boolean").into_array()]
        );
    }

    #[test]
    fn test_array_of_true_widens_element() {
        let element = TypeDescription::single(ResolvedType::primitive("true", Primitive::Boolean));
        let ty = TypeDescription::single(ResolvedType::array(element));
        assert_eq!(accepted(ty), vec![TypeAlternative::bare("boolean").into_array()]);

        let field = Field::new(
            "flags",
            TypeDescription::single(ResolvedType::array(TypeDescription::single(
                ResolvedType::primitive("true", Primitive::Boolean),
            ))),
        );
        let spec = build(&declaration("Switches", vec![field]));
        assert_eq!(
            spec.setter("flags").unwrap().accepted.alternatives,
            vec![TypeAlternative::bare("boolean").into_array()]
        );
    }

    #[test]
    fn test_array_of_mixed_union_is_partial() {
        let element = TypeDescription::union(
            "string | import(\"./schema\").Tag",
            vec![
                ResolvedType::primitive("string", Primitive::String),
                shape("Tag"),
            ],
        );
        let ty = TypeDescription::single(ResolvedType::array(element));
        assert_eq!(
            accepted(ty),
            vec![TypeAlternative::partial("string | Types.Tag").into_array()]
        );
    }

    #[test]
    fn test_boolean_union_accepts_boolean() {
        assert_eq!(accepted(boolean()), vec![TypeAlternative::bare("boolean")]);

        let true_false = TypeDescription::union(
            "boolean",
            vec![
                ResolvedType::primitive("true", Primitive::Boolean),
                ResolvedType::primitive("false", Primitive::Boolean),
            ],
        );
        assert_eq!(accepted(true_false), vec![TypeAlternative::bare("boolean")]);
    }

    #[test]
    fn test_false_only_widens_to_boolean() {
        let ty = TypeDescription::single(ResolvedType::primitive("false", Primitive::Boolean));
        assert_eq!(accepted(ty), vec![TypeAlternative::bare("boolean")]);
    }

    #[test]
    fn test_optional_boolean_keeps_undefined() {
        let ty = TypeDescription::union(
            "boolean | undefined",
            vec![
                ResolvedType::primitive("false", Primitive::Boolean),
                ResolvedType::primitive("true", Primitive::Boolean),
                ResolvedType::primitive("undefined", Primitive::Undefined),
            ],
        );
        assert_eq!(
            accepted(ty),
            vec![
                TypeAlternative::bare("boolean"),
                TypeAlternative::bare("undefined"),
            ]
        );
    }

    #[test]
    fn test_enum_and_unresolved_stay_bare() {
        let ty = TypeDescription::union(
            "import(\"./schema\").Role | Date",
            vec![
                ResolvedType::primitive("import(\"./schema\").Role", Primitive::Enum),
                ResolvedType::unresolved("Date"),
            ],
        );
        assert_eq!(
            accepted(ty),
            vec![TypeAlternative::bare("Types.Role"), TypeAlternative::bare("Date")]
        );
    }

    #[test]
    fn test_unresolved_text_is_namespaced() {
        let ty = TypeDescription::single(ResolvedType::unresolved(
            "Record<string, import(\"./schema\").Tag>",
        ));
        assert_eq!(
            accepted(ty),
            vec![TypeAlternative::bare("Record<string, Types.Tag>")]
        );
    }

    #[test]
    fn test_non_identifier_field_setter_name() {
        let decl = declaration(
            "Headers",
            vec![
                Field::new("content-type", string()),
                Field::new("42", string()),
            ],
        );
        let spec = build(&decl);
        assert_eq!(spec.setters[0].method, "withContentType");
        assert_eq!(spec.setters[0].field, "content-type");
        assert_eq!(spec.setters[1].method, "with42");
    }

    #[test]
    fn test_configured_names() {
        let config = Config {
            namespace: "Schema".to_string(),
            typename_field: "kind".to_string(),
            tag_method: "tagged".to_string(),
            accessor_method: "done".to_string(),
            ..Config::default()
        };
        let decl = declaration(
            "User",
            vec![
                Field::new("kind", string()),
                Field::new("home", TypeDescription::single(shape("Address"))),
            ],
        );
        let spec = match Synthesizer::new(&config).synthesize(&decl) {
            Synthesis::Builder(spec) => spec,
            other => panic!("Expected builder, got {:?}", other),
        };
        assert_eq!(spec.target, "Schema.User");
        assert_eq!(spec.setters.len(), 1);
        assert_eq!(
            spec.setters[0].accepted.alternatives,
            vec![TypeAlternative::partial("Schema.Address")]
        );
        assert_eq!(spec.tag.method, "tagged");
        assert_eq!(spec.tag.field, "kind");
        assert_eq!(spec.accessor.method, "done");
    }
}

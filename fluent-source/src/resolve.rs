//! Type resolution and declaration extraction.
//!
//! The resolver turns parsed declarations into [`Declaration`]s the way a
//! strict type checker reports them: properties in declaration order,
//! inherited members after own members, `boolean` as `false | true`, and
//! references to declarations of the same file qualified with the file's
//! module path.

use fluentgen_ir::{
    Declaration, DeclarationKind, Field, Primitive, ResolvedType, TypeDescription,
};
use indexmap::IndexMap;

use crate::syntax::{AliasDecl, InterfaceDecl, Keyword, Member, Module, TypeExpr};

/// A declared name, as seen from a type reference.
#[derive(Clone, Copy)]
enum Symbol<'m> {
    Alias(&'m AliasDecl),
    Interface(&'m InterfaceDecl),
    Enum,
}

/// Resolves the declarations of one parsed file.
pub struct Resolver<'m> {
    module: &'m Module,
    specifier: String,
    strict_null_checks: bool,
}

impl<'m> Resolver<'m> {
    pub fn new(module: &'m Module, specifier: impl Into<String>, strict_null_checks: bool) -> Self {
        Self {
            module,
            specifier: specifier.into(),
            strict_null_checks,
        }
    }

    /// Every non-generic alias in file order, then every non-generic
    /// interface in file order. A repeated name keeps its first declaration.
    pub fn extract(&self) -> Vec<Declaration> {
        let aliases = self
            .module
            .aliases
            .iter()
            .filter(|a| !a.generic)
            .map(|a| self.alias_declaration(a));
        let interfaces = self
            .module
            .interfaces
            .iter()
            .filter(|i| !i.generic)
            .map(|i| self.interface_declaration(i));

        let mut seen = IndexMap::new();
        for declaration in aliases.chain(interfaces) {
            if seen.contains_key(&declaration.name) {
                tracing::debug!(name = %declaration.name, "ignoring repeated declaration");
                continue;
            }
            tracing::debug!(
                name = %declaration.name,
                kind = declaration.kind.as_str(),
                fields = declaration.fields.len(),
                "extracted declaration"
            );
            seen.insert(declaration.name.clone(), declaration);
        }
        seen.into_values().collect()
    }

    fn alias_declaration(&self, alias: &AliasDecl) -> Declaration {
        let mut visiting = vec![alias.name.clone()];

        let (ty, fields) = match self.properties(&alias.ty, &mut visiting) {
            Some(fields) => (self.named(&alias.name), fields),
            None => {
                let ty = self.describe(&alias.ty, &mut visiting);
                let fields = if ty.is_union() {
                    self.common_properties(&alias.ty, &mut visiting)
                } else {
                    Vec::new()
                };
                (ty, fields)
            }
        };

        Declaration::new(&alias.name, DeclarationKind::Alias, ty, fields)
    }

    fn interface_declaration(&self, interface: &InterfaceDecl) -> Declaration {
        let mut visiting = vec![interface.name.clone()];
        let fields = self.interface_fields(interface, &mut visiting);
        Declaration::new(
            &interface.name,
            DeclarationKind::Interface,
            self.named(&interface.name),
            fields,
        )
    }

    fn named(&self, name: &str) -> TypeDescription {
        TypeDescription::single(ResolvedType::composite(self.qualify(name)))
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    fn lookup(&self, name: &str) -> Option<Symbol<'m>> {
        if let Some(alias) = self.module.aliases.iter().find(|a| a.name == name) {
            return Some(Symbol::Alias(alias));
        }
        if let Some(interface) = self.module.interfaces.iter().find(|i| i.name == name) {
            return Some(Symbol::Interface(interface));
        }
        self.module
            .enums
            .iter()
            .any(|e| e == name)
            .then_some(Symbol::Enum)
    }

    fn qualify(&self, name: &str) -> String {
        format!("import(\"{}\").{}", self.specifier, name)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Properties of an object-like type, or `None` for anything else
    /// (primitives, unions, unresolvable or cyclic references).
    fn properties(&self, ty: &TypeExpr, visiting: &mut Vec<String>) -> Option<Vec<Field>> {
        match ty {
            TypeExpr::Object(members) => Some(self.member_fields(members, visiting)),
            TypeExpr::Reference { name, args } if args.is_empty() => {
                if visiting.contains(name) {
                    return None;
                }
                let symbol = self.lookup(name)?;
                visiting.push(name.clone());
                let fields = match symbol {
                    Symbol::Alias(alias) if !alias.generic => self.properties(&alias.ty, visiting),
                    Symbol::Interface(interface) if !interface.generic => {
                        Some(self.interface_fields(interface, visiting))
                    }
                    _ => None,
                };
                visiting.pop();
                fields
            }
            TypeExpr::Intersection(parts) => {
                let mut merged = IndexMap::new();
                for part in parts {
                    for field in self.properties(part, visiting)? {
                        merged.insert(field.name.clone(), field);
                    }
                }
                Some(merged.into_values().collect())
            }
            _ => None,
        }
    }

    /// Whether `ty` has properties, without resolving any member types.
    fn object_like(&self, ty: &TypeExpr) -> bool {
        self.is_object_like(ty, &mut Vec::new())
    }

    fn is_object_like(&self, ty: &TypeExpr, seen: &mut Vec<String>) -> bool {
        match ty {
            TypeExpr::Object(_) => true,
            TypeExpr::Reference { name, args } if args.is_empty() => {
                if seen.contains(name) {
                    return false;
                }
                match self.lookup(name) {
                    Some(Symbol::Interface(interface)) => !interface.generic,
                    Some(Symbol::Alias(alias)) if !alias.generic => {
                        seen.push(name.clone());
                        let object_like = self.is_object_like(&alias.ty, seen);
                        seen.pop();
                        object_like
                    }
                    _ => false,
                }
            }
            TypeExpr::Intersection(parts) => parts.iter().all(|p| self.is_object_like(p, seen)),
            _ => false,
        }
    }

    /// Own members first, then inherited members not redeclared.
    fn interface_fields(
        &self,
        interface: &InterfaceDecl,
        visiting: &mut Vec<String>,
    ) -> Vec<Field> {
        let mut fields: IndexMap<String, Field> = self
            .member_fields(&interface.members, visiting)
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect();

        for base in &interface.extends {
            for field in self.properties(base, visiting).unwrap_or_default() {
                fields.entry(field.name.clone()).or_insert(field);
            }
        }

        fields.into_values().collect()
    }

    fn member_fields(&self, members: &[Member], visiting: &mut Vec<String>) -> Vec<Field> {
        let mut fields: IndexMap<&str, Field> = IndexMap::new();
        for member in members {
            if fields.contains_key(member.name.as_str()) {
                continue;
            }
            let ty = self.member_type(member, visiting);
            fields.insert(member.name.as_str(), Field::new(&member.name, ty));
        }
        fields.into_values().collect()
    }

    fn member_type(&self, member: &Member, visiting: &mut Vec<String>) -> TypeDescription {
        let mut constituents = Vec::new();
        self.collect(&member.ty, &mut constituents, visiting);
        if member.optional {
            constituents.push(ResolvedType::primitive("undefined", Primitive::Undefined));
        }
        self.finish(constituents)
    }

    /// Properties shared by every member of a union of object types, each
    /// typed as the union of the members' property types.
    fn common_properties(&self, ty: &TypeExpr, visiting: &mut Vec<String>) -> Vec<Field> {
        let TypeExpr::Union(parts) = ty else {
            return match ty {
                TypeExpr::Reference { name, args } if args.is_empty() => match self.lookup(name) {
                    Some(Symbol::Alias(alias)) if !visiting.contains(name) => {
                        visiting.push(name.clone());
                        let fields = self.common_properties(&alias.ty, visiting);
                        visiting.pop();
                        fields
                    }
                    _ => Vec::new(),
                },
                _ => Vec::new(),
            };
        };

        let Some(shapes) = parts
            .iter()
            .map(|part| self.properties(part, visiting))
            .collect::<Option<Vec<_>>>()
        else {
            return Vec::new();
        };
        let Some((first, rest)) = shapes.split_first() else {
            return Vec::new();
        };

        first
            .iter()
            .filter_map(|field| {
                let mut constituents = field.ty.constituents().to_vec();
                for shape in rest {
                    let other = shape.iter().find(|f| f.name == field.name)?;
                    constituents.extend(other.ty.constituents().iter().cloned());
                }
                Some(Field::new(&field.name, self.finish(constituents)))
            })
            .collect()
    }

    // =========================================================================
    // Type descriptions
    // =========================================================================

    fn describe(&self, ty: &TypeExpr, visiting: &mut Vec<String>) -> TypeDescription {
        let mut constituents = Vec::new();
        self.collect(ty, &mut constituents, visiting);
        self.finish(constituents)
    }

    /// Flatten `ty` into union constituents.
    fn collect(&self, ty: &TypeExpr, out: &mut Vec<ResolvedType>, visiting: &mut Vec<String>) {
        match ty {
            TypeExpr::Union(parts) => {
                for part in parts {
                    self.collect(part, out, visiting);
                }
            }
            TypeExpr::Keyword(Keyword::Boolean) => {
                out.push(ResolvedType::primitive("false", Primitive::Boolean));
                out.push(ResolvedType::primitive("true", Primitive::Boolean));
            }
            TypeExpr::Reference { name, args } if args.is_empty() => {
                match self.lookup(name) {
                    // Aliases of non-object types resolve to their target.
                    Some(Symbol::Alias(alias))
                        if !alias.generic && !self.object_like(&alias.ty) =>
                    {
                        if visiting.contains(name) {
                            out.push(ResolvedType::unresolved(self.qualify(name)));
                            return;
                        }
                        visiting.push(name.clone());
                        self.collect(&alias.ty, out, visiting);
                        visiting.pop();
                    }
                    _ => out.push(self.resolve(ty, visiting)),
                }
            }
            _ => out.push(self.resolve(ty, visiting)),
        }
    }

    /// De-duplicate constituents and build the description.
    fn finish(&self, constituents: Vec<ResolvedType>) -> TypeDescription {
        let mut members: Vec<ResolvedType> = Vec::with_capacity(constituents.len());
        for ty in constituents {
            if !members.iter().any(|m| m.text == ty.text) {
                members.push(ty);
            }
        }

        if !self.strict_null_checks {
            let kept: Vec<_> = members.iter().filter(|m| !m.is_nullish()).cloned().collect();
            if !kept.is_empty() {
                members = kept;
            }
        }

        match members.len() {
            0 => TypeDescription::single(ResolvedType::unresolved("never")),
            1 => TypeDescription::single(members.remove(0)),
            _ => TypeDescription::union(union_text(&members), members),
        }
    }

    /// Resolve a single, non-union type.
    fn resolve(&self, ty: &TypeExpr, visiting: &mut Vec<String>) -> ResolvedType {
        match ty {
            TypeExpr::Keyword(keyword) => resolve_keyword(*keyword),
            TypeExpr::Literal(text) => match text.as_str() {
                "true" | "false" => ResolvedType::primitive(text, Primitive::Boolean),
                _ => ResolvedType::primitive(text, Primitive::Literal),
            },
            TypeExpr::Array(element) => ResolvedType::array(self.describe(element, visiting)),
            TypeExpr::Reference { name, args }
                if args.len() == 1 && (name == "Array" || name == "ReadonlyArray") =>
            {
                ResolvedType::array(self.describe(&args[0], visiting))
            }
            TypeExpr::Reference { name, args } => match self.lookup(name) {
                Some(Symbol::Enum) => ResolvedType::primitive(self.qualify(name), Primitive::Enum),
                Some(Symbol::Interface(interface)) if !interface.generic && args.is_empty() => {
                    ResolvedType::composite(self.qualify(name))
                }
                Some(Symbol::Alias(alias)) if !alias.generic && args.is_empty() => {
                    if self.object_like(&alias.ty) {
                        ResolvedType::composite(self.qualify(name))
                    } else {
                        ResolvedType::unresolved(self.qualify(name))
                    }
                }
                _ => ResolvedType::unresolved(self.print(ty)),
            },
            TypeExpr::Object(_) => ResolvedType::composite(self.print(ty)),
            TypeExpr::Intersection(_) => {
                if self.object_like(ty) {
                    ResolvedType::composite(self.print(ty))
                } else {
                    ResolvedType::unresolved(self.print(ty))
                }
            }
            TypeExpr::Union(_) => ResolvedType::unresolved(self.print(ty)),
            TypeExpr::Opaque(text) => ResolvedType::unresolved(text),
        }
    }

    // =========================================================================
    // Printing
    // =========================================================================

    /// Render a type expression with same-file names qualified.
    fn print(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Keyword(keyword) => keyword.as_str().to_string(),
            TypeExpr::Literal(text) | TypeExpr::Opaque(text) => text.clone(),
            TypeExpr::Reference { name, args } => {
                let base = if self.lookup(name).is_some() {
                    self.qualify(name)
                } else {
                    name.clone()
                };
                if args.is_empty() {
                    base
                } else {
                    let args: Vec<_> = args.iter().map(|a| self.print(a)).collect();
                    format!("{}<{}>", base, args.join(", "))
                }
            }
            TypeExpr::Object(members) if members.is_empty() => "{}".to_string(),
            TypeExpr::Object(members) => {
                let members: Vec<_> = members
                    .iter()
                    .map(|m| {
                        let optional = if m.optional { "?" } else { "" };
                        format!("{}{}: {};", property_name(&m.name), optional, self.print(&m.ty))
                    })
                    .collect();
                format!("{{ {} }}", members.join(" "))
            }
            TypeExpr::Array(element) => match element.as_ref() {
                TypeExpr::Union(_) | TypeExpr::Intersection(_) => {
                    format!("({})[]", self.print(element))
                }
                TypeExpr::Opaque(text) if text.contains("=>") => format!("({})[]", text),
                _ => format!("{}[]", self.print(element)),
            },
            TypeExpr::Union(parts) => parts
                .iter()
                .map(|p| self.print(p))
                .collect::<Vec<_>>()
                .join(" | "),
            TypeExpr::Intersection(parts) => parts
                .iter()
                .map(|p| match p {
                    TypeExpr::Union(_) => format!("({})", self.print(p)),
                    _ => self.print(p),
                })
                .collect::<Vec<_>>()
                .join(" & "),
        }
    }
}

fn resolve_keyword(keyword: Keyword) -> ResolvedType {
    let text = keyword.as_str();
    match keyword {
        Keyword::String => ResolvedType::primitive(text, Primitive::String),
        Keyword::Number => ResolvedType::primitive(text, Primitive::Number),
        Keyword::Boolean => ResolvedType::primitive(text, Primitive::Boolean),
        Keyword::Any | Keyword::Unknown => ResolvedType::primitive(text, Primitive::Any),
        Keyword::Undefined | Keyword::Void => ResolvedType::primitive(text, Primitive::Undefined),
        Keyword::Null => ResolvedType::primitive(text, Primitive::Null),
        Keyword::Never | Keyword::Object | Keyword::Bigint | Keyword::Symbol => {
            ResolvedType::unresolved(text)
        }
    }
}

/// Union text with `false | true` shown as `boolean`.
fn union_text(members: &[ResolvedType]) -> String {
    let has = |text: &str| members.iter().any(|m| m.text == text);
    let collapse = has("false") && has("true");

    let mut parts: Vec<&str> = Vec::with_capacity(members.len());
    for member in members {
        match member.text.as_str() {
            "false" | "true" if collapse => {
                if !parts.contains(&"boolean") {
                    parts.push("boolean");
                }
            }
            text => parts.push(text),
        }
    }
    parts.join(" | ")
}

fn property_name(name: &str) -> String {
    if fluentgen_core::is_identifier(name) || name.chars().all(|c| c.is_ascii_digit()) {
        name.to_string()
    } else {
        format!("{:?}", name)
    }
}

#[cfg(test)]
mod tests {
    use fluentgen_ir::TypeKind;

    use super::*;
    use crate::parser::parse;

    fn extract_with(src: &str, strict: bool) -> Vec<Declaration> {
        let module = parse(src);
        Resolver::new(&module, "./schema", strict).extract()
    }

    fn extract(src: &str) -> Vec<Declaration> {
        extract_with(src, true)
    }

    fn field<'a>(decl: &'a Declaration, name: &str) -> &'a TypeDescription {
        &decl.field(name).expect("field not found").ty
    }

    fn texts(ty: &TypeDescription) -> Vec<&str> {
        ty.constituents().iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_aliases_precede_interfaces() {
        let decls = extract(
            concat!(
                "interface A { a: string }\n",
                "type B = { b: string };\n",
                "interface C { c: string }\n",
                "type D = { d: string };",
            ),
        );
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["B", "D", "A", "C"]);
        assert_eq!(decls[0].kind, DeclarationKind::Alias);
        assert_eq!(decls[2].kind, DeclarationKind::Interface);
    }

    #[test]
    fn test_field_order_is_preserved() {
        let decls = extract("interface User { id: string; name: string; age: number }");
        let names: Vec<_> = decls[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "age"]);
    }

    #[test]
    fn test_primitive_fields() {
        let decls = extract("interface P { s: string; n: number; a: any; u: unknown; nil: null }");
        let p = &decls[0];
        assert_eq!(
            field(p, "s"),
            &TypeDescription::single(ResolvedType::primitive("string", Primitive::String))
        );
        assert_eq!(
            field(p, "n").constituents()[0].kind,
            TypeKind::Primitive(Primitive::Number)
        );
        assert_eq!(
            field(p, "u").constituents()[0].kind,
            TypeKind::Primitive(Primitive::Any)
        );
        assert_eq!(
            field(p, "nil").constituents()[0].kind,
            TypeKind::Primitive(Primitive::Null)
        );
    }

    #[test]
    fn test_boolean_is_a_literal_union() {
        let decls = extract("interface F { on: boolean; both: true | false; yes: true }");
        let f = &decls[0];
        assert_eq!(texts(field(f, "on")), vec!["false", "true"]);
        assert_eq!(field(f, "on").text(), "boolean");
        assert_eq!(texts(field(f, "both")), vec!["true", "false"]);
        assert_eq!(field(f, "both").text(), "boolean");
        assert!(!field(f, "yes").is_union());
    }

    #[test]
    fn test_optional_fields_include_undefined() {
        let decls = extract("interface O { name?: string; on?: boolean }");
        let o = &decls[0];
        assert_eq!(texts(field(o, "name")), vec!["string", "undefined"]);
        assert_eq!(field(o, "name").text(), "string | undefined");
        assert_eq!(field(o, "on").text(), "boolean | undefined");
    }

    #[test]
    fn test_non_strict_erases_nullish_members() {
        let decls = extract_with("interface O { name?: string; n: number | null; z: null }", false);
        let o = &decls[0];
        assert_eq!(texts(field(o, "name")), vec!["string"]);
        assert_eq!(texts(field(o, "n")), vec!["number"]);
        assert_eq!(texts(field(o, "z")), vec!["null"]);
    }

    #[test]
    fn test_declared_reference_is_composite_and_qualified() {
        let decls = extract("interface Address { city: string }\ninterface User { home: Address }");
        let home = field(&decls[1], "home");
        assert_eq!(
            home,
            &TypeDescription::single(ResolvedType::composite("import(\"./schema\").Address"))
        );
    }

    #[test]
    fn test_enum_reference_is_primitive() {
        let decls = extract("enum Role { Admin, Guest }\ninterface User { role: Role }");
        assert_eq!(
            field(&decls[0], "role").constituents()[0],
            ResolvedType::primitive("import(\"./schema\").Role", Primitive::Enum)
        );
    }

    #[test]
    fn test_undeclared_reference_is_unresolved() {
        let decls = extract("interface E { at: Date; tags: Record<string, Tag> }");
        let at = &field(&decls[0], "at").constituents()[0];
        assert_eq!(at.kind, TypeKind::Unresolved);
        assert_eq!(at.text, "Date");
        assert_eq!(field(&decls[0], "tags").text(), "Record<string, Tag>");
    }

    #[test]
    fn test_arrays() {
        let decls = extract(
            concat!(
                "interface Tag { label: string }\n",
                "interface A { names: string[]; tags: Array<Tag>; flags: readonly boolean[] }",
            ),
        );
        let a = &decls[1];

        let names = &field(a, "names").constituents()[0];
        assert_eq!(names.text, "string[]");
        assert_eq!(names.element().unwrap().text(), "string");

        let tags = &field(a, "tags").constituents()[0];
        assert_eq!(tags.text, "import(\"./schema\").Tag[]");
        assert_eq!(
            tags.element().unwrap().constituents()[0].kind,
            TypeKind::Composite
        );

        assert_eq!(field(a, "flags").text(), "boolean[]");
    }

    #[test]
    fn test_primitive_alias_resolves_through() {
        let decls = extract(
            concat!(
                "type Id = string;\n",
                "type Status = 'on' | 'off';\n",
                "interface R { id: Id; status?: Status }",
            ),
        );
        let r = decls.iter().find(|d| d.name == "R").unwrap();
        assert_eq!(texts(field(r, "id")), vec!["string"]);
        assert_eq!(texts(field(r, "status")), vec!["'on'", "'off'", "undefined"]);
    }

    #[test]
    fn test_non_object_aliases_have_no_fields() {
        let decls = extract("type Id = string;\ntype Status = 'on' | 'off';");
        assert!(decls.iter().all(|d| d.fields.is_empty()));
        assert!(!decls[0].is_union());
        assert!(decls[1].is_union());
    }

    #[test]
    fn test_union_root_of_objects_keeps_common_fields() {
        let decls = extract(
            concat!(
                "interface Circle { kind: 'circle'; r: number }\n",
                "interface Square { kind: 'square'; side: number }\n",
                "type Shape = Circle | Square;",
            ),
        );
        let shape = &decls[0];
        assert_eq!(shape.name, "Shape");
        assert!(shape.is_union());
        assert_eq!(shape.fields.len(), 1);
        assert_eq!(texts(field(shape, "kind")), vec!["'circle'", "'square'"]);
    }

    #[test]
    fn test_interface_inherits_after_own_members() {
        let decls = extract(
            concat!(
                "interface Base { id: string; name: string }\n",
                "interface User extends Base { name: number; email: string }",
            ),
        );
        let user = &decls[1];
        let names: Vec<_> = user.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "id"]);
        assert_eq!(texts(field(user, "name")), vec!["number"]);
    }

    #[test]
    fn test_alias_of_declared_shape_and_intersection() {
        let decls = extract(
            concat!(
                "interface Base { id: string }\n",
                "type Copy = Base;\n",
                "type Extended = Base & { extra: number };",
            ),
        );
        let copy = &decls[0];
        assert_eq!(copy.fields.len(), 1);
        assert_eq!(copy.ty.text(), "import(\"./schema\").Copy");

        let extended = &decls[1];
        let names: Vec<_> = extended.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "extra"]);
    }

    #[test]
    fn test_inline_object_is_composite() {
        let decls = extract("interface M { meta: { 'x-id': string; n?: number } }");
        let meta = &field(&decls[0], "meta").constituents()[0];
        assert_eq!(meta.kind, TypeKind::Composite);
        assert_eq!(meta.text, "{ \"x-id\": string; n?: number; }");
    }

    #[test]
    fn test_cycles_terminate() {
        let decls = extract(
            "type A = B;\ntype B = A;\ninterface Node { next: Node; children: Node[] }",
        );
        assert!(decls[0].fields.is_empty());
        let node = decls.iter().find(|d| d.name == "Node").unwrap();
        assert_eq!(
            field(node, "next").constituents()[0].kind,
            TypeKind::Composite
        );
    }

    #[test]
    fn test_self_referencing_alias() {
        let decls = extract("type Tree = { label: string; children?: Tree[] };");
        let children = field(&decls[0], "children");
        assert_eq!(
            texts(children),
            vec!["import(\"./schema\").Tree[]", "undefined"]
        );
        let element = children.constituents()[0].element().unwrap();
        assert_eq!(element.constituents()[0].kind, TypeKind::Composite);
    }

    #[test]
    fn test_generic_declarations_are_not_extracted() {
        let decls = extract("type Box<T> = { value: T };\ninterface User { box: Box<string> }");
        assert_eq!(decls.len(), 1);
        assert_eq!(
            field(&decls[0], "box").text(),
            "import(\"./schema\").Box<string>"
        );
    }

    #[test]
    fn test_repeated_declaration_keeps_first() {
        let decls = extract("interface A { a: string }\ninterface A { b: string }");
        assert_eq!(decls.len(), 1);
        assert!(decls[0].field("a").is_some());
    }
}

//! Rendering of builder specifications as TypeScript.

use fluentgen_codegen::synth::{AcceptedType, BuilderSpec, SetterSpec, TypeAlternative};
use fluentgen_core::Config;

use crate::{
    ast::{Class, Fn, Import, Method, Param, Property},
    code_file::CodeFile,
    naming::{TS_NAMING, property_access, string_literal},
};

/// Module of the generated partial helper, relative to the output directory.
pub const DEEP_PARTIAL_MODULE: &str = "./deep-partial";

const ACCUMULATOR: &str = "instance";

/// Renders [`BuilderSpec`]s into TypeScript units.
#[derive(Debug, Clone)]
pub struct BuilderRenderer {
    namespace: String,
    partial_type: String,
    partial_module: String,
    schema_module: String,
}

impl BuilderRenderer {
    /// `schema_module` is the import path of the copied source.
    pub fn new(config: &Config, schema_module: impl Into<String>) -> Self {
        Self {
            namespace: config.namespace.clone(),
            partial_type: config.partial_type.clone(),
            partial_module: config
                .partial_module
                .clone()
                .unwrap_or_else(|| DEEP_PARTIAL_MODULE.to_string()),
            schema_module: schema_module.into(),
        }
    }

    /// The whole `<ClassName>.ts` unit.
    pub fn file(&self, spec: &BuilderSpec) -> CodeFile {
        CodeFile::new()
            .import(Import::new(&self.schema_module).namespace(&self.namespace))
            .import(
                Import::new(&self.partial_module)
                    .named(&self.partial_type)
                    .type_only(),
            )
            .add(self.class(spec))
            .add(self.factory(spec))
    }

    pub fn class(&self, spec: &BuilderSpec) -> Class {
        let seed_type = self.partial(&spec.target);
        let this = format!("this.{}", ACCUMULATOR);

        let setters = spec.setters.iter().map(|s| self.setter(spec, s));

        let tag = Method::new(&spec.tag.method)
            .returns(&spec.class_name)
            .body_line(format!(
                "{} = {};",
                property_access(&format!("({} as any)", this), &spec.tag.field),
                string_literal(&spec.tag.value)
            ))
            .body_line("return this;");

        let accessor = Method::new(&spec.accessor.method)
            .returns(&spec.target)
            .body_line(format!("return {} as {};", this, spec.target));

        Class::new(&spec.class_name)
            .property(Property::new(ACCUMULATOR, &seed_type).private().readonly())
            .constructor(
                Method::constructor()
                    .param(Param::new(ACCUMULATOR, &seed_type).default_value("{}"))
                    .body_line(format!("{} = {};", this, ACCUMULATOR)),
            )
            .methods(setters)
            .method(tag)
            .method(accessor)
    }

    pub fn factory(&self, spec: &BuilderSpec) -> Fn {
        Fn::new(&spec.factory.name)
            .param(Param::new(ACCUMULATOR, self.partial(&spec.target)).default_value("{}"))
            .returns(&spec.class_name)
            .body_line(format!("return new {}({});", spec.class_name, ACCUMULATOR))
    }

    fn setter(&self, spec: &BuilderSpec, setter: &SetterSpec) -> Method {
        let param = TS_NAMING.param_name(&setter.field);
        let target = property_access(&format!("this.{}", ACCUMULATOR), &setter.field);

        Method::new(&setter.method)
            .param(Param::new(&param, self.accepted(&setter.accepted)))
            .returns(&spec.class_name)
            .body_line(format!("{} = {};", target, param))
            .body_line("return this;")
    }

    /// Parameter type text for a setter.
    pub fn accepted(&self, accepted: &AcceptedType) -> String {
        let several = accepted.alternatives.len() > 1;
        accepted
            .alternatives
            .iter()
            .map(|alt| {
                let text = self.alternative(alt);
                if several && !alt.partial && !alt.array && is_function_type(&text) {
                    format!("({})", text)
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn alternative(&self, alt: &TypeAlternative) -> String {
        let base = if alt.partial {
            self.partial(&alt.text)
        } else {
            alt.text.clone()
        };

        if !alt.array {
            base
        } else if !alt.partial && needs_parens(&base) {
            format!("({})[]", base)
        } else {
            format!("{}[]", base)
        }
    }

    fn partial(&self, text: &str) -> String {
        format!("{}<{}>", self.partial_type, text)
    }
}

fn is_function_type(text: &str) -> bool {
    text.contains("=>")
}

/// Element texts that would bind wrongly in front of `[]`.
fn needs_parens(text: &str) -> bool {
    text.contains(" | ") || text.contains(" & ") || is_function_type(text)
}

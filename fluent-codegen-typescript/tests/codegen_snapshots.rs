//! Snapshot tests for generated builder units.

use fluentgen_codegen_typescript::{Generator, LanguageCodegen};
use fluentgen_core::Config;
use fluentgen_source::SourceFile;

const SCHEMA: &str = r#"export interface Address {
  street: string;
  city?: string;
}

export interface User {
  __typename?: "User";
  id: string;
  active: boolean;
  address: Address;
  tags: string[];
}

export type Shape = { kind: "a" } | { kind: "b" };
"#;

fn source() -> SourceFile {
    SourceFile::parse("schema.ts", SCHEMA)
}

/// Generate with `config` and return files sorted by path.
fn preview(config: &Config) -> Vec<(String, String)> {
    let source = source();
    let generator = Generator::new(&source, config);
    let mut files: Vec<(String, String)> = generator
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_file_set() {
    let files = preview(&Config::default());
    let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "AddressBuilder.ts",
            "UserBuilder.ts",
            "deep-partial.ts",
            "index.ts",
            "schema.ts"
        ]
    );
    assert_eq!(get_file(&files, "schema.ts"), Some(SCHEMA));
}

#[test]
fn test_user_builder() {
    let files = preview(&Config::default());
    let user = get_file(&files, "UserBuilder.ts").expect("UserBuilder.ts not found");
    insta::assert_snapshot!(user, @r#"
import * as Types from "./schema";
import type { DeepPartial } from "./deep-partial";

export class UserBuilder {
  private readonly instance: DeepPartial<Types.User>;

  constructor(instance: DeepPartial<Types.User> = {}) {
    this.instance = instance;
  }

  withId(id: string): UserBuilder {
    this.instance.id = id;
    return this;
  }

  withActive(active: boolean): UserBuilder {
    this.instance.active = active;
    return this;
  }

  withAddress(address: DeepPartial<Types.Address>): UserBuilder {
    this.instance.address = address;
    return this;
  }

  withTags(tags: string[]): UserBuilder {
    this.instance.tags = tags;
    return this;
  }

  withTypename(): UserBuilder {
    (this.instance as any).__typename = "User";
    return this;
  }

  build(): Types.User {
    return this.instance as Types.User;
  }
}

export function aUserBuilder(instance: DeepPartial<Types.User> = {}): UserBuilder {
  return new UserBuilder(instance);
}
"#);
}

#[test]
fn test_optional_field_accepts_undefined() {
    let files = preview(&Config::default());
    let address = get_file(&files, "AddressBuilder.ts").expect("AddressBuilder.ts not found");
    assert!(address.contains("  withCity(city: string | undefined): AddressBuilder {\n"));
    assert!(address.contains("(this.instance as any).__typename = \"Address\";"));
}

#[test]
fn test_index_and_helper() {
    let files = preview(&Config::default());
    insta::assert_snapshot!(get_file(&files, "index.ts").unwrap(), @r#"
export * from "./AddressBuilder";
export * from "./UserBuilder";
"#);
    let helper = get_file(&files, "deep-partial.ts").unwrap();
    assert!(helper.starts_with(
        "/** Makes every property optional, at every depth. */\nexport type DeepPartial<T> =\n"
    ));
}

#[test]
fn test_configured_output() {
    let config = Config {
        namespace: "Schema".to_string(),
        partial_type: "RecursivePartial".to_string(),
        partial_module: Some("ts-essentials".to_string()),
        tag_method: "tagged".to_string(),
        accessor_method: "done".to_string(),
        ..Config::default()
    };
    let files = preview(&config);

    assert!(get_file(&files, "deep-partial.ts").is_none());
    let user = get_file(&files, "UserBuilder.ts").unwrap();
    assert!(user.starts_with(
        concat!(
            "import * as Schema from \"./schema\";\n",
            "import type { RecursivePartial } from \"ts-essentials\";\n",
        )
    ));
    assert!(
        user.contains("  withAddress(address: RecursivePartial<Schema.Address>): UserBuilder {\n")
    );
    assert!(user.contains("  tagged(): UserBuilder {\n"));
    assert!(user.contains("  done(): Schema.User {\n"));
}

#[test]
fn test_generate_writes_everything() {
    let dir = tempfile::tempdir().unwrap();
    let source = source();
    let config = Config::default();
    let result = Generator::new(&source, &config)
        .generate(dir.path())
        .unwrap();

    assert_eq!(result.declarations, 3);
    assert_eq!(result.builders, vec!["AddressBuilder", "UserBuilder"]);
    assert_eq!(result.skipped, vec!["Shape"]);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].location.as_deref(), Some("Shape"));

    for name in &result.files {
        assert!(dir.path().join(name).is_file(), "{} missing", name);
    }
    let copied = std::fs::read_to_string(dir.path().join("schema.ts")).unwrap();
    assert_eq!(copied, SCHEMA);
}

#[test]
fn test_generate_rejects_colliding_names() {
    let dir = tempfile::tempdir().unwrap();
    let source = SourceFile::parse("index.ts", "export interface A { a: string }");
    let config = Config::default();
    let err = Generator::new(&source, &config)
        .generate(dir.path())
        .unwrap_err();
    assert!(err.to_string().contains("index.ts"));
}

#[test]
fn test_no_declarations_still_writes_index() {
    let dir = tempfile::tempdir().unwrap();
    let source = SourceFile::parse("empty.ts", "export const x = 1;\n");
    let config = Config::default();
    let result = Generator::new(&source, &config)
        .generate(dir.path())
        .unwrap();

    assert!(result.builders.is_empty());
    let index = std::fs::read_to_string(dir.path().join("index.ts")).unwrap();
    assert_eq!(index, "export {};\n");
}

//! Generation settings.

use serde::Deserialize;

/// File name of the optional settings file, looked up next to the input.
pub const CONFIG_FILE_NAME: &str = "fluentgen.toml";

/// Settings that shape the generated builders.
///
/// Every key is optional; an absent settings file means [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Discriminator field stamped by the tag-injection method.
    pub typename_field: String,
    /// Namespace alias under which the original schema is imported.
    pub namespace: String,
    /// Treat optional properties as `T | undefined`.
    pub strict_null_checks: bool,
    /// Name of the recursive-partial marker type.
    pub partial_type: String,
    /// Import the partial marker from this module instead of generating it.
    pub partial_module: Option<String>,
    /// Name of the tag-injection method.
    pub tag_method: String,
    /// Name of the terminal accessor.
    pub accessor_method: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typename_field: "__typename".to_string(),
            namespace: "Types".to_string(),
            strict_null_checks: true,
            partial_type: "DeepPartial".to_string(),
            partial_module: None,
            tag_method: "withTypename".to_string(),
            accessor_method: "build".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.typename_field, "__typename");
        assert_eq!(config.namespace, "Types");
        assert!(config.strict_null_checks);
        assert!(config.partial_module.is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("namespace = \"Schema\"").unwrap();
        assert_eq!(config.namespace, "Schema");
        assert_eq!(config.accessor_method, "build");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<Config>("namespcae = \"Schema\"").is_err());
    }
}

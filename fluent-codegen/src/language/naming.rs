//! Naming conventions for emitted identifiers.

use fluentgen_core::is_identifier;

/// Reserved-word handling for one target language.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "_class")
    pub escape_reserved: fn(&str) -> String,
    /// Used when a property name is not a valid identifier at all.
    pub fallback_param: &'static str,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Parameter name for a setter of the property `field`.
    pub fn param_name(&self, field: &str) -> String {
        if is_identifier(field) {
            self.safe_name(field)
        } else {
            self.fallback_param.to_string()
        }
    }
}

//! Naming conventions for platform-module trees.

use std::collections::BTreeMap;

/// The fixed descriptor filename marking a platform module.
pub const MODULE_DESCRIPTOR: &str = "PlatformModule.xml";

/// The filename suffix marking a unit-test tree.
pub const TEST_SUFFIX: &str = ".spec.js";

/// The reserved leading character marking an escaped name.
pub const ESCAPE_CHAR: char = '$';

/// Naming conventions consulted by every tree operation.
///
/// Conventions are passed explicitly rather than read from ambient
/// constants so tests can run against synthetic names.
///
/// # Examples
///
/// ```
/// use platmod_core::Conventions;
///
/// let conv = Conventions::default();
/// assert_eq!(conv.module_descriptor, "PlatformModule.xml");
/// assert_eq!(conv.escape_char, '$');
/// ```
#[derive(Debug, Clone)]
pub struct Conventions {
    /// Exact filename whose presence marks a module tree.
    pub module_descriptor: String,

    /// Filename suffix whose presence marks a unit-test tree.
    pub test_suffix: String,

    /// Leading character stripped from folder names on unpack.
    pub escape_char: char,

    /// Literal basename replacements applied before packaging.
    ///
    /// Keys are matched exact and case-sensitive against entry basenames.
    pub remap: BTreeMap<String, String>,
}

impl Default for Conventions {
    fn default() -> Self {
        let mut remap = BTreeMap::new();
        remap.insert(
            "TypeExtensionD1".to_string(),
            "$TypeExtensionD1".to_string(),
        );

        Self {
            module_descriptor: MODULE_DESCRIPTOR.to_string(),
            test_suffix: TEST_SUFFIX.to_string(),
            escape_char: ESCAPE_CHAR,
            remap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_conventions() {
        let conv = Conventions::default();
        assert_eq!(conv.module_descriptor, "PlatformModule.xml");
        assert_eq!(conv.test_suffix, ".spec.js");
        assert_eq!(conv.escape_char, '$');
        assert_eq!(
            conv.remap.get("TypeExtensionD1").map(String::as_str),
            Some("$TypeExtensionD1")
        );
    }
}

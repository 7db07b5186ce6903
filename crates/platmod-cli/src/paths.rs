//! Platform directory layout and archive naming conventions.

use std::env;
use std::path::Path;
use std::path::PathBuf;

use platmod_core::TreeKind;

/// Resolves the platform root: explicit flag, then `$PLATFORM_HOME`, then
/// `~/code/gtnexus/platform`.
pub fn platform_home(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(env_home) = env::var_os("PLATFORM_HOME") {
        return PathBuf::from(env_home);
    }
    env::home_dir()
        .unwrap_or_default()
        .join("code")
        .join("gtnexus")
        .join("platform")
}

/// Derives the module name from an archive path: the file stem with a
/// trailing `UnitTest` marker removed.
pub fn module_name(archive: &Path) -> String {
    let stem = archive
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.strip_suffix("UnitTest")
        .map_or(stem.clone(), ToString::to_string)
}

/// Builds the install target for a normalized tree:
/// `<home>/[test/]customer/<customer>/<module>`.
pub fn install_target(home: &Path, kind: TreeKind, customer: &str, module: &str) -> PathBuf {
    let base = match kind {
        TreeKind::UnitTest => home.join("test").join("customer"),
        TreeKind::Module => home.join("customer"),
    };
    base.join(customer).join(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name_plain() {
        assert_eq!(module_name(Path::new("OrderFlow.zip")), "OrderFlow");
    }

    #[test]
    fn test_module_name_strips_unit_test_marker() {
        assert_eq!(module_name(Path::new("dir/OrderFlowUnitTest.zip")), "OrderFlow");
    }

    #[test]
    fn test_platform_home_prefers_flag() {
        let home = platform_home(Some(Path::new("/custom/root")));
        assert_eq!(home, PathBuf::from("/custom/root"));
    }

    #[test]
    fn test_install_target_layout() {
        let home = Path::new("/plat");
        assert_eq!(
            install_target(home, TreeKind::Module, "acme", "OrderFlow"),
            PathBuf::from("/plat/customer/acme/OrderFlow")
        );
        assert_eq!(
            install_target(home, TreeKind::UnitTest, "acme", "OrderFlow"),
            PathBuf::from("/plat/test/customer/acme/OrderFlow")
        );
    }
}

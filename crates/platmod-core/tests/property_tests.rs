//! Property-based tests for the rename passes and anchor locator.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use platmod_core::Conventions;
use platmod_core::locate_module_descriptor;
use platmod_core::remap_names;
use platmod_core::strip_escape_prefix;
use platmod_core::test_utils::sorted_listing;
use proptest::prelude::*;
use std::fs;
use std::fs::File;
use std::path::PathBuf;
use tempfile::TempDir;

/// A single chain of nested folders, each level independently escaped.
fn chain_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(("[a-z]{1,8}", any::<bool>()), 1..5)
}

fn build_chain(root: &std::path::Path, chain: &[(String, bool)]) -> PathBuf {
    let mut path = root.to_path_buf();
    for (base, escaped) in chain {
        let name = if *escaped {
            format!("${base}")
        } else {
            base.clone()
        };
        path = path.join(name);
    }
    fs::create_dir_all(&path).unwrap();
    path
}

fn snapshot(root: &std::path::Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap().into_path())
        .collect();
    paths.sort();
    paths
}

proptest! {
    /// Stripping twice yields the same tree as stripping once.
    #[test]
    fn prop_strip_is_idempotent(chain in chain_strategy()) {
        let temp = TempDir::new().expect("failed to create temp dir");
        build_chain(temp.path(), &chain);

        let conv = Conventions::default();
        strip_escape_prefix(temp.path(), &conv).unwrap();
        let once = snapshot(temp.path());

        let renamed_again = strip_escape_prefix(temp.path(), &conv).unwrap();
        let twice = snapshot(temp.path());

        prop_assert_eq!(renamed_again, 0);
        prop_assert_eq!(once, twice);
    }

    /// After stripping, no folder below the root keeps the escape prefix.
    #[test]
    fn prop_strip_removes_every_prefix(chain in chain_strategy()) {
        let temp = TempDir::new().expect("failed to create temp dir");
        build_chain(temp.path(), &chain);

        strip_escape_prefix(temp.path(), &Conventions::default()).unwrap();

        for path in snapshot(temp.path()) {
            if path == temp.path() {
                continue;
            }
            let name = path.file_name().unwrap().to_string_lossy();
            prop_assert!(!name.starts_with('$'), "leftover prefix on {}", path.display());
        }
    }

    /// Remapping every folder to its escaped form and then stripping
    /// restores the original basenames.
    #[test]
    fn prop_remap_strip_round_trip(
        bases in prop::collection::hash_set("[a-z]{1,8}", 1..6)
    ) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let mut conv = Conventions::default();
        conv.remap.clear();
        for base in &bases {
            fs::create_dir(temp.path().join(base)).unwrap();
            conv.remap.insert(base.clone(), format!("${base}"));
        }

        let before = sorted_listing(temp.path());
        let remapped = remap_names(temp.path(), &conv).unwrap();
        prop_assert_eq!(remapped, bases.len());

        strip_escape_prefix(temp.path(), &conv).unwrap();
        prop_assert_eq!(before, sorted_listing(temp.path()));
    }

    /// The locator always returns the occurrence with the fewest path
    /// segments when descriptors exist at differing depths.
    #[test]
    fn prop_locator_finds_shallowest(
        shallow_depth in 0usize..3,
        extra_depth in 1usize..3,
    ) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let conv = Conventions::default();

        let mut shallow = temp.path().to_path_buf();
        for level in 0..shallow_depth {
            shallow = shallow.join(format!("s{level}"));
        }
        fs::create_dir_all(&shallow).unwrap();
        File::create(shallow.join(&conv.module_descriptor)).unwrap();

        let mut deep = shallow.clone();
        for level in 0..extra_depth {
            deep = deep.join(format!("d{level}"));
        }
        fs::create_dir_all(&deep).unwrap();
        File::create(deep.join(&conv.module_descriptor)).unwrap();

        let found = locate_module_descriptor(temp.path(), &conv).unwrap().unwrap();
        prop_assert_eq!(found, shallow.join(&conv.module_descriptor));
    }
}

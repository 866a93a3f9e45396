//! Keeps `tests/unit/` a mirror of `src/` and every test file non-empty

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TEST_ROOT: &str = "tests";

    /// Files that only wire modules together or start a harness
    fn is_wiring(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    /// Every `.rs` file and directory below `root`, walked without recursion
    fn walk(root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path.clone());
                    found.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.push(path);
                }
            }
        }

        Ok(found)
    }

    /// Scan `root`, failing the test when it cannot be read
    fn scan(root: &Path) -> Vec<PathBuf> {
        let scanned = walk(root);
        assert!(
            scanned.is_ok(),
            "cannot scan {}: {:?}",
            root.display(),
            scanned.as_ref().err()
        );
        scanned.unwrap_or_default()
    }

    /// Paths below `root` relative to it, skipping wiring files
    fn mirrored_paths(root: &str) -> BTreeSet<PathBuf> {
        let base = Path::new(root);

        scan(base)
            .into_iter()
            .filter(|path| !is_wiring(path))
            .filter_map(|path| path.strip_prefix(base).ok().map(Path::to_path_buf))
            .collect()
    }

    fn listing<'a>(paths: impl Iterator<Item = &'a PathBuf>, from: &str, to: &str) -> String {
        paths
            .map(|path| format!("  - {from}/{0} -> {to}/{0}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each source file and directory has a unit test counterpart
    // Verified by deleting a unit test file
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let sources = mirrored_paths(SOURCE_ROOT);
        let units = mirrored_paths(UNIT_ROOT);
        let missing: Vec<&PathBuf> = sources.difference(&units).collect();

        assert!(
            missing.is_empty(),
            "source paths without unit tests:\n{}",
            listing(missing.into_iter(), SOURCE_ROOT, UNIT_ROOT)
        );
    }

    // Tests each unit test file and directory still has a source counterpart
    // Verified by renaming a source module
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = mirrored_paths(SOURCE_ROOT);
        let units = mirrored_paths(UNIT_ROOT);
        let orphaned: Vec<&PathBuf> = units.difference(&sources).collect();

        assert!(
            orphaned.is_empty(),
            "unit test paths without sources:\n{}",
            listing(orphaned.into_iter(), UNIT_ROOT, SOURCE_ROOT)
        );
    }

    // Tests every test file below tests/ declares at least one test
    // Verified by adding a test file holding only helpers
    #[test]
    fn test_all_test_files_contain_tests() {
        let empty: Vec<String> = scan(Path::new(TEST_ROOT))
            .iter()
            .filter(|path| path.is_file() && !is_wiring(path))
            .filter(|path| {
                !fs::read_to_string(path).is_ok_and(|content| content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}

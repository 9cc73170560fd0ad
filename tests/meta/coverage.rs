//! Checks that every source file has a mirrored unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Crate roots and module organization files carry no logic of their own
    fn is_structural(relative: &str) -> bool {
        relative == "lib.rs"
            || relative == "main.rs"
            || relative == "mod.rs"
            || relative.ends_with("/main.rs")
            || relative.ends_with("/mod.rs")
    }

    fn rust_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files.extend(rust_files(&path)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn relative_paths(base: &str) -> BTreeSet<String> {
        let base = Path::new(base);
        let files = rust_files(base);
        assert!(
            files.is_ok(),
            "Failed to scan {}: {:?}",
            base.display(),
            files.as_ref().err()
        );
        files
            .unwrap_or_default()
            .iter()
            .filter_map(|path| path.strip_prefix(base).ok())
            .map(|relative| relative.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn report(header: &str, lines: &[String]) -> String {
        format!("{header}:\n{}", lines.join("\n"))
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = relative_paths(UNIT_DIR);

        let missing: Vec<String> = relative_paths(SRC_DIR)
            .into_iter()
            .filter(|path| !is_structural(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit test counterparts", &missing)
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = relative_paths(SRC_DIR);

        let orphaned: Vec<String> = relative_paths(UNIT_DIR)
            .into_iter()
            .filter(|path| !is_structural(path) && !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without source counterparts", &orphaned)
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let empty: Vec<String> = relative_paths("tests")
            .into_iter()
            .filter(|path| !is_structural(path))
            .filter(|path| {
                !fs::read_to_string(Path::new("tests").join(path))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without any #[test] functions", &empty)
        );
    }
}

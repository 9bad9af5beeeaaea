use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::constants::JS_EXTENSION;

/// Collect every `*.js` file under `dir`, recursively, in file name order.
///
/// Build output is usually git-ignored, so ignore files and hidden-file
/// filtering are disabled.
pub fn collect_js_files(dir: &Path) -> Result<Vec<PathBuf>> {
    debug!("Walking build output from: {}", dir.display());
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let is_js =
            p.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.ends_with(JS_EXTENSION));
        if is_js {
            trace!("Found JavaScript file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }

    debug!("Collected {} JavaScript files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_collects_nested_js_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        create_test_file(root, "main-abc.js", "1");
        create_test_file(root, "main-abc.js.map", "{}");
        create_test_file(root, "pages/_app.js", "2");
        create_test_file(root, "app/page-1.js", "3");
        create_test_file(root, "styles.css", "body{}");

        let files = collect_js_files(root).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"main-abc.js".to_string()));
        assert!(names.contains(&"pages/_app.js".to_string()));
        assert!(names.contains(&"app/page-1.js".to_string()));
    }

    #[test]
    fn test_ignores_gitignore() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join(".git")).unwrap();
        create_test_file(root, ".gitignore", "*.js\n");
        create_test_file(root, "42.js", "x");

        let files = collect_js_files(root).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(collect_js_files(temp_dir.path()).unwrap().is_empty());
    }
}

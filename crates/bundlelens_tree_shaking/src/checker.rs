use anyhow::{Context, Result, bail};
use bundlelens_core::{
    collect_js_files,
    constants::{SOURCE_MAP_MARKER, TREE_SHAKING_LARGE_FILE_BYTES},
};
use log::{debug, info, trace};
use std::{fs, path::Path};

use crate::{
    config::Config,
    types::{LargeFile, SizeCategory, SymbolHit, TreeShakingResult, Verdict},
};

fn hits_in(content: &str, symbols: &[String], rel: &str, hits: &mut Vec<SymbolHit>) {
    for symbol in symbols {
        if content.contains(symbol.as_str()) {
            trace!("Found '{}' in {}", symbol, rel);
            hits.push(SymbolHit { symbol: symbol.clone(), file: rel.to_string() });
        }
    }
}

fn add_size(totals: &mut Vec<(SizeCategory, u64)>, category: SizeCategory, size: u64) {
    match totals.iter_mut().find(|(c, _)| *c == category) {
        Some((_, total)) => *total += size,
        None => totals.push((category, size)),
    }
}

fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).to_string_lossy().to_string()
}

/// Scan an app's existing `.next` output for tracked symbols and sizes.
///
/// No build is triggered; a missing output directory is an error.
pub fn run_tree_shaking_check(cfg: &Config) -> Result<TreeShakingResult> {
    info!("Starting tree shaking check");
    let target = cfg.resolve()?;
    let build_dir = target.build_dir();
    if !build_dir.is_dir() {
        bail!(
            "Build directory not found: {}\n   Run \"npm run build\" first.",
            build_dir.display()
        );
    }

    let files: Vec<_> = collect_js_files(&build_dir)?
        .into_iter()
        .filter(|p| {
            p.file_name().is_some_and(|n| !n.to_string_lossy().contains(SOURCE_MAP_MARKER))
        })
        .collect();
    info!("Found {} JavaScript chunks in {}", files.len(), build_dir.display());

    let expected_present = cfg.present_symbols();
    let expected_absent = cfg.absent_symbols();
    let mut present_hits = Vec::new();
    let mut absent_hits = Vec::new();
    let mut large_files = Vec::new();
    let mut size_by_category = Vec::new();
    let mut total_size = 0;

    for path in &files {
        let rel = relative(path, &build_dir);
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);

        hits_in(&content, &expected_absent, &rel, &mut absent_hits);
        hits_in(&content, &expected_present, &rel, &mut present_hits);

        let size = bytes.len() as u64;
        total_size += size;
        let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        add_size(&mut size_by_category, SizeCategory::of(&file_name), size);

        if size > TREE_SHAKING_LARGE_FILE_BYTES {
            large_files.push(LargeFile { file: rel, size });
        }
    }

    let verdict = Verdict::evaluate(present_hits.len(), absent_hits.len(), expected_present.len());
    debug!(
        "Tree shaking: {} present hits, {} absent hits, verdict {:?}",
        present_hits.len(),
        absent_hits.len(),
        verdict
    );

    Ok(TreeShakingResult {
        app: target.name,
        defaulted: target.defaulted,
        build_dir,
        files_scanned: files.len(),
        expected_present,
        expected_absent,
        present_hits,
        absent_hits,
        large_files,
        total_size,
        size_by_category,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn config(root: &Path) -> Config {
        Config {
            app: Some("web".to_string()),
            root: Some(root.to_path_buf()),
            expect_present: vec![],
            expect_absent: vec![],
        }
    }

    #[test]
    fn test_perfect_tree_shaking() {
        let temp_dir = TempDir::new().unwrap();
        let next = temp_dir.path().join("apps/web/.next");
        create_test_file(&next, "static/chunks/app/page-1.js", "usedUtility();");
        create_test_file(&next, "static/chunks/42.js", "heavyFunction();");
        create_test_file(&next, "static/chunks/42.js.map", "unusedFunction1");
        create_test_file(&next, "server/app.map.js", "unusedFunction2");

        let result = run_tree_shaking_check(&config(temp_dir.path())).unwrap();

        assert_eq!(result.files_scanned, 2);
        assert_eq!(result.present_hits.len(), 2);
        assert!(result.absent_hits.is_empty());
        assert_eq!(result.eliminated_count(), 4);
        assert_eq!(result.verdict, Verdict::Perfect);
    }

    #[test]
    fn test_leaked_symbols_reported_with_relative_path() {
        let temp_dir = TempDir::new().unwrap();
        let next = temp_dir.path().join("apps/web/.next");
        create_test_file(&next, "static/chunks/ui.js", "function massiveUnusedFunction(){}");

        let result = run_tree_shaking_check(&config(temp_dir.path())).unwrap();

        assert_eq!(result.verdict, Verdict::LeakedSymbols);
        assert_eq!(
            result.absent_hits,
            vec![SymbolHit {
                symbol: "massiveUnusedFunction".to_string(),
                file: "static/chunks/ui.js".to_string(),
            }]
        );
    }

    #[test]
    fn test_default_app_is_flagged() {
        let temp_dir = TempDir::new().unwrap();
        let next = temp_dir.path().join("apps/web/.next");
        create_test_file(&next, "static/chunks/main.js", "usedUtility()");
        let mut cfg = config(temp_dir.path());
        cfg.app = None;

        let result = run_tree_shaking_check(&cfg).unwrap();
        assert_eq!(result.app, "web");
        assert!(result.defaulted);

        let named = run_tree_shaking_check(&config(temp_dir.path())).unwrap();
        assert!(!named.defaulted);
    }

    #[test]
    fn test_missing_symbols() {
        let temp_dir = TempDir::new().unwrap();
        let next = temp_dir.path().join("apps/web/.next");
        create_test_file(&next, "static/chunks/main.js", "usedUtility()");

        let result = run_tree_shaking_check(&config(temp_dir.path())).unwrap();
        assert_eq!(result.verdict, Verdict::MissingSymbols);
    }

    #[test]
    fn test_sizes_and_large_files() {
        let temp_dir = TempDir::new().unwrap();
        let next = temp_dir.path().join("apps/web/.next");
        create_test_file(&next, "static/chunks/framework-1.js", &"x".repeat(50_001));
        create_test_file(&next, "static/chunks/main-1.js", &"x".repeat(50_000));
        create_test_file(&next, "static/chunks/pages-2.js", "yy");

        let result = run_tree_shaking_check(&config(temp_dir.path())).unwrap();

        assert_eq!(result.total_size, 100_003);
        assert_eq!(
            result.large_files,
            vec![LargeFile { file: "static/chunks/framework-1.js".to_string(), size: 50_001 }]
        );
        assert!(result.size_by_category.contains(&(SizeCategory::Framework, 50_001)));
        assert!(result.size_by_category.contains(&(SizeCategory::Other, 50_000)));
        assert!(result.size_by_category.contains(&(SizeCategory::Pages, 2)));
    }

    #[test]
    fn test_missing_build_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("apps/web")).unwrap();

        let err = run_tree_shaking_check(&config(temp_dir.path())).unwrap_err();
        assert!(err.to_string().contains("Build directory not found"));
    }
}

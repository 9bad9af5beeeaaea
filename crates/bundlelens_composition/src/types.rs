use bundlelens_core::{
    FileAnalysis,
    constants::{LARGEST_FILE_WARN_BYTES, MAIN_BUNDLE_WARN_BYTES, TOP_HEAVIEST_FILES},
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryCount {
    pub name: String,
    /// Number of files the library was detected in.
    pub files: usize,
}

/// Per-library file counts, kept in first-detection order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct LibraryUsage {
    entries: Vec<LibraryCount>,
}

impl LibraryUsage {
    pub fn record(&mut self, name: &str) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.files += 1,
            None => self.entries.push(LibraryCount { name: name.to_string(), files: 1 }),
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.entries.iter().find(|e| e.name == name).map(|e| e.files).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most used first; ties keep first-detection order.
    pub fn by_frequency(&self) -> Vec<&LibraryCount> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.files.cmp(&a.files));
        sorted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargestFile {
    pub name: String,
    pub size: u64,
    pub oversized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub main_file_count: usize,
    pub dynamic_file_count: usize,
    pub main_bundle_size: u64,
    pub main_bundle_oversized: bool,
    /// None when the build produced no JavaScript.
    pub largest_file: Option<LargestFile>,
}

impl HealthCheck {
    /// Evaluate thresholds over `files`, which must be sorted largest first.
    pub fn evaluate(files: &[FileAnalysis], main_bundle_size: u64) -> Self {
        Self {
            main_file_count: files.iter().filter(|f| f.is_main).count(),
            dynamic_file_count: files.iter().filter(|f| f.is_dynamic).count(),
            main_bundle_size,
            main_bundle_oversized: main_bundle_size > MAIN_BUNDLE_WARN_BYTES,
            largest_file: files.first().map(|f| LargestFile {
                name: f.file_name.clone(),
                size: f.file_size,
                oversized: f.file_size > LARGEST_FILE_WARN_BYTES,
            }),
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.main_bundle_oversized || self.largest_file.as_ref().is_some_and(|f| f.oversized)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BundleReport {
    pub app: String,
    pub chunks_dir: PathBuf,
    pub total_size: u64,
    pub main_bundle_size: u64,
    /// Sorted by size, largest first.
    pub files: Vec<FileAnalysis>,
    pub library_usage: LibraryUsage,
    pub health: HealthCheck,
}

impl BundleReport {
    /// Everything outside the main bundle, including unclassified files.
    pub fn dynamic_size(&self) -> u64 {
        self.total_size - self.main_bundle_size
    }

    pub fn top_heaviest(&self) -> &[FileAnalysis] {
        &self.files[..self.files.len().min(TOP_HEAVIEST_FILES)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64, is_main: bool, is_dynamic: bool) -> FileAnalysis {
        FileAnalysis {
            file_name: name.to_string(),
            file_size: size,
            is_main,
            is_dynamic,
            modules: vec![],
            libraries: vec![],
            largest_items: vec![],
        }
    }

    #[test]
    fn test_library_usage_counts_and_order() {
        let mut usage = LibraryUsage::default();
        usage.record("Next.js");
        usage.record("React");
        usage.record("React");
        usage.record("Axios");

        assert_eq!(usage.count("React"), 2);
        assert_eq!(usage.count("D3"), 0);
        let names: Vec<_> = usage.by_frequency().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["React", "Next.js", "Axios"]);
    }

    #[test]
    fn test_health_main_bundle_threshold_is_exclusive() {
        let files = vec![file("main-a.js", MAIN_BUNDLE_WARN_BYTES, true, false)];
        assert!(!HealthCheck::evaluate(&files, MAIN_BUNDLE_WARN_BYTES).main_bundle_oversized);
        assert!(HealthCheck::evaluate(&files, MAIN_BUNDLE_WARN_BYTES + 1).main_bundle_oversized);
    }

    #[test]
    fn test_health_largest_file_threshold_is_exclusive() {
        let at = vec![file("vendor.js", LARGEST_FILE_WARN_BYTES, false, false)];
        let health = HealthCheck::evaluate(&at, 0);
        assert!(!health.largest_file.unwrap().oversized);

        let over = vec![file("vendor.js", LARGEST_FILE_WARN_BYTES + 1, false, false)];
        let health = HealthCheck::evaluate(&over, 0);
        assert!(health.has_warnings());
        assert_eq!(health.largest_file.unwrap().name, "vendor.js");
    }

    #[test]
    fn test_health_counts_overlapping_flags() {
        let files = vec![
            file("app-chunk.js", 30, true, true),
            file("42.js", 20, false, true),
            file("vendor.js", 10, false, false),
        ];
        let health = HealthCheck::evaluate(&files, 30);
        assert_eq!(health.main_file_count, 1);
        assert_eq!(health.dynamic_file_count, 2);
    }

    #[test]
    fn test_health_without_files() {
        let health = HealthCheck::evaluate(&[], 0);
        assert!(health.largest_file.is_none());
        assert!(!health.has_warnings());
    }
}

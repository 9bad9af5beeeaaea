use std::path::PathBuf;

/// A tracked symbol found verbatim in a built file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolHit {
    pub symbol: String,
    /// Path relative to the build directory.
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    Pages,
    Chunks,
    Framework,
    Other,
}

impl SizeCategory {
    /// Categorize by the file's base name, first match wins.
    pub fn of(file_name: &str) -> Self {
        if file_name.contains("pages") {
            SizeCategory::Pages
        } else if file_name.contains("chunks") {
            SizeCategory::Chunks
        } else if file_name.contains("framework") {
            SizeCategory::Framework
        } else {
            SizeCategory::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeCategory::Pages => "pages",
            SizeCategory::Chunks => "chunks",
            SizeCategory::Framework => "framework",
            SizeCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeFile {
    pub file: String,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing leaked and every expected symbol was found.
    Perfect,
    LeakedSymbols,
    MissingSymbols,
}

impl Verdict {
    /// Present hits are counted per file, so one symbol found in two files
    /// counts twice.
    pub fn evaluate(present_hits: usize, absent_hits: usize, expected_present: usize) -> Self {
        if absent_hits == 0 && present_hits == expected_present {
            Verdict::Perfect
        } else if absent_hits > 0 {
            Verdict::LeakedSymbols
        } else {
            Verdict::MissingSymbols
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeShakingResult {
    pub app: String,
    /// No app was named, so the default was used.
    pub defaulted: bool,
    pub build_dir: PathBuf,
    pub files_scanned: usize,
    pub expected_present: Vec<String>,
    pub expected_absent: Vec<String>,
    pub present_hits: Vec<SymbolHit>,
    pub absent_hits: Vec<SymbolHit>,
    /// In traversal order.
    pub large_files: Vec<LargeFile>,
    pub total_size: u64,
    /// In first-seen order.
    pub size_by_category: Vec<(SizeCategory, u64)>,
    pub verdict: Verdict,
}

impl TreeShakingResult {
    /// Expected-absent symbols that never showed up.
    pub fn eliminated_count(&self) -> usize {
        self.expected_absent.len().saturating_sub(self.absent_hits.len())
    }
}

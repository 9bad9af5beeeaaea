use anyhow::{Context, Result};
use log::{debug, trace};
use std::{fs, path::Path};

use crate::{
    classifier::FileClassifier,
    constants::LibrarySignature,
    detector::{detect_libraries, extract_module_names},
    extractor::find_largest_items,
    types::FileAnalysis,
};

/// Classification rules and library registry applied to every file.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    pub classifier: FileClassifier<'a>,
    pub libraries: &'a [LibrarySignature],
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self {
            classifier: FileClassifier::default(),
            libraries: crate::constants::KNOWN_LIBRARIES,
        }
    }
}

impl Analyzer<'_> {
    /// Derive every per-file fact from the file's name and text.
    pub fn analyze_content(&self, file_name: &str, content: &str) -> FileAnalysis {
        let classification = self.classifier.classify(file_name);
        trace!(
            "{}: main={}, dynamic={}",
            file_name, classification.is_main, classification.is_dynamic
        );

        FileAnalysis {
            file_name: file_name.to_string(),
            file_size: content.len() as u64,
            is_main: classification.is_main,
            is_dynamic: classification.is_dynamic,
            modules: extract_module_names(content),
            libraries: detect_libraries(content, self.libraries),
            largest_items: find_largest_items(content),
        }
    }

    /// Read `path` as text and analyze it under its base name.
    ///
    /// Invalid UTF-8 is replaced, and the size is that of the decoded text.
    pub fn analyze_file(&self, path: &Path) -> Result<FileAnalysis> {
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let analysis = self.analyze_content(&file_name, &content);
        debug!(
            "Analyzed {} ({} bytes, {} libraries, {} heavy items)",
            file_name,
            analysis.file_size,
            analysis.libraries.len(),
            analysis.largest_items.len()
        );
        Ok(analysis)
    }
}

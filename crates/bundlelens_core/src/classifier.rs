use regex::Regex;
use std::sync::LazyLock;

use crate::{
    constants::{DYNAMIC_CHUNK_MARKERS, MAIN_BUNDLE_FILES, MAIN_BUNDLE_MARKERS},
    types::Classification,
};

static NUMBERED_CHUNK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("numbered chunk pattern is valid"));

static HASHED_CHUNK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-f0-9]{3,}\.").expect("hashed chunk pattern is valid"));

/// Filename rules deciding whether a built file loads eagerly or on demand.
#[derive(Debug, Clone, Copy)]
pub struct FileClassifier<'a> {
    pub main_markers: &'a [&'a str],
    pub main_files: &'a [&'a str],
    pub dynamic_markers: &'a [&'a str],
}

impl Default for FileClassifier<'static> {
    fn default() -> Self {
        Self {
            main_markers: MAIN_BUNDLE_MARKERS,
            main_files: MAIN_BUNDLE_FILES,
            dynamic_markers: DYNAMIC_CHUNK_MARKERS,
        }
    }
}

impl FileClassifier<'_> {
    pub fn is_main_bundle(&self, file_name: &str) -> bool {
        self.main_markers.iter().any(|m| file_name.contains(m))
            || self.main_files.contains(&file_name)
    }

    /// Numeric ids (`42.js`), content hashes (`9f3a1c.js`) or an explicit
    /// chunk/lazy marker in the name.
    pub fn is_dynamic_chunk(&self, file_name: &str) -> bool {
        NUMBERED_CHUNK_RE.is_match(file_name)
            || HASHED_CHUNK_RE.is_match(file_name)
            || self.dynamic_markers.iter().any(|m| file_name.contains(m))
    }

    /// Both flags are computed independently and may both be set.
    pub fn classify(&self, file_name: &str) -> Classification {
        Classification {
            is_main: self.is_main_bundle(file_name),
            is_dynamic: self.is_dynamic_chunk(file_name),
        }
    }
}

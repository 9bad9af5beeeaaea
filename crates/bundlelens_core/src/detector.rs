use log::trace;
use regex::Regex;
use std::{collections::HashSet, sync::LazyLock};

use crate::constants::{
    LibrarySignature, MAX_MODULE_NAMES, MAX_SYMBOL_NAME_LEN, MAX_WEBPACK_MODULE_NAME_LEN,
};

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import.*?from.*?['"`]([^'"`]+)['"`]"#).expect("import pattern is valid")
});

static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"`]([^'"`]+)['"`]"#).expect("quoted pattern is valid"));

static WEBPACK_MODULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*\*\* ([^*]+) \*\*\*").expect("webpack module comment pattern is valid")
});

static COMPONENT_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function\s+([A-Z][a-zA-Z0-9]+)").expect("component function pattern is valid")
});

static EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+(?:const|let|var|function|class)\s+([a-zA-Z][a-zA-Z0-9]+)")
        .expect("export pattern is valid")
});

/// Insertion-ordered set of names.
#[derive(Default)]
struct NameSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl NameSet {
    fn insert(&mut self, name: &str) {
        if self.seen.insert(name.to_string()) {
            self.ordered.push(name.to_string());
        }
    }
}

/// Gather likely module and component names from built output.
///
/// Sources, in order: external import specifiers, webpack module banner
/// comments, capitalized function declarations and named exports. The result
/// is de-duplicated, keeps first-seen order and holds at most
/// [`MAX_MODULE_NAMES`] entries.
pub fn extract_module_names(content: &str) -> Vec<String> {
    let mut names = NameSet::default();

    for m in IMPORT_RE.find_iter(content) {
        // The first quoted run in the statement, which is not always the source.
        if let Some(caps) = QUOTED_RE.captures(m.as_str()) {
            let specifier = &caps[1];
            if !specifier.starts_with('.') {
                names.insert(specifier);
            }
        }
    }

    for caps in WEBPACK_MODULE_RE.captures_iter(content) {
        let name = &caps[1];
        if name.chars().count() < MAX_WEBPACK_MODULE_NAME_LEN {
            names.insert(name);
        }
    }

    // Only the identifier is kept, whatever whitespace follows `function`.
    for caps in COMPONENT_FN_RE.captures_iter(content) {
        let name = &caps[1];
        if name.chars().count() < MAX_SYMBOL_NAME_LEN {
            names.insert(name);
        }
    }

    for caps in EXPORT_RE.captures_iter(content) {
        let name = &caps[1];
        if name.chars().count() < MAX_SYMBOL_NAME_LEN {
            names.insert(name);
        }
    }

    trace!("Extracted {} distinct module names", names.ordered.len());
    names.ordered.truncate(MAX_MODULE_NAMES);
    names.ordered
}

/// Names of registry libraries with at least one pattern occurring verbatim in
/// `content`, in registry order.
pub fn detect_libraries(content: &str, registry: &[LibrarySignature]) -> Vec<String> {
    registry
        .iter()
        .filter(|lib| lib.patterns.iter().any(|p| content.contains(p)))
        .map(|lib| lib.name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::KNOWN_LIBRARIES;

    #[test]
    fn test_react_detected_from_substring() {
        let libs = detect_libraries(r#"var e = require("react");"#, KNOWN_LIBRARIES);
        assert!(libs.contains(&"React".to_string()));
    }

    #[test]
    fn test_no_libraries() {
        assert!(detect_libraries("var x = 1 + 2;", KNOWN_LIBRARIES).is_empty());
    }

    #[test]
    fn test_libraries_in_registry_order() {
        let libs = detect_libraries("axios moment core-js", KNOWN_LIBRARIES);
        assert_eq!(libs, vec!["Moment.js", "Axios", "Polyfills"]);
    }

    #[test]
    fn test_lodash_underscore_needs_backslash() {
        assert!(detect_libraries("_.map(xs)", KNOWN_LIBRARIES).is_empty());
        let libs = detect_libraries(r"_\.map", KNOWN_LIBRARIES);
        assert_eq!(libs, vec!["Lodash"]);
    }

    #[test]
    fn test_custom_registry() {
        const REGISTRY: &[LibrarySignature] =
            &[LibrarySignature { name: "Zod", patterns: &["zod"] }];
        assert_eq!(detect_libraries("import { z } from 'zod'", REGISTRY), vec!["Zod"]);
    }

    #[test]
    fn test_import_specifiers_skip_relative() {
        let content = "import React from 'react'\nimport { Card } from './Card'\nimport dayjs from \"dayjs\"";
        assert_eq!(extract_module_names(content), vec!["react", "dayjs"]);
    }

    #[test]
    fn test_webpack_module_banners() {
        let content = "/*** ./src/components/Chart.tsx ***/\n/***/ (function(module) {})";
        assert_eq!(extract_module_names(content), vec!["./src/components/Chart.tsx"]);
    }

    #[test]
    fn test_component_functions_and_exports() {
        let content = "function DataTable(props) {}\nfunction helper() {}\nexport const formatDate = 1;\nexport class Modal {}";
        assert_eq!(extract_module_names(content), vec!["DataTable", "formatDate", "Modal"]);
    }

    #[test]
    fn test_component_name_excludes_leading_whitespace() {
        let content = "function\tTabbed() {}\nfunction   Spaced() {}";
        assert_eq!(extract_module_names(content), vec!["Tabbed", "Spaced"]);
    }

    #[test]
    fn test_duplicates_removed_in_first_seen_order() {
        let content = "export function Button() {}\nfunction Button() {}\nfunction Card() {}";
        assert_eq!(extract_module_names(content), vec!["Button", "Card"]);
    }

    #[test]
    fn test_long_names_skipped() {
        let long = format!("A{}", "b".repeat(40));
        let content = format!("function {}() {{}}\nfunction Short() {{}}", long);
        assert_eq!(extract_module_names(&content), vec!["Short"]);
    }

    #[test]
    fn test_capped_at_ten() {
        let content: String = (0..15).map(|i| format!("function Comp{}() {{}}\n", i)).collect();
        let names = extract_module_names(&content);
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Comp0");
        assert_eq!(names[9], "Comp9");
    }
}

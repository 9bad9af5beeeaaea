//! Fixed registries and thresholds shared by every bundlelens check.
//!
//! ## Size thresholds
//!
//! Span thresholds are compared with strict greater-than, string literals with
//! greater-or-equal. The values are literal and must not be rounded:
//!
//! - **functions**: span > 1000 bytes
//! - **objects / arrays**: span > 2000 bytes
//! - **strings**: at least 2000 characters
//!
//! ## Filename conventions
//!
//! Next.js emits framework and route chunks under predictable names
//! (`main-<hash>.js`, `webpack-<hash>.js`, `app/layout-<hash>.js`), while lazy
//! chunks are named by numeric id or content hash (`42.js`, `9f3a1c.js`).

/// Applications the analyzer knows how to build and inspect.
pub const VALID_APPS: &[&str] = &["web", "bad-web"];

/// App analyzed when none is given on the command line.
pub const DEFAULT_APP: &str = "web";

/// Directory (relative to the workspace root) holding the applications.
pub const APPS_DIR: &str = "apps";

/// Next.js build output directory inside an app.
pub const NEXT_BUILD_DIR: &str = ".next";

/// Static chunk output, relative to an app directory.
pub const STATIC_CHUNKS_DIR: &[&str] = &[".next", "static", "chunks"];

pub const JS_EXTENSION: &str = ".js";

/// Marker for source maps (`.js.map`, `.map.js`).
pub const SOURCE_MAP_MARKER: &str = ".map";

pub const FUNCTION_MIN_SPAN: usize = 1000;
pub const OBJECT_MIN_SPAN: usize = 2000;
pub const ARRAY_MIN_SPAN: usize = 2000;
pub const STRING_MIN_CHARS: usize = 2000;

/// Heavy items kept per file after sorting.
pub const MAX_HEAVY_ITEMS: usize = 5;

/// Module names kept per file.
pub const MAX_MODULE_NAMES: usize = 10;

/// Files listed in the heaviest-files section of a report.
pub const TOP_HEAVIEST_FILES: usize = 5;

/// Module names shown per file before collapsing into `+N more`.
pub const MODULES_SHOWN: usize = 5;

/// Characters of a large string shown in its display name.
pub const STRING_PREVIEW_CHARS: usize = 50;

/// Upper bounds (exclusive) on detected module name lengths.
pub const MAX_WEBPACK_MODULE_NAME_LEN: usize = 100;
pub const MAX_SYMBOL_NAME_LEN: usize = 30;

/// Main bundle warning threshold, exclusive.
pub const MAIN_BUNDLE_WARN_BYTES: u64 = 300 * 1024;

/// Largest single file warning threshold, exclusive.
pub const LARGEST_FILE_WARN_BYTES: u64 = 200 * 1024;

/// Files shown individually by the tree-shaking probe, exclusive.
pub const TREE_SHAKING_LARGE_FILE_BYTES: u64 = 50_000;

/// Substrings marking a file as part of the initial-load bundle.
pub const MAIN_BUNDLE_MARKERS: &[&str] =
    &["main-", "app-", "layout", "page-", "react-", "common-", "webpack-"];

/// Exact file names that are always part of the initial-load bundle.
pub const MAIN_BUNDLE_FILES: &[&str] = &["_app.js", "_error.js", "_document.js"];

/// Substrings marking a file as loaded on demand.
pub const DYNAMIC_CHUNK_MARKERS: &[&str] = &["chunk", "lazy"];

/// A known library and the plain substrings that betray its presence.
#[derive(Debug, Clone, Copy)]
pub struct LibrarySignature {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

/// Registry of libraries detected by substring presence.
///
/// Patterns are matched literally. The Lodash entries contain a real
/// backslash (`_\.`), so they only match escaped text in the bundle.
pub const KNOWN_LIBRARIES: &[LibrarySignature] = &[
    LibrarySignature { name: "React", patterns: &["react", "React", "__webpack_require__"] },
    LibrarySignature { name: "Next.js", patterns: &["next", "_next", "__next"] },
    LibrarySignature { name: "Lodash", patterns: &["lodash", "_\\.", "lodash\\."] },
    LibrarySignature { name: "Moment.js", patterns: &["moment"] },
    LibrarySignature { name: "Chart.js", patterns: &["chart.js", "Chart"] },
    LibrarySignature { name: "D3", patterns: &["d3"] },
    LibrarySignature { name: "Axios", patterns: &["axios"] },
    LibrarySignature { name: "Polyfills", patterns: &["polyfill", "core-js"] },
];

/// Symbols the demo apps use and which must survive tree shaking.
pub const DEFAULT_EXPECTED_PRESENT: &[&str] = &["usedUtility", "heavyFunction"];

/// Symbols the demo apps never use and which tree shaking should drop.
pub const DEFAULT_EXPECTED_ABSENT: &[&str] =
    &["unusedFunction1", "unusedFunction2", "anotherUnusedFunction", "massiveUnusedFunction"];

//! Core utilities for bundlelens checks.
//!
//! This crate provides the static analysis shared by every check over a
//! Next.js build output, including:
//! - Matching balanced `{}`/`[]` delimiters
//! - Extracting oversized functions, literals and named chunks
//! - Detecting module names and known libraries by pattern
//! - Classifying built files as main bundle or dynamic chunk
//! - Resolving the target app and collecting its JavaScript output
//!
//! The analysis is text based and approximate: there is no JavaScript lexer,
//! so delimiters or quotes inside strings and comments are taken at face value.

mod analysis;
mod app;
mod classifier;
mod collector;
pub mod constants;
mod detector;
mod extractor;
mod format;
mod matcher;
mod types;

// Re-export public API
pub use analysis::Analyzer;
pub use app::{AppTarget, resolve_app, resolve_root};
pub use classifier::FileClassifier;
pub use collector::collect_js_files;
pub use constants::LibrarySignature;
pub use detector::{detect_libraries, extract_module_names};
pub use extractor::find_largest_items;
pub use format::{format_bytes, format_kb, format_percent};
pub use matcher::find_matching_close;
pub use types::{Classification, FileAnalysis, FileKind, HeavyItem, ItemKind};

//! Heuristic detection of oversized constructs in built JavaScript.
//!
//! There is no lexer here: declarations are found with regular expressions
//! and their extent with [`find_matching_close`]. Braces inside strings or
//! comments can make a span too long or unterminated; unterminated candidates
//! are skipped.

use log::trace;
use regex::Regex;
use std::sync::LazyLock;

use crate::{
    constants::{
        ARRAY_MIN_SPAN, FUNCTION_MIN_SPAN, MAX_HEAVY_ITEMS, OBJECT_MIN_SPAN, STRING_MIN_CHARS,
        STRING_PREVIEW_CHARS,
    },
    matcher::find_matching_close,
    types::{HeavyItem, ItemKind},
};

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\([^)]*\)\s*\{")
        .expect("function declaration pattern is valid")
});

static OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*\{")
        .expect("object literal pattern is valid")
});

static ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*\[")
        .expect("array literal pattern is valid")
});

static WEBPACK_CHUNK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"webpackChunkName:\s*["']([^"']+)["']"#)
        .expect("webpack chunk name pattern is valid")
});

/// Return the heaviest items in `content`, largest first, at most
/// [`MAX_HEAVY_ITEMS`] of them. Equal sizes keep discovery order.
pub fn find_largest_items(content: &str) -> Vec<HeavyItem> {
    let mut items = Vec::new();

    collect_spans(content, &FUNCTION_RE, '{', FUNCTION_MIN_SPAN, &mut items, |name| {
        (format!("function {}()", name), ItemKind::Function)
    });
    collect_spans(content, &OBJECT_RE, '{', OBJECT_MIN_SPAN, &mut items, |name| {
        (format!("object {}", name), ItemKind::Object)
    });
    collect_spans(content, &ARRAY_RE, '[', ARRAY_MIN_SPAN, &mut items, |name| {
        (format!("array {}", name), ItemKind::Array)
    });
    collect_large_strings(content, &mut items);

    for caps in WEBPACK_CHUNK_RE.captures_iter(content) {
        items.push(HeavyItem {
            name: format!("webpack chunk: {}", &caps[1]),
            size: 0,
            kind: ItemKind::WebpackChunk,
        });
    }

    trace!("Found {} heavy item candidates", items.len());
    items.sort_by(|a, b| b.size.cmp(&a.size));
    items.truncate(MAX_HEAVY_ITEMS);
    items
}

/// Measure each declaration matched by `pattern` from the first `opener` at or
/// after the match start to its partner.
fn collect_spans(
    content: &str,
    pattern: &Regex,
    opener: char,
    min_span: usize,
    items: &mut Vec<HeavyItem>,
    describe: impl Fn(&str) -> (String, ItemKind),
) {
    for caps in pattern.captures_iter(content) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(open) = content[whole.start()..].find(opener).map(|i| whole.start() + i) else {
            continue;
        };
        let Some(close) = find_matching_close(content, open) else {
            trace!("Skipping unterminated candidate '{}'", &caps[1]);
            continue;
        };

        let span = close - open;
        if span > min_span {
            let (name, kind) = describe(&caps[1]);
            items.push(HeavyItem { name, size: span, kind });
        }
    }
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

/// Quoted runs of at least [`STRING_MIN_CHARS`] characters.
///
/// Quote kinds are interchangeable and every quote may open a run, including
/// one that closed the previous short run. Size is the run length in chars.
fn collect_large_strings(content: &str, items: &mut Vec<HeavyItem>) {
    let mut pos = 0;
    while let Some(rel) = content[pos..].find(is_quote) {
        let open = pos + rel;
        let body_start = open + 1;
        let body_len = content[body_start..].find(is_quote);

        match body_len {
            Some(len) => {
                let body = &content[body_start..body_start + len];
                let chars = body.chars().count();
                if chars >= STRING_MIN_CHARS {
                    let preview: String = body.chars().take(STRING_PREVIEW_CHARS).collect();
                    items.push(HeavyItem {
                        name: format!("large string: \"{}...\"", preview),
                        size: chars,
                        kind: ItemKind::String,
                    });
                    // Resume after the closing quote.
                    pos = body_start + len + 1;
                } else {
                    pos = body_start;
                }
            }
            None => break,
        }
    }
}

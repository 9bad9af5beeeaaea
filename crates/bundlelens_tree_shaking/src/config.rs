use anyhow::Result;
use bundlelens_core::{
    AppTarget,
    constants::{DEFAULT_EXPECTED_ABSENT, DEFAULT_EXPECTED_PRESENT},
    resolve_app, resolve_root,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tree-shaking")]
#[command(about = "Check that unused exports were dropped from an app's build output")]
pub struct Config {
    /// App to inspect: web or bad-web (defaults to web)
    pub app: Option<String>,

    /// Workspace root containing apps/ (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Symbol that should survive tree shaking (repeatable)
    #[arg(long = "expect-present", value_name = "SYMBOL")]
    pub expect_present: Vec<String>,

    /// Symbol that should be eliminated by tree shaking (repeatable)
    #[arg(long = "expect-absent", value_name = "SYMBOL")]
    pub expect_absent: Vec<String>,
}

fn or_defaults(symbols: &[String], defaults: &[&str]) -> Vec<String> {
    if symbols.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        symbols.to_vec()
    }
}

impl Config {
    pub fn resolve(&self) -> Result<AppTarget> {
        let root = resolve_root(self.root.as_deref())?;
        resolve_app(&root, self.app.as_deref())
    }

    /// Symbols expected in the bundle; the demo apps' used helpers by default.
    pub fn present_symbols(&self) -> Vec<String> {
        or_defaults(&self.expect_present, DEFAULT_EXPECTED_PRESENT)
    }

    /// Symbols expected to be gone; the demo apps' unused helpers by default.
    pub fn absent_symbols(&self) -> Vec<String> {
        or_defaults(&self.expect_absent, DEFAULT_EXPECTED_ABSENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbols() {
        let cfg = Config::try_parse_from(["tree-shaking"]).unwrap();
        assert_eq!(cfg.present_symbols(), vec!["usedUtility", "heavyFunction"]);
        assert_eq!(cfg.absent_symbols().len(), 4);
    }

    #[test]
    fn test_custom_symbols_replace_defaults() {
        let cfg = Config::try_parse_from([
            "tree-shaking",
            "bad-web",
            "--expect-present",
            "Button",
            "--expect-absent",
            "Modal",
            "--expect-absent",
            "Charts",
        ])
        .unwrap();
        assert_eq!(cfg.app.as_deref(), Some("bad-web"));
        assert_eq!(cfg.present_symbols(), vec!["Button"]);
        assert_eq!(cfg.absent_symbols(), vec!["Modal", "Charts"]);
    }
}

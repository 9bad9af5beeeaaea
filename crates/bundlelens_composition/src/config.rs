use anyhow::Result;
use bundlelens_core::{AppTarget, resolve_app, resolve_root};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "analyze")]
#[command(about = "Build a Next.js app and report what its bundle is made of")]
pub struct Config {
    /// App to analyze: web or bad-web (defaults to web)
    pub app: Option<String>,

    /// Workspace root containing apps/ (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Analyze the existing build output without running the build
    #[arg(long)]
    pub skip_build: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Config {
    /// Validate the app name and locate its directory.
    pub fn resolve(&self) -> Result<AppTarget> {
        let root = resolve_root(self.root.as_deref())?;
        resolve_app(&root, self.app.as_deref())
    }
}

//! Bundle composition analysis for the workspace's Next.js apps.
//!
//! This crate builds an app, walks the static chunks the build produced and
//! reports which files, libraries and in-file constructs dominate the bundle,
//! followed by a size health check.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use bundlelens_composition::{Config, NpmBuild, OutputFormat, run_bundle_analysis};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     app: Some("bad-web".to_string()),
//!     root: Some(std::path::PathBuf::from("/path/to/workspace")),
//!     skip_build: false,
//!     format: OutputFormat::Text,
//! };
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! let report = run_bundle_analysis(&mut stdout, &cfg, &NpmBuild)?;
//! stdout.flush()?;
//!
//! if report.health.has_warnings() {
//!     eprintln!("bundle exceeds size thresholds");
//! }
//! # Ok(())
//! # }
//! ```

mod build;
mod checker;
mod config;
mod reporter;
mod types;

// Re-export public API
pub use build::{BuildRunner, NpmBuild};
pub use checker::{analyze_build_output, run_bundle_analysis};
pub use config::{Config, OutputFormat};
pub use reporter::{print_default_notice, print_intro, print_json, print_report};
pub use types::{BundleReport, HealthCheck, LargestFile, LibraryCount, LibraryUsage};

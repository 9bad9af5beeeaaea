//! Tree shaking verification for the workspace's Next.js apps.
//!
//! This crate scans an app's existing `.next` build output for symbols that
//! should have been kept and symbols that should have been eliminated, and
//! summarizes output sizes by file category.
//!
//! # Examples
//!
//! ```no_run
//! use bundlelens_tree_shaking::{Config, print_tree_shaking_report, run_tree_shaking_check};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     app: Some("web".to_string()),
//!     root: None,
//!     expect_present: vec![],
//!     expect_absent: vec!["legacyFormatter".to_string()],
//! };
//!
//! let result = run_tree_shaking_check(&cfg)?;
//! print_tree_shaking_report(&mut std::io::stdout(), &result)?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod reporter;
mod types;

// Re-export public API
pub use checker::run_tree_shaking_check;
pub use config::Config;
pub use reporter::print_tree_shaking_report;
pub use types::{LargeFile, SizeCategory, SymbolHit, TreeShakingResult, Verdict};

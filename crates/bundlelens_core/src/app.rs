use anyhow::{Result, bail};
use log::{debug, info};
use path_clean::PathClean;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::constants::{APPS_DIR, DEFAULT_APP, NEXT_BUILD_DIR, STATIC_CHUNKS_DIR, VALID_APPS};

/// A validated application inside the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTarget {
    pub name: String,
    /// Workspace root the build command runs in.
    pub root: PathBuf,
    pub dir: PathBuf,
    /// True when no app was requested and [`DEFAULT_APP`] was used.
    pub defaulted: bool,
}

impl AppTarget {
    /// `apps/<name>` as passed to `npm --workspace`.
    pub fn workspace_path(&self) -> String {
        format!("{}/{}", APPS_DIR, self.name)
    }

    pub fn build_dir(&self) -> PathBuf {
        self.dir.join(NEXT_BUILD_DIR)
    }

    pub fn static_chunks_dir(&self) -> PathBuf {
        STATIC_CHUNKS_DIR.iter().fold(self.dir.clone(), |p, part| p.join(part))
    }
}

/// Resolve the workspace root, defaulting to the current directory.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(r) => {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or_else(|_| r.to_path_buf())
        }
        None => {
            debug!("No root provided, using current directory");
            env::current_dir()?
        }
    };
    Ok(root.clean())
}

/// Validate `requested` against [`VALID_APPS`] and locate it under `root`.
///
/// Nothing outside the name check and a directory probe happens here, so an
/// invalid name never reaches the build step.
pub fn resolve_app(root: &Path, requested: Option<&str>) -> Result<AppTarget> {
    let (name, defaulted) = match requested {
        Some(name) => (name, false),
        None => (DEFAULT_APP, true),
    };

    if !VALID_APPS.contains(&name) {
        bail!("Invalid app name: \"{}\"\n   Valid options: {}", name, VALID_APPS.join(", "));
    }

    let dir = root.join(APPS_DIR).join(name).clean();
    if !dir.is_dir() {
        bail!("App directory not found: {}", dir.display());
    }

    info!("Resolved app '{}' at {}", name, dir.display());
    Ok(AppTarget { name: name.to_string(), root: root.to_path_buf(), dir, defaulted })
}

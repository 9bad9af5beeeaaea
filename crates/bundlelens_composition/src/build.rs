use anyhow::{Context, Result, bail};
use bundlelens_core::AppTarget;
use log::{debug, info};
use std::process::{Command, Stdio};

/// Produces the build output for an app before it is analyzed.
pub trait BuildRunner {
    fn build(&self, target: &AppTarget) -> Result<()>;
}

/// `npm run build --workspace=apps/<app>` from the workspace root.
///
/// Output is forwarded to the terminal. The call blocks until npm exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmBuild;

impl BuildRunner for NpmBuild {
    fn build(&self, target: &AppTarget) -> Result<()> {
        let workspace = format!("--workspace={}", target.workspace_path());
        info!("Running npm run build {} in {}", workspace, target.root.display());

        let status = Command::new("npm")
            .args(["run", "build", &workspace])
            .current_dir(&target.root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .context("Build failed: could not start npm")?;

        debug!("npm exited with {}", status);
        if !status.success() {
            bail!("Build failed: `npm run build {}` exited with {}", workspace, status);
        }
        Ok(())
    }
}

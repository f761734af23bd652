//! Asynchronous removal of the previous build output.
//!
//! Cleanup runs as its own tokio task. Assembly never waits on it; whoever
//! orchestrates the build decides whether to await, abort, or detach the
//! returned [`CleanupHandle`]. Failures are logged by the task itself.

use std::io;
use std::path::{Path, PathBuf};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{ConfigError, Result};

/// Handle to a running cleanup task
#[derive(Debug)]
pub struct CleanupHandle {
    path: PathBuf,
    task: JoinHandle<Result<()>>,
}

impl CleanupHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Request cancellation; the directory may already be partly removed.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Let the task run to completion unobserved.
    pub fn detach(self) {}

    /// Wait for the task and report its outcome.
    pub async fn wait(self) -> Result<()> {
        match self.task.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(ConfigError::CleanupAborted(self.path)),
            Err(err) => Err(ConfigError::Cleanup {
                path: self.path,
                source: io::Error::other(err.to_string()),
            }),
        }
    }
}

/// System locations an output directory may never point into
const PROTECTED_PATHS: &[&str] = &[
    "/bin", "/boot", "/dev", "/etc", "/lib", "/lib64", "/proc", "/root", "/sbin", "/sys",
    "/usr/bin", "/usr/lib", "/usr/sbin", "/var/log",
];

/// Check that `dir` is safe to delete on behalf of the project at `project_root`.
///
/// Relative paths are resolved against `project_root`. The output must lie
/// inside the project or next to it, must not be the project root or one of
/// its ancestors, and must not sit in a system directory. Returns the
/// resolved path.
///
/// # Errors
///
/// Returns [`ConfigError::UnsafeOutputDir`] when the directory is refused.
pub fn validate_output_dir(dir: &Path, project_root: &Path) -> Result<PathBuf> {
    let resolved = if dir.is_absolute() {
        path_clean::clean(dir)
    } else {
        path_clean::clean(project_root.join(dir))
    };
    let canonical_out = canonicalize_lenient(&resolved);
    let canonical_root = canonicalize_lenient(&path_clean::clean(project_root));

    let refuse = |reason: &str| ConfigError::UnsafeOutputDir {
        path: resolved.clone(),
        reason: reason.to_string(),
    };

    if canonical_out.parent().is_none() {
        return Err(refuse("it is the filesystem root"));
    }
    if canonical_root.starts_with(&canonical_out) {
        return Err(refuse("it contains the project root"));
    }

    let is_within_project = canonical_out.starts_with(&canonical_root);
    let is_sibling = canonical_out
        .parent()
        .and_then(|p| canonical_root.parent().map(|c| p == c))
        .unwrap_or(false);
    if !is_within_project && !is_sibling {
        return Err(refuse("it is outside the project directory"));
    }

    // A project that itself lives under a protected path may still clean its own output.
    let protected = PROTECTED_PATHS
        .iter()
        .map(Path::new)
        .find(|p| canonical_out.starts_with(p) && !canonical_root.starts_with(p));
    if let Some(protected) = protected {
        return Err(refuse(&format!(
            "it is inside the system directory {}",
            protected.display()
        )));
    }

    Ok(resolved)
}

/// Canonical form of `path`, canonicalizing its nearest existing ancestor
/// when `path` does not exist yet. Falls back to `path` itself.
fn canonicalize_lenient(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        if let Ok(canonical) = ancestor.canonicalize() {
            return match path.strip_prefix(ancestor) {
                Ok(rest) if rest.as_os_str().is_empty() => canonical,
                Ok(rest) => canonical.join(rest),
                Err(_) => path.to_path_buf(),
            };
        }
    }
    path.to_path_buf()
}

/// Start removing `dir` recursively on the current tokio runtime.
///
/// `dir` is checked with [`validate_output_dir`] against `project_root`
/// first. A directory that does not exist counts as removed.
///
/// # Errors
///
/// Fails when the directory is refused, or when called outside a tokio
/// runtime.
pub fn spawn_cleanup(dir: impl AsRef<Path>, project_root: &Path) -> Result<CleanupHandle> {
    let path = validate_output_dir(dir.as_ref(), project_root)?;
    let handle = Handle::try_current().map_err(|err| ConfigError::Runtime(err.to_string()))?;
    Ok(dispatch(&handle, path))
}

/// Start removing `dir` recursively on `runtime`, after the same check as
/// [`spawn_cleanup`].
pub fn spawn_cleanup_on(
    runtime: &Handle,
    dir: impl AsRef<Path>,
    project_root: &Path,
) -> Result<CleanupHandle> {
    let path = validate_output_dir(dir.as_ref(), project_root)?;
    Ok(dispatch(runtime, path))
}

fn dispatch(runtime: &Handle, path: PathBuf) -> CleanupHandle {
    tracing::debug!(path = %path.display(), "dispatching output directory cleanup");
    let task = runtime.spawn(remove_output_dir(path.clone()));
    CleanupHandle { path, task }
}

async fn remove_output_dir(path: PathBuf) -> Result<()> {
    match tokio::fs::remove_dir_all(&path).await {
        Ok(()) => {
            tracing::info!(path = %path.display(), "removed output directory");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "output directory already absent");
            Ok(())
        }
        Err(source) => {
            tracing::warn!(
                path = %path.display(),
                error = %source,
                "failed to remove output directory"
            );
            Err(ConfigError::Cleanup { path, source })
        }
    }
}

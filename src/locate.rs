//! Cache-directory discovery.
//!
//! N0vaDesktop keeps its downloaded media under `N0vaDesktopCache/game`
//! inside the install directory. The installer records that directory in the
//! Windows registry; instead of reading the registry, resolution here is a
//! portable probe chain, first hit wins:
//!
//! 1. An explicit `--source` path, used as the cache directory itself.
//! 2. The `N0VA_DESKTOP_PATH` environment variable, treated as the install
//!    root.
//! 3. The conventional install locations the installer defaults to.
//!
//! A missing cache directory is the one fatal condition of a run — there is
//! nothing to recover from without input.

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the N0vaDesktop install root.
pub const ENV_INSTALL_ROOT: &str = "N0VA_DESKTOP_PATH";

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("cache directory does not exist: {}", .0.display())]
    MissingCache(PathBuf),
    #[error(
        "N0vaDesktop cache not found; pass --source or set N0VA_DESKTOP_PATH to the install directory"
    )]
    NotInstalled,
}

/// Resolve the directory of cache blobs to extract from.
pub fn locate_cache(explicit: Option<&Path>) -> Result<PathBuf, LocateError> {
    if let Some(path) = explicit {
        return if path.is_dir() {
            Ok(path.to_path_buf())
        } else {
            Err(LocateError::MissingCache(path.to_path_buf()))
        };
    }

    if let Ok(root) = env::var(ENV_INSTALL_ROOT) {
        let candidate = cache_dir(Path::new(&root));
        return if candidate.is_dir() {
            Ok(candidate)
        } else {
            Err(LocateError::MissingCache(candidate))
        };
    }

    for root in default_install_roots() {
        let candidate = cache_dir(&root);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    Err(LocateError::NotInstalled)
}

/// The media cache lives in a fixed subdirectory of the install root.
fn cache_dir(install_root: &Path) -> PathBuf {
    install_root.join("N0vaDesktopCache").join("game")
}

fn default_install_roots() -> Vec<PathBuf> {
    [
        r"C:\Program Files\N0vaDesktop",
        r"C:\Program Files (x86)\N0vaDesktop",
        r"D:\N0vaDesktop",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

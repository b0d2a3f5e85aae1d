//! Install directory resolution
//!
//! User files are written next to the installed program rather than into a
//! per-user config directory. Where "next to the program" is differs between
//! a packaged build and a development run, so the lookup is a strategy the
//! store is constructed with.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::error::{PersistenceError, Result};

/// Strategy that yields the directory user files live in.
///
/// Called once per user-file operation; implementations should not cache.
pub trait BaseDirectory {
    fn resolve(&self) -> Result<PathBuf>;
}

/// Directory of the running executable (the default)
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutableDir;

impl BaseDirectory for ExecutableDir {
    fn resolve(&self) -> Result<PathBuf> {
        let exe = std::env::current_exe()
            .map_err(|e| PersistenceError::PathResolution(e.to_string()))?;
        parent_dir(&exe)
    }
}

/// A percent-encoded install location, e.g. `/opt/space%20invaders/game`
///
/// Launchers and packagers commonly report the program location in URL form;
/// the escapes are decoded as UTF-8 before taking the parent directory.
#[derive(Debug, Clone)]
pub struct InstallLocation {
    location: String,
}

impl InstallLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl BaseDirectory for InstallLocation {
    fn resolve(&self) -> Result<PathBuf> {
        let decoded = percent_decode_str(&self.location)
            .decode_utf8()
            .map_err(|e| {
                PersistenceError::PathResolution(format!(
                    "install location `{}` is not valid UTF-8 once decoded: {e}",
                    self.location
                ))
            })?;
        parent_dir(Path::new(decoded.as_ref()))
    }
}

/// An explicit directory, used as-is
#[derive(Debug, Clone)]
pub struct FixedDir(pub PathBuf);

impl FixedDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }
}

impl BaseDirectory for FixedDir {
    fn resolve(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

fn parent_dir(location: &Path) -> Result<PathBuf> {
    match location.parent() {
        // A bare file name lives in the working directory
        Some(parent) if parent.as_os_str().is_empty() => Ok(PathBuf::from(".")),
        Some(parent) => Ok(parent.to_path_buf()),
        None => Err(PersistenceError::PathResolution(format!(
            "`{}` has no parent directory",
            location.display()
        ))),
    }
}

//! Install-time copy of the bootstrap artifact into a static-asset directory.
//!
//! The destination directory is created when missing and any existing
//! `theme-init.js` is overwritten. Failures carry the offending path and are
//! returned to the caller; there is no retry or rollback.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::script::{self, SCRIPT_FILE_NAME};

#[cfg(test)]
#[path = "install_test.rs"]
mod install_test;

/// Default static-asset directory, relative to the consuming project.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Error returned by [`install`].
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where to install and what to copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallOptions {
    /// Directory that serves static assets before hydration.
    pub static_dir: PathBuf,
    /// File to copy verbatim. `None` installs [`script::render`] output.
    pub source: Option<PathBuf>,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            source: None,
        }
    }
}

impl InstallOptions {
    /// Full path of the installed artifact.
    #[must_use]
    pub fn destination(&self) -> PathBuf {
        self.static_dir.join(SCRIPT_FILE_NAME)
    }
}

/// Copy the bootstrap artifact into `options.static_dir`.
///
/// Returns the path that was written.
pub fn install(options: &InstallOptions) -> Result<PathBuf, InstallError> {
    let contents = match &options.source {
        Some(path) => read_source(path)?,
        None => script::render().into_bytes(),
    };

    fs::create_dir_all(&options.static_dir).map_err(|source| InstallError::CreateDir {
        path: options.static_dir.clone(),
        source,
    })?;

    let destination = options.destination();
    fs::write(&destination, &contents).map_err(|source| InstallError::Write {
        path: destination.clone(),
        source,
    })?;

    tracing::info!(
        path = %destination.display(),
        bytes = contents.len(),
        "installed theme bootstrap script"
    );
    Ok(destination)
}

fn read_source(path: &Path) -> Result<Vec<u8>, InstallError> {
    fs::read(path).map_err(|source| InstallError::Read {
        path: path.to_path_buf(),
        source,
    })
}

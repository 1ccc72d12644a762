// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Version file reader.
//!
//! `get_version` is a single read followed by a single JSON decode. Nothing is
//! cached between calls, so concurrent callers never share state.

use crate::models::version::VersionInfo;
use log::debug;
use std::path::Path;
use thiserror::Error;

/// Failure of `get_version`. Both variants carry the underlying error untouched.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The file could not be read (missing, permission denied, directory, ...)
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The bytes are not JSON, or not an object with string fields
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VersionError>;

/// Read and decode the version file at `path`.
///
/// The path is used as given. Missing keys decode to empty strings and
/// unknown keys are ignored; no retry is attempted on failure.
pub fn get_version(path: impl AsRef<Path>) -> Result<VersionInfo> {
    let path = path.as_ref();
    debug!("Reading version file {}", path.display());

    let data = std::fs::read(path)
        .inspect_err(|e| debug!("Failed to read version file {}: {}", path.display(), e))?;

    let info: VersionInfo = serde_json::from_slice(&data)
        .inspect_err(|e| debug!("Failed to decode version file {}: {}", path.display(), e))?;

    debug!("Loaded version {} from {}", info, path.display());
    Ok(info)
}

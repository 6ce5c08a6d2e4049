//! Filesystem checks for the read-only dataset

use std::path::Path;

use log::debug;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Path does not exist: {0}")]
    NotFound(String),
    #[error("Path is not a regular file: {0}")]
    NotAFile(String),
}

/// Check if a path exists
pub fn path_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Check if a path is a regular file
pub fn is_file(path: &str) -> bool {
    Path::new(path).is_file()
}

/// Confirm a dataset file is present before anything tries to open it.
///
/// The service never creates the dataset, so a missing file is always a
/// configuration mistake.
pub fn ensure_readable_file(path: &str) -> Result<(), Error> {
    if !path_exists(path) {
        return Err(Error::NotFound(path.to_owned()));
    }
    if !is_file(path) {
        return Err(Error::NotAFile(path.to_owned()));
    }
    debug!("found dataset file: {}", path);
    Ok(())
}

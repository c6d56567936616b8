//! Error types.
//!
//! Hit testing itself never fails; malformed path data only degrades the geometric
//! accuracy of the result.  The errors here are for loading region maps from files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An error while loading a [`crate::RegionMap`].
#[derive(Debug, Error)]
pub enum LoadingError {
    /// The region map file could not be read.
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data is not a JSON object that maps region ids to path data strings.
    #[error("invalid region map: {0}")]
    Json(#[from] serde_json::Error),
}

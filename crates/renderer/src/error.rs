//! Asset loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading scene assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build text mesh: {0}")]
    Text(#[from] three_d::RendererError),
}

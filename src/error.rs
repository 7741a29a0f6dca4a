use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while converting a sequence. All are unrecoverable at
/// the point of origin: they propagate to the sequence driver and abort
/// the batch run.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration section, key, or value.
    #[error("config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Ground-truth row with the wrong column count or a non-numeric field.
    #[error("malformed ground-truth row at {}:{line}: {message}", .path.display())]
    MalformedTable {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Track ID referenced in the table but absent from the registry.
    #[error("track {track_id} in frame {frame_id} is not in the tracklet registry")]
    UnknownTrack { track_id: u32, frame_id: u32 },

    /// Zero image dimension at polygon normalization time.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

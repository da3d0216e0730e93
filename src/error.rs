use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a ROM image can be rejected. Memory is untouched in every case.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("failed to open ROM '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read ROM '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("ROM is empty")]
    Empty,

    #[error("ROM too large to fit in memory ({size}/{max_size} bytes)")]
    TooLarge { size: usize, max_size: usize },
}

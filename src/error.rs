use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read log file {}", .path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid offset pattern: {0}")]
    Pattern(#[from] grep::regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

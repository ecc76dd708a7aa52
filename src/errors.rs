use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("'{0}' is not valid UTF-8")]
    InvalidUtf8(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

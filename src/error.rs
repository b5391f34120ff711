use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FsError {
    #[error("file already exists: {0}")]
    DuplicateName(String),

    #[error("{requested} block(s) not found. {free}/64 blocks free.")]
    InsufficientSpace { requested: usize, free: usize },

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("invalid file size: {0} (a file owns at least one block)")]
    InvalidSize(usize),

    #[error("file name must not be empty")]
    InvalidName,
}

pub type Result<T> = std::result::Result<T, FsError>;

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("nothing to archive")]
    Empty,

    #[error("failed to add entry '{name}': {source}")]
    EntryWrite {
        name: String,
        source: zip::result::ZipError,
    },

    #[error("failed to finalize archive: {0}")]
    Finalize(#[source] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

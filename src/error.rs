use failure::Fail;
use std::io;

#[derive(Fail, Debug)]
pub enum DirStoreError {
    // IO error
    #[fail(display = "IO Error {}", _0)]
    Io(#[cause] io::Error),
    // Serialization or deserialization error
    #[fail(display = "Serialization or deserialization error")]
    Serde(#[cause] serde_json::Error),
}

impl From<io::Error> for DirStoreError {
    fn from(err: io::Error) -> DirStoreError {
        DirStoreError::Io(err)
    }
}

impl From<serde_json::Error> for DirStoreError {
    fn from(err: serde_json::Error) -> Self {
        DirStoreError::Serde(err)
    }
}

pub type Result<T> = std::result::Result<T, DirStoreError>;

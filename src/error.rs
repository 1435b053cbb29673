use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("read error: {0}")]
    SourceUnreadable(#[source] io::Error),
    #[error("write error: {0}")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

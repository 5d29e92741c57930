//! Errors that can occur while compressing.

use crate::io::Error;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("Symbol {symbol:#04x} has no code in this tree")]
    UnknownSymbol { symbol: u8 },
    #[error("The payload needs {bits} bits which does not fit into the 32 bit header field")]
    PayloadTooLarge { bits: u64 },
    #[error("Error while writing compressed data: {0}")]
    Io(#[source] Error),
}

impl From<Error> for EncodeError {
    fn from(err: Error) -> Self {
        EncodeError::Io(err)
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CompressError {
    #[error(transparent)]
    EncodeError(#[from] EncodeError),
    #[error("Error while reading the input: {0}")]
    ReadInput(#[source] Error),
}

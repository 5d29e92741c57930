//! Errors that can occur while decompressing.

use super::bit_reader::BitReaderError;
use crate::io::Error;
use crate::tree::Code;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReadHeaderError {
    #[error("Could not read the payload bit count: {0}")]
    TruncatedBitCount(#[source] BitReaderError),
    #[error("Tree header ended early: {0}")]
    TruncatedTree(#[source] BitReaderError),
    #[error("Symbol {symbol:#04x} appears on more than one leaf of the tree header")]
    DuplicateSymbol { symbol: u8 },
    #[error("Tree header nests deeper than {max_depth} levels, no tree over 256 symbols does that")]
    TooDeep { max_depth: usize },
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Can't decode symbols with an empty tree")]
    EmptyTree,
    #[error("Stream ended in the payload after {bits_read} bits")]
    TruncatedPayload { bits_read: u64 },
    #[error("Bits {code} do not start any code of the tree")]
    InvalidCode { code: Code },
    #[error("Payload bit count ends in the middle of a code, {dangling} bits are left over")]
    IncompleteCode { dangling: usize },
    #[error("Found data after the end of the payload")]
    TrailingBytes,
    #[error("An earlier read from this decoder failed, the rest of the stream can't be decoded")]
    AlreadyFailed,
    #[error("Error while reading the payload: {0}")]
    Io(#[source] Error),
}

impl From<BitReaderError> for DecodeError {
    fn from(err: BitReaderError) -> Self {
        match err {
            BitReaderError::UnexpectedEof { bits_read } => {
                DecodeError::TruncatedPayload { bits_read }
            }
            BitReaderError::Io(err) => DecodeError::Io(err),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecompressError {
    #[error(transparent)]
    ReadHeaderError(#[from] ReadHeaderError),
    #[error(transparent)]
    DecodeError(#[from] DecodeError),
    #[error("Error while writing decompressed data: {0}")]
    WriteOutput(#[source] Error),
}

use super::bit_reader::BitReader;
use super::decoder::HuffmanDecoder;
use super::decompressor::check_end_of_stream;
use super::errors::{DecodeError, DecompressError};
use crate::header::read_header;
use crate::io::{Error, ErrorKind, Read};
use crate::tree::HuffmanTree;

/// High level decoder that implements [Read] over a compressed source, so it can be used with
/// `Read::read_to_end` / `Read::read_exact` or passed to another library as a source of the
/// decompressed content.
///
/// The header is read by [StreamingDecoder::new], the payload is decoded lazily as the output
/// is read.
pub struct StreamingDecoder<READ: Read> {
    tree: HuffmanTree,
    reader: BitReader<READ>,
    /// Bit position at which the payload ends
    payload_end: u64,
    finished: bool,
    /// Set by the first failed read, every later read fails as well
    failed: bool,
}

impl<READ: Read> StreamingDecoder<READ> {
    pub fn new(source: READ) -> Result<StreamingDecoder<READ>, DecompressError> {
        let mut reader = BitReader::new(source);
        if reader.is_at_end().map_err(DecodeError::Io)? {
            return Ok(StreamingDecoder {
                tree: HuffmanTree::new(),
                reader,
                payload_end: 0,
                finished: true,
                failed: false,
            });
        }

        let (tree, payload_bits) = read_header(&mut reader)?;
        let payload_end = reader.bits_read() + u64::from(payload_bits);
        Ok(StreamingDecoder {
            tree,
            reader,
            payload_end,
            finished: false,
            failed: false,
        })
    }

    /// The tree read from the header. Empty if the source was empty.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True once a read returned an error
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Payload bits that have not been decoded yet
    pub fn bits_remaining(&self) -> u64 {
        self.payload_end.saturating_sub(self.reader.bits_read())
    }

    pub fn into_inner(self) -> READ {
        self.reader.into_inner()
    }

    fn decode_into(&mut self, buf: &mut [u8]) -> Result<usize, DecodeError> {
        let mut decoder = HuffmanDecoder::new(&self.tree);
        let mut filled = 0;
        while filled < buf.len() && self.reader.bits_read() < self.payload_end {
            let remaining = self.payload_end - self.reader.bits_read();
            let symbol = decoder.decode_symbol(&mut self.reader)?;
            if self.reader.bits_read() > self.payload_end {
                return Err(DecodeError::IncompleteCode {
                    dangling: remaining as usize,
                });
            }
            buf[filled] = symbol;
            filled += 1;
        }

        if self.reader.bits_read() >= self.payload_end && !self.finished {
            check_end_of_stream(&mut self.reader)?;
            self.finished = true;
        }
        Ok(filled)
    }
}

impl<READ: Read> Read for StreamingDecoder<READ> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        if self.failed {
            return Err(Error::new(ErrorKind::Other, DecodeError::AlreadyFailed));
        }
        if self.finished || buf.is_empty() {
            return Ok(0);
        }
        self.decode_into(buf).map_err(|e| {
            self.failed = true;
            Error::new(ErrorKind::Other, e)
        })
    }
}

//! Whole stream decompression.

use super::bit_reader::BitReader;
use super::decoder::{CodeBook, HuffmanDecoder};
use super::errors::{DecodeError, DecompressError};
use crate::header::read_header;
use crate::io::{Read, Write};
use crate::tree::HuffmanTree;
use alloc::vec::Vec;

/// Decoded bytes are collected into chunks of this size before being written out
const OUTPUT_CHUNK_SIZE: usize = 64 * 1024;

/// How the payload is turned back into symbols. Both produce the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeStrategy {
    /// Derive all codes up front and match the collected bits against them
    #[default]
    CodeLookup,
    /// Walk the tree from the root for every symbol
    TreeWalk,
}

/// Decompress everything `source` holds into `sink`, returning the number of bytes written.
///
/// An empty source is the compressed form of an empty input and produces no output.
/// Anything after the byte that holds the last payload bit is rejected.
pub fn decompress<R: Read, W: Write>(
    source: R,
    mut sink: W,
    strategy: DecodeStrategy,
) -> Result<u64, DecompressError> {
    let mut br = BitReader::new(source);
    if br.is_at_end().map_err(DecodeError::Io)? {
        vprintln!("Source is empty, nothing to decompress");
        return Ok(0);
    }

    let (mut tree, payload_bits) = read_header(&mut br)?;
    let payload_bits = u64::from(payload_bits);

    let mut out = OutputChunks::new(&mut sink);
    match strategy {
        DecodeStrategy::CodeLookup => {
            let book = CodeBook::from_tree(&mut tree);
            book.decode_payload(payload_bits, &mut br, |symbol| out.push(symbol))?;
        }
        DecodeStrategy::TreeWalk => {
            decode_by_walking(&tree, payload_bits, &mut br, |symbol| out.push(symbol))?;
        }
    }
    let written = out.finish()?;

    check_end_of_stream(&mut br)?;
    sink.flush().map_err(DecompressError::WriteOutput)?;
    vprintln!(
        "Decoded {} payload bits into {} bytes",
        payload_bits,
        written
    );
    Ok(written)
}

/// Decompress `source` into a new buffer
pub fn decompress_to_vec(source: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut output = Vec::new();
    decompress(source, &mut output, DecodeStrategy::default())?;
    Ok(output)
}

fn decode_by_walking<R: Read>(
    tree: &HuffmanTree,
    payload_bits: u64,
    br: &mut BitReader<R>,
    mut emit: impl FnMut(u8) -> Result<(), DecompressError>,
) -> Result<(), DecompressError> {
    let mut decoder = HuffmanDecoder::new(tree);
    let start = br.bits_read();
    let end = start + payload_bits;

    while br.bits_read() < end {
        let remaining = end - br.bits_read();
        let symbol = decoder.decode_symbol(br)?;
        if br.bits_read() > end {
            return Err(DecodeError::IncompleteCode {
                dangling: remaining as usize,
            }
            .into());
        }
        emit(symbol)?;
    }
    Ok(())
}

/// After the payload only the zero padding of its last byte may remain
pub(crate) fn check_end_of_stream<R: Read>(br: &mut BitReader<R>) -> Result<(), DecodeError> {
    br.skip_to_byte_boundary();
    if br.is_at_end().map_err(DecodeError::Io)? {
        Ok(())
    } else {
        Err(DecodeError::TrailingBytes)
    }
}

struct OutputChunks<'sink, W: Write> {
    sink: &'sink mut W,
    chunk: Vec<u8>,
    written: u64,
}

impl<'sink, W: Write> OutputChunks<'sink, W> {
    fn new(sink: &'sink mut W) -> Self {
        Self {
            sink,
            chunk: Vec::with_capacity(OUTPUT_CHUNK_SIZE),
            written: 0,
        }
    }

    fn push(&mut self, symbol: u8) -> Result<(), DecompressError> {
        self.chunk.push(symbol);
        if self.chunk.len() == OUTPUT_CHUNK_SIZE {
            self.drain()?;
        }
        Ok(())
    }

    fn drain(&mut self) -> Result<(), DecompressError> {
        self.sink
            .write_all(&self.chunk)
            .map_err(DecompressError::WriteOutput)?;
        self.written += self.chunk.len() as u64;
        self.chunk.clear();
        Ok(())
    }

    fn finish(mut self) -> Result<u64, DecompressError> {
        self.drain()?;
        Ok(self.written)
    }
}

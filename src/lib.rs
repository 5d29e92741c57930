//! A Huffman tree compressor and decompressor.
//!
//! A compressed file is self describing: it starts with the number of payload bits,
//! followed by the shape of the Huffman tree and the symbol of every leaf, followed by
//! the codes of the original bytes. See [header] for the exact layout.
//!
//! The whole-buffer entry points are [compress] and [decompress]. [StreamingDecoder]
//! implements [io::Read] over a compressed source.
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(feature = "std")]
pub const VERBOSE: bool = false;

macro_rules! vprintln {
    ($($x:expr),*) => {
        #[cfg(feature = "std")]
        if crate::VERBOSE {
            std::println!($($x),*);
        }
    }
}

#[cfg(feature = "hash")]
pub mod checksum;
pub mod common;
pub mod decoding;
pub mod encoding;
pub mod header;
pub mod tree;

#[cfg(feature = "std")]
pub mod io;

#[cfg(not(feature = "std"))]
pub mod io_nostd;

#[cfg(not(feature = "std"))]
pub use io_nostd as io;

pub use decoding::decompressor::{decompress, decompress_to_vec, DecodeStrategy};
pub use decoding::errors::{DecodeError, DecompressError, ReadHeaderError};
pub use decoding::streaming_decoder::StreamingDecoder;
pub use encoding::compressor::{compress, compress_to_vec, CompressionSummary};
pub use encoding::errors::{CompressError, EncodeError};
pub use encoding::frequency::FrequencyTable;
pub use tree::{Code, HuffmanTree};

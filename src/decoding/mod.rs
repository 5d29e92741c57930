//! Structures and utilities used for decoding the compressed format

pub mod bit_reader;
pub mod decoder;
pub mod decompressor;
pub mod errors;
pub mod streaming_decoder;

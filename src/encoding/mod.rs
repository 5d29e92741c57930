//! Modules used for compressing data into the compressed format.
pub mod bit_writer;
pub mod compressor;
pub mod encoder;
pub mod errors;
pub mod frequency;

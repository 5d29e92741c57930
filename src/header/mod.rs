//! The header at the start of every compressed file.
//!
//! ```text
//! +----------------------+---------------------+-------------------------+
//! | payload bits: u32 LE | tree, preorder bits | payload, padded to byte |
//! +----------------------+---------------------+-------------------------+
//! ```
//!
//! The tree is written in preorder. An internal node is the bit `0` followed by its left and
//! then its right subtree. A leaf is the bit `1` followed by its symbol as eight bits, most
//! significant bit first. The payload follows directly after the last bit of the tree, without
//! any alignment.
//!
//! The bit count lets the decoder stop exactly at the end of the payload, the padding bits of the
//! last byte are never interpreted.
mod header_reader;
mod header_writer;

pub use header_reader::read_header;
pub use header_writer::{payload_bits, write_header};

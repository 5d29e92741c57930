use super::bit_writer::BitWriter;
use super::errors::EncodeError;
use crate::io::Write;
use crate::tree::HuffmanTree;

/// Writes the codes of symbols from one [HuffmanTree].
///
/// Needs the tree mutably because codes are derived and cached on first use.
pub struct HuffmanEncoder<'tree> {
    tree: &'tree mut HuffmanTree,
}

impl<'tree> HuffmanEncoder<'tree> {
    pub fn new(tree: &'tree mut HuffmanTree) -> HuffmanEncoder<'tree> {
        HuffmanEncoder { tree }
    }

    /// Write the code of `symbol`, first bit first.
    ///
    /// A symbol without a leaf is a bug in the caller: the tree has to be built from
    /// a frequency table that counted every symbol that is encoded with it.
    pub fn encode<W: Write>(
        &mut self,
        symbol: u8,
        writer: &mut BitWriter<W>,
    ) -> Result<(), EncodeError> {
        let code = self
            .tree
            .get_code(symbol)
            .ok_or(EncodeError::UnknownSymbol { symbol })?;
        writer.write_bits(code.bits())?;
        Ok(())
    }

    /// Encode every byte of `data` in order
    pub fn encode_all<W: Write>(
        &mut self,
        data: &[u8],
        writer: &mut BitWriter<W>,
    ) -> Result<(), EncodeError> {
        for &symbol in data {
            self.encode(symbol, writer)?;
        }
        Ok(())
    }
}

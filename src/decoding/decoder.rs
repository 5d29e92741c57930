use super::bit_reader::BitReader;
use super::errors::DecodeError;
use crate::common::ALPHABET_SIZE;
use crate::io::Read;
use crate::tree::{Code, HuffmanTree};
use alloc::collections::BTreeMap;

/// Decodes symbols by walking a [HuffmanTree] from the root, one bit per step.
pub struct HuffmanDecoder<'tree> {
    tree: &'tree HuffmanTree,
}

impl<'t> HuffmanDecoder<'t> {
    pub fn new(tree: &'t HuffmanTree) -> HuffmanDecoder<'t> {
        HuffmanDecoder { tree }
    }

    /// Read bits until a leaf is reached and return its symbol.
    ///
    /// A tree that consists of a single leaf has the code `0` for its symbol, so exactly one bit is
    /// read per symbol in that case.
    pub fn decode_symbol<R: Read>(&mut self, br: &mut BitReader<R>) -> Result<u8, DecodeError> {
        let root = self.tree.root().ok_or(DecodeError::EmptyTree)?;
        let mut current = self.tree.node(root);

        if current.is_leaf() {
            if br.read_bit()? {
                let mut code = Code::new();
                code.push(true);
                return Err(DecodeError::InvalidCode { code });
            }
            return Ok(current.symbol);
        }

        while let (Some(left), Some(right)) = (current.left, current.right) {
            let next = if br.read_bit()? { right } else { left };
            current = self.tree.node(next);
        }
        Ok(current.symbol)
    }
}

/// Decodes symbols by collecting bits until they spell out a known code.
///
/// Built from every code of a tree up front. Produces the same output as [HuffmanDecoder]
/// because no code is a prefix of another.
pub struct CodeBook {
    symbols: BTreeMap<Code, u8>,
    max_code_len: usize,
}

impl CodeBook {
    pub fn from_tree(tree: &mut HuffmanTree) -> CodeBook {
        let mut symbols = BTreeMap::new();
        let mut max_code_len = 0;
        for symbol in 0..ALPHABET_SIZE {
            let symbol = symbol as u8;
            if let Some(code) = tree.get_code(symbol) {
                max_code_len = max_code_len.max(code.len());
                symbols.insert(code.clone(), symbol);
            }
        }
        CodeBook {
            symbols,
            max_code_len,
        }
    }

    pub fn lookup(&self, code: &Code) -> Option<u8> {
        self.symbols.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Read exactly `payload_bits` bits and hand every decoded symbol to `emit`.
    ///
    /// Returns the number of symbols decoded. Fails if the bits stop in the middle of a code.
    pub fn decode_payload<R, E, F>(
        &self,
        payload_bits: u64,
        br: &mut BitReader<R>,
        mut emit: F,
    ) -> Result<u64, E>
    where
        R: Read,
        E: From<DecodeError>,
        F: FnMut(u8) -> Result<(), E>,
    {
        if self.is_empty() && payload_bits > 0 {
            return Err(DecodeError::EmptyTree.into());
        }

        let mut candidate = Code::new();
        let mut decoded = 0;
        for _ in 0..payload_bits {
            candidate.push(br.read_bit().map_err(DecodeError::from)?);
            if let Some(symbol) = self.lookup(&candidate) {
                emit(symbol)?;
                decoded += 1;
                candidate.clear();
            } else if candidate.len() >= self.max_code_len {
                return Err(DecodeError::InvalidCode { code: candidate }.into());
            }
        }

        if !candidate.is_empty() {
            return Err(DecodeError::IncompleteCode {
                dangling: candidate.len(),
            }
            .into());
        }
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::{CodeBook, HuffmanDecoder};
    use crate::decoding::bit_reader::BitReader;
    use crate::decoding::errors::DecodeError;
    use crate::encoding::bit_writer::BitWriter;
    use crate::encoding::encoder::HuffmanEncoder;
    use crate::encoding::frequency::FrequencyTable;
    use crate::tree::HuffmanTree;
    use alloc::vec::Vec;

    fn encode(tree: &mut HuffmanTree, input: &[u8]) -> (Vec<u8>, u64) {
        let mut writer = BitWriter::new(Vec::new());
        HuffmanEncoder::new(tree)
            .encode_all(input, &mut writer)
            .unwrap();
        let bits = writer.bits_written();
        (writer.finish().unwrap(), bits)
    }

    #[test]
    fn tree_walk_decodes_aaab() {
        let mut tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"aaab"));
        let (bytes, bits) = encode(&mut tree, b"aaab");
        assert_eq!(bits, 4);

        let mut br = BitReader::new(bytes.as_slice());
        let mut decoder = HuffmanDecoder::new(&tree);
        let decoded: Vec<u8> = (0..4).map(|_| decoder.decode_symbol(&mut br).unwrap()).collect();
        assert_eq!(decoded, b"aaab");
        assert_eq!(br.bits_read(), 4);
    }

    #[test]
    fn single_symbol_reads_one_bit_per_symbol() {
        let mut tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"kkk"));
        let (bytes, _) = encode(&mut tree, b"kkk");
        let mut br = BitReader::new(bytes.as_slice());
        let mut decoder = HuffmanDecoder::new(&tree);
        for expected_bits in 1..=3 {
            assert_eq!(decoder.decode_symbol(&mut br).unwrap(), b'k');
            assert_eq!(br.bits_read(), expected_bits);
        }
    }

    #[test]
    fn single_symbol_rejects_one_bit() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"k"));
        let source: &[u8] = &[0b1000_0000];
        let mut br = BitReader::new(source);
        assert!(matches!(
            HuffmanDecoder::new(&tree).decode_symbol(&mut br),
            Err(DecodeError::InvalidCode { .. })
        ));
    }

    #[test]
    fn tree_walk_truncated() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"abcdefgh"));
        let source: &[u8] = &[];
        let mut br = BitReader::new(source);
        assert!(matches!(
            HuffmanDecoder::new(&tree).decode_symbol(&mut br),
            Err(DecodeError::TruncatedPayload { bits_read: 0 })
        ));
    }

    #[test]
    fn empty_tree() {
        let tree = HuffmanTree::new();
        let source: &[u8] = &[0xff];
        let mut br = BitReader::new(source);
        assert!(matches!(
            HuffmanDecoder::new(&tree).decode_symbol(&mut br),
            Err(DecodeError::EmptyTree)
        ));
    }

    #[test]
    fn strategies_agree() {
        let input = b"she sells sea shells by the sea shore, the shells she sells are sea shells";
        let mut tree = HuffmanTree::build(&FrequencyTable::from_bytes(input));
        let (bytes, bits) = encode(&mut tree, input);

        let mut walked = Vec::new();
        let mut br = BitReader::new(bytes.as_slice());
        let mut decoder = HuffmanDecoder::new(&tree);
        while br.bits_read() < bits {
            walked.push(decoder.decode_symbol(&mut br).unwrap());
        }

        let mut looked_up = Vec::new();
        let book = CodeBook::from_tree(&mut tree);
        let mut br = BitReader::new(bytes.as_slice());
        let count = book
            .decode_payload(bits, &mut br, |symbol| {
                looked_up.push(symbol);
                Ok::<(), DecodeError>(())
            })
            .unwrap();

        assert_eq!(&walked[..], &input[..]);
        assert_eq!(walked, looked_up);
        assert_eq!(count, input.len() as u64);
    }

    #[test]
    fn code_book_incomplete_code() {
        // c = 0, a = 10, b = 11
        let mut tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"abbccc"));
        let book = CodeBook::from_tree(&mut tree);
        assert_eq!(book.len(), 3);
        assert_eq!(book.lookup(&tree.derive_code(b'a').unwrap()), Some(b'a'));

        let source: &[u8] = &[0b1000_0000];
        let mut br = BitReader::new(source);
        assert!(matches!(
            book.decode_payload(1, &mut br, |_| Ok::<(), DecodeError>(())),
            Err(DecodeError::IncompleteCode { dangling: 1 })
        ));
    }

    #[test]
    fn code_book_single_symbol_rejects_one_bit() {
        let mut tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"zz"));
        let book = CodeBook::from_tree(&mut tree);
        let source: &[u8] = &[0b0100_0000];
        let mut decoded = Vec::new();
        let result = book.decode_payload(2, &mut BitReader::new(source), |symbol| {
            decoded.push(symbol);
            Ok::<(), DecodeError>(())
        });
        assert!(matches!(result, Err(DecodeError::InvalidCode { .. })));
        assert_eq!(decoded, b"z");
    }
}

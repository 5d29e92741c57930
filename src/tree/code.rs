use super::HuffmanTree;
use crate::common::ALPHABET_SIZE;
use alloc::vec::Vec;
use core::fmt;

/// The bits assigned to one symbol, first bit being the step taken from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Code {
        Code { bits: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// True if `self` is a strict prefix of `other`
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len() < other.len() && other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl HuffmanTree {
    /// Compute the code of `symbol` by walking from its leaf up to the root, without
    /// consulting or filling the cache.
    ///
    /// Returns `None` if the symbol has no leaf. A leaf that is the root itself gets the code `0`.
    pub fn derive_code(&self, symbol: u8) -> Option<Code> {
        let leaf = self.leaf(symbol)?;
        let mut code = Code::new();

        if self.node(leaf).parent.is_none() {
            code.push(false);
            return Some(code);
        }

        // collected leaf to root, reversed at the end
        let mut current = leaf;
        while let Some(parent) = self.node(current).parent {
            code.push(self.node(parent).right == Some(current));
            current = parent;
        }
        code.bits.reverse();
        Some(code)
    }

    /// The code of `symbol`, derived on first use and cached afterwards.
    ///
    /// Once the cache is frozen only previously derived codes are returned.
    pub fn get_code(&mut self, symbol: u8) -> Option<&Code> {
        let idx = symbol as usize;
        if self.codes[idx].is_none() && !self.codes_frozen {
            self.codes[idx] = self.derive_code(symbol);
        }
        self.codes[idx].as_ref()
    }

    /// Derive the code of every symbol in the tree
    pub fn derive_all_codes(&mut self) {
        for symbol in 0..ALPHABET_SIZE {
            self.get_code(symbol as u8);
        }
    }

    /// Stop deriving codes. Called when the header is written, after which the tree and the
    /// codes promised by the header must not diverge.
    pub fn freeze_codes(&mut self) {
        self.codes_frozen = true;
    }

    pub fn codes_frozen(&self) -> bool {
        self.codes_frozen
    }
}

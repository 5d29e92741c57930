use crate::io::{Error, ErrorKind, Read};

/// Reads individual bits, bytes and fixed width integers from a [Read].
///
/// The counterpart of [BitWriter](crate::encoding::bit_writer::BitWriter): bits are taken
/// from each byte starting at the most significant position.
pub struct BitReader<R: Read> {
    source: R,
    /// The byte bits are currently taken from
    current: u8,
    /// Bits of `current` that have not been handed out yet
    bits_left_in_current: u8,
    /// A byte that was fetched to look for the end of the stream but not consumed yet
    peeked: Option<u8>,
    bits_read: u64,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitReaderError {
    #[error("Stream ended after {bits_read} bits")]
    UnexpectedEof { bits_read: u64 },
    #[error("Error while reading from the source: {0}")]
    Io(#[source] Error),
}

impl From<Error> for BitReaderError {
    fn from(err: Error) -> Self {
        BitReaderError::Io(err)
    }
}

impl<R: Read> BitReader<R> {
    pub fn new(source: R) -> BitReader<R> {
        BitReader {
            source,
            current: 0,
            bits_left_in_current: 0,
            peeked: None,
            bits_read: 0,
        }
    }

    /// Number of bits consumed so far
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.bits_left_in_current == 0
    }

    /// Drop the unread bits of the current byte
    pub fn skip_to_byte_boundary(&mut self) {
        self.bits_left_in_current = 0;
    }

    /// True if no further bit can be read.
    ///
    /// May fetch one byte from the source to find out, which is kept for the next read.
    pub fn is_at_end(&mut self) -> Result<bool, Error> {
        if self.bits_left_in_current > 0 || self.peeked.is_some() {
            return Ok(false);
        }
        self.peeked = self.fetch_byte()?;
        Ok(self.peeked.is_none())
    }

    pub fn read_bit(&mut self) -> Result<bool, BitReaderError> {
        if self.bits_left_in_current == 0 {
            self.current = match self.next_byte()? {
                Some(byte) => byte,
                None => {
                    return Err(BitReaderError::UnexpectedEof {
                        bits_read: self.bits_read,
                    })
                }
            };
            self.bits_left_in_current = 8;
        }
        self.bits_left_in_current -= 1;
        self.bits_read += 1;
        Ok((self.current >> self.bits_left_in_current) & 1 == 1)
    }

    /// Read `num_bits` bits, the first one read ending up as the most significant
    pub fn read_value(&mut self, num_bits: u32) -> Result<u64, BitReaderError> {
        assert!(num_bits <= 64);
        let mut value = 0;
        for _ in 0..num_bits {
            value = (value << 1) | u64::from(self.read_bit()?);
        }
        Ok(value)
    }

    /// Read the next eight bits, or `None` if the stream ends exactly at the current position
    pub fn read_byte(&mut self) -> Result<Option<u8>, BitReaderError> {
        if self.is_byte_aligned() {
            let byte = self.next_byte()?;
            if byte.is_some() {
                self.bits_read += 8;
            }
            return Ok(byte);
        }
        if self.is_at_end()? {
            return Ok(None);
        }
        Ok(Some(self.read_value(8)? as u8))
    }

    /// Read four little endian bytes
    pub fn read_u32(&mut self) -> Result<u32, BitReaderError> {
        let mut bytes = [0u8; 4];
        for byte in bytes.iter_mut() {
            *byte = self.read_byte()?.ok_or(BitReaderError::UnexpectedEof {
                bits_read: self.bits_read,
            })?;
        }
        Ok(u32::from_le_bytes(bytes))
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    fn next_byte(&mut self) -> Result<Option<u8>, Error> {
        match self.peeked.take() {
            Some(byte) => Ok(Some(byte)),
            None => self.fetch_byte(),
        }
    }

    fn fetch_byte(&mut self) -> Result<Option<u8>, Error> {
        let mut byte = [0u8; 1];
        loop {
            match self.source.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(ref e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

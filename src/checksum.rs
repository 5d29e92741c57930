//! Content checksums used to verify that a round trip reproduced its input.

use twox_hash::XxHash64;

/// Seed for every checksum computed by this crate
pub const CHECKSUM_SEED: u64 = 0;

/// xxhash64 of `data`.
pub fn checksum(data: &[u8]) -> u64 {
    XxHash64::oneshot(CHECKSUM_SEED, data)
}

#[cfg(test)]
mod tests {
    use super::checksum;

    #[test]
    fn differs_on_single_bit_flip() {
        let data = *b"the quick brown fox";
        let mut flipped = data;
        flipped[3] ^= 1;
        assert_ne!(checksum(&data), checksum(&flipped));
        assert_eq!(checksum(&data), checksum(b"the quick brown fox"));
    }
}

//! Misc utils

use ethers::{
    types::{Address, H256, U256},
    utils::to_checksum,
};

/// Converts address to checksum address
pub fn as_checksum_addr<S>(val: &Address, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&to_checksum(val, None))
}

/// Packs two 128-bit values into a single 32-byte word (high 128 bits = first value)
pub fn pack_uint128(high: U256, low: U256) -> H256 {
    let mut word = [0u8; 32];
    let mut buf = [0u8; 32];
    high.to_big_endian(&mut buf);
    word[0..16].copy_from_slice(&buf[16..32]);
    low.to_big_endian(&mut buf);
    word[16..32].copy_from_slice(&buf[16..32]);
    H256(word)
}

/// Unpacks a 32-byte word into its two 128-bit halves (high 128 bits first)
pub fn unpack_uint128(word: &H256) -> (U256, U256) {
    (U256::from_big_endian(&word.0[0..16]), U256::from_big_endian(&word.0[16..32]))
}

/// Whether the value fits into 128 bits
pub fn fits_uint128(val: &U256) -> bool {
    val.bits() <= 128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint128_pack_unpack() {
        let high = U256::from(100_000u64);
        let low = U256::from(33_100u64);
        let word = pack_uint128(high, low);
        assert_eq!(unpack_uint128(&word), (high, low));
    }

    #[test]
    fn uint128_pack_max() {
        let max = (U256::one() << 128) - 1;
        let word = pack_uint128(max, U256::zero());
        assert_eq!(unpack_uint128(&word), (max, U256::zero()));
        assert!(fits_uint128(&max));
        assert!(!fits_uint128(&(max + 1)));
    }

}

// wallet-core/src/crypto/hash.rs
//
// Hash Suite - SHA-256, double SHA-256, HASH160
// Dùng cho: checksum của extended key, fingerprint của parent key

use crate::error::{CryptoError, WalletError, WalletResult};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256(input)
#[inline]
pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

/// SHA-256(SHA-256(input))
#[inline]
pub fn double_sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(input)).into()
}

/// SHA-256(SHA-256(bytes[offset..offset + length]))
pub fn double_sha256_range(bytes: &[u8], offset: usize, length: usize) -> WalletResult<[u8; 32]> {
    let slice = offset
        .checked_add(length)
        .and_then(|end| bytes.get(offset..end))
        .ok_or_else(|| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Range {}..+{} out of bounds for {} bytes",
                offset,
                length,
                bytes.len()
            )))
        })?;

    Ok(double_sha256(slice))
}

/// HASH160 = RIPEMD-160(SHA-256(input))
#[inline]
pub fn h160(input: &[u8]) -> [u8; 20] {
    Ripemd160::digest(sha256(input)).into()
}

/// 4 byte đầu của HASH160, dùng làm fingerprint
#[inline]
pub fn fingerprint(input: &[u8]) -> [u8; 4] {
    let hash = h160(input);
    [hash[0], hash[1], hash[2], hash[3]]
}

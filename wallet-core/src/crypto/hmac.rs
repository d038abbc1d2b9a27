// wallet-core/src/crypto/hmac.rs
//
// HMAC-SHA512 expansion dùng ở mọi bước derivation (master và child)
// I = HMAC-SHA512(Key = key, Data = data), IL = I[0..32], IR = I[32..64]

use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Hai nửa của HMAC-SHA512 output.
///
/// `left` là key material (scalar), `right` là chain code. Cả hai tự zeroize khi drop.
pub struct Hmac512Output {
    left: Zeroizing<[u8; 32]>,
    right: Zeroizing<[u8; 32]>,
}

impl Hmac512Output {
    /// Ghép output từ hai nửa có sẵn (dùng khi digest đã được tính ở nơi khác)
    pub(crate) fn from_halves(left: [u8; 32], right: [u8; 32]) -> Self {
        Self {
            left: Zeroizing::new(left),
            right: Zeroizing::new(right),
        }
    }

    /// IL = I[0..32]
    #[inline]
    pub fn left(&self) -> &[u8; 32] {
        &self.left
    }

    /// IR = I[32..64]
    #[inline]
    pub fn right(&self) -> &[u8; 32] {
        &self.right
    }
}

impl std::fmt::Debug for Hmac512Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hmac512Output")
            .field("left", &"[REDACTED]")
            .field("right", &"[REDACTED]")
            .finish()
    }
}

/// HMAC-SHA512(key, data), tách thành (IL, IR)
pub fn hmac512(data: &[u8], key: &[u8]) -> WalletResult<Hmac512Output> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|e| {
        WalletError::Crypto(CryptoError::AlgorithmUnavailable(format!(
            "HMAC-SHA512 init failed: {}",
            e
        )))
    })?;

    mac.update(data);
    let result = mac.finalize().into_bytes();

    // Copy into stack buffer we fully control, then zeroize
    let mut buf = [0u8; 64];
    buf.copy_from_slice(&result);

    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    left.copy_from_slice(&buf[..32]);
    right.copy_from_slice(&buf[32..]);

    buf.zeroize();

    Ok(Hmac512Output::from_halves(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4231_case_2() {
        // RFC 4231 test case 2: Key = "Jefe", Data = "what do ya want for nothing?"
        let out = hmac512(b"what do ya want for nothing?", b"Jefe").unwrap();
        assert_eq!(
            hex::encode(out.left()),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554"
        );
        assert_eq!(
            hex::encode(out.right()),
            "9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_slip0010_master_split() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let out = hmac512(&seed, b"ed25519 seed").unwrap();
        assert_eq!(
            hex::encode(out.left()),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(out.right()),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
    }

    #[test]
    fn test_empty_key_accepted() {
        // HMAC chấp nhận key rỗng
        assert!(hmac512(b"data", b"").is_ok());
    }

    #[test]
    fn test_debug_redacts_halves() {
        let out = hmac512(b"data", b"key").unwrap();
        let debug_output = format!("{:?}", out);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains(&hex::encode(out.left())));
    }
}

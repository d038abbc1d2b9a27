// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation — BIP-32 chuẩn
//
// Chỉ dùng cho path cũ M/501H/0H/0/0: master "Bitcoin seed", child scalar cộng dồn,
// private scalar cuối cùng được dùng làm ed25519 seed.
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::crypto::paths::PathStep;
use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{ChildNumber, XPrv};
use zeroize::Zeroizing;

/// secp256k1 Key Deriver — BIP-32 Standard
///
/// # Security
/// - Private keys wrap trong `Zeroizing<[u8; 32]>` (auto-zeroize khi drop)
/// - Không lưu intermediate keys
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive private key từ seed + danh sách bước (index, hardened)
    ///
    /// # Returns
    /// 32-byte private key, auto-zeroize on drop
    pub fn derive(seed: &[u8], steps: &[PathStep]) -> WalletResult<Zeroizing<[u8; 32]>> {
        let root_xprv = XPrv::new(seed).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Failed to create master key: {}",
                e
            )))
        })?;

        let mut child = root_xprv;
        for &(index, hardened) in steps {
            let child_num = ChildNumber::new(index, hardened).map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Invalid index {}: {}",
                    index, e
                )))
            })?;

            child = child.derive_child(child_num).map_err(|_| {
                WalletError::Crypto(CryptoError::InvalidChildKey(index))
            })?;
        }

        let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }
}

// =============================================================================
// TESTS
// =============================================================================

// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Dispatch - seed + DerivationPath -> ed25519 seed (32 bytes)
//
// Kiến trúc:
// ┌──────────────────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)                        │
// │                         │                                    │
// │        ┌────────────────┴────────────────┐                   │
// │        ▼                                 ▼                   │
// │  M/501H/0H/0/0                    M/44H/501H/0H(/0H)         │
// │  BIP-32 secp256k1                 HdKeyGenerator             │
// │  ("Bitcoin seed")                 ("ed25519 seed")           │
// │        │                                 │                   │
// │        └────────────────┬────────────────┘                   │
// │                         ▼                                    │
// │            32-byte scalar → Ed25519 Bridge                   │
// └──────────────────────────────────────────────────────────────┘

pub mod ed25519;
pub(crate) mod secp256k1;

// Re-exports
pub use ed25519::{derive_signing_keypair, Ed25519Keypair};

use crate::crypto::paths::DerivationPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use crate::hd::{HdKeyGenerator, SolanaCoin};
use self::secp256k1::Secp256k1Deriver;
use tracing::debug;
use zeroize::Zeroizing;

/// Unified Key Deriver - entry point cho derivation theo `DerivationPath`
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive ed25519 seed (32 bytes) cho path đã chọn
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (16..=64 bytes, thường là 64)
    /// * `path` - Một trong các path được hỗ trợ
    pub fn derive_seed(seed: &[u8], path: DerivationPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        Self::validate_seed(seed)?;
        debug!(path = %path, "deriving account seed");

        match path {
            DerivationPath::DeprecatedM501H0H00 => Secp256k1Deriver::derive(seed, path.steps()),
            DerivationPath::Bip44M44H501H0H | DerivationPath::Bip44M44H501H0H0H => {
                let address = HdKeyGenerator::new().derive_path(
                    seed,
                    &SolanaCoin::solana(),
                    path.steps(),
                )?;
                Ok(Zeroizing::new(*address.private_key().private_key()))
            }
        }
    }

    /// Validate seed length
    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if !(16..=64).contains(&seed.len()) {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected 16 to 64 bytes, got {}",
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Bridge - 32-byte derived scalar -> ed25519 signing keypair
//
// Đây là nơi DUY NHẤT scalar 32 bytes trở thành signing key thật.
// Track secp256k1 (crypto::curve) chỉ dùng cho fingerprint / keyData.
// Construction: RFC 8032 key-from-seed (SHA-512 + clamp), qua ed25519-dalek.

use ed25519_dalek::SigningKey;

/// Độ dài public key ed25519 có padding 0x00 ở đầu (định dạng HdPublicKey)
pub const PADDED_PUBLIC_KEY_LEN: usize = 33;

/// Ed25519 keypair sinh từ scalar 32 bytes
///
/// `SigningKey` tự zeroize khi drop (feature `zeroize` của ed25519-dalek).
pub struct Ed25519Keypair {
    signing_key: SigningKey,
}

// Custom Debug - chỉ hiển thị public key
impl std::fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Keypair")
            .field("public_key", &hex::encode(self.public_key_bytes()))
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl Ed25519Keypair {
    /// Ed25519 chấp nhận mọi 32 bytes làm seed, không cần validate range
    pub fn from_scalar(scalar: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(scalar),
        }
    }

    #[inline]
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// `0x00 || public_key` (33 bytes)
    pub fn padded_public_key(&self) -> [u8; PADDED_PUBLIC_KEY_LEN] {
        let mut out = [0u8; PADDED_PUBLIC_KEY_LEN];
        out[1..].copy_from_slice(&self.public_key_bytes());
        out
    }

    #[inline]
    pub fn into_signing_key(self) -> SigningKey {
        self.signing_key
    }
}

/// Derive signing keypair từ scalar 32 bytes
#[inline]
pub fn derive_signing_keypair(scalar: &[u8; 32]) -> Ed25519Keypair {
    Ed25519Keypair::from_scalar(scalar)
}

// =============================================================================
// TESTS
// =============================================================================

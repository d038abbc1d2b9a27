// wallet-core/src/hd/key.rs
//
// Extended Key - định dạng byte canonical (82 bytes)
//
// ┌─────────┬───────┬─────────────┬──────────────┬────────────┬──────────┬──────────┐
// │ version │ depth │ fingerprint │ child number │ chain code │ key data │ checksum │
// │    4    │   1   │      4      │      4       │     32     │    33    │    4     │
// └─────────┴───────┴─────────────┴──────────────┴────────────┴──────────┴──────────┘
// checksum = double_sha256(78 bytes đầu)[0..4]

use crate::crypto::hash::{double_sha256, double_sha256_range};
use crate::crypto::paths::HARDENED_OFFSET;
use crate::error::{CryptoError, WalletError, WalletResult};
use std::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Tổng độ dài canonical encoding
pub const CANONICAL_LEN: usize = 82;
/// Độ dài phần được checksum
pub const PAYLOAD_LEN: usize = 78;
/// Độ dài key data (0x00 || k, hoặc compressed point)
pub const KEY_DATA_LEN: usize = 33;

// =============================================================================
// EXTENDED KEY
// =============================================================================

/// Extended key record, bất biến sau khi tạo
///
/// Mọi field được truyền vào cùng lúc qua [`ExtendedKey::new`], nên không tồn tại
/// record thiếu field.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKey {
    version: [u8; 4],
    depth: u8,
    fingerprint: [u8; 4],
    child_number: [u8; 4],
    chain_code: [u8; 32],
    key_data: [u8; KEY_DATA_LEN],
}

// Custom Debug - KHÔNG hiển thị chain code / key data
impl std::fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("version", &hex::encode(self.version))
            .field("depth", &self.depth)
            .field("fingerprint", &hex::encode(self.fingerprint))
            .field("child_number", &hex::encode(self.child_number))
            .field("chain_code", &"[REDACTED]")
            .field("key_data", &"[REDACTED]")
            .finish()
    }
}

impl ExtendedKey {
    pub fn new(
        version: [u8; 4],
        depth: u8,
        fingerprint: [u8; 4],
        child_number: [u8; 4],
        chain_code: [u8; 32],
        key_data: [u8; KEY_DATA_LEN],
    ) -> Self {
        Self {
            version,
            depth,
            fingerprint,
            child_number,
            chain_code,
            key_data,
        }
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn version(&self) -> [u8; 4] {
        self.version
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn fingerprint(&self) -> [u8; 4] {
        self.fingerprint
    }

    /// ser32(index), đã gồm hardened bit
    #[inline]
    pub fn child_number(&self) -> [u8; 4] {
        self.child_number
    }

    /// Index không gồm hardened bit
    #[inline]
    pub fn child_index(&self) -> u32 {
        u32::from_be_bytes(self.child_number) & !HARDENED_OFFSET
    }

    #[inline]
    pub fn is_hardened(&self) -> bool {
        u32::from_be_bytes(self.child_number) & HARDENED_OFFSET != 0
    }

    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    #[inline]
    pub fn key_data(&self) -> &[u8; KEY_DATA_LEN] {
        &self.key_data
    }

    // =========================================================================
    // CANONICAL ENCODING
    // =========================================================================

    /// version ‖ depth ‖ fingerprint ‖ child number ‖ chain code ‖ key data ‖ checksum
    pub fn canonical_bytes(&self) -> Zeroizing<[u8; CANONICAL_LEN]> {
        let mut out = Zeroizing::new([0u8; CANONICAL_LEN]);
        out[0..4].copy_from_slice(&self.version);
        out[4] = self.depth;
        out[5..9].copy_from_slice(&self.fingerprint);
        out[9..13].copy_from_slice(&self.child_number);
        out[13..45].copy_from_slice(&self.chain_code);
        out[45..PAYLOAD_LEN].copy_from_slice(&self.key_data);

        let digest = double_sha256(&out[..PAYLOAD_LEN]);
        out[PAYLOAD_LEN..].copy_from_slice(&digest[..4]);
        out
    }

    /// Parse 82 bytes canonical, kiểm tra độ dài và checksum
    pub fn from_canonical_bytes(bytes: &[u8]) -> WalletResult<Self> {
        if bytes.len() != CANONICAL_LEN {
            return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid extended key length: expected {} bytes, got {}",
                CANONICAL_LEN,
                bytes.len()
            ))));
        }

        let digest = double_sha256_range(bytes, 0, PAYLOAD_LEN)?;
        if digest[..4] != bytes[PAYLOAD_LEN..] {
            return Err(WalletError::Crypto(CryptoError::ChecksumMismatch));
        }

        let mut key = Self::new([0; 4], bytes[4], [0; 4], [0; 4], [0; 32], [0; KEY_DATA_LEN]);
        key.version.copy_from_slice(&bytes[0..4]);
        key.fingerprint.copy_from_slice(&bytes[5..9]);
        key.child_number.copy_from_slice(&bytes[9..13]);
        key.chain_code.copy_from_slice(&bytes[13..45]);
        key.key_data.copy_from_slice(&bytes[45..PAYLOAD_LEN]);
        Ok(key)
    }

    /// Base58 của 82 bytes canonical (`xprv…` / `xpub…`)
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.canonical_bytes()[..]).into_string()
    }

    pub fn from_base58(encoded: &str) -> WalletResult<Self> {
        let bytes = Zeroizing::new(bs58::decode(encoded.trim()).into_vec().map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid base58 extended key: {}",
                e
            )))
        })?);
        Self::from_canonical_bytes(&bytes)
    }
}

// =============================================================================
// HD PRIVATE KEY
// =============================================================================

/// Extended private key + raw scalar (32 bytes)
///
/// `key_data` là dạng padding `0x00 || scalar` để serialize; `private_key` là scalar gốc.
#[derive(Clone, PartialEq, Eq)]
pub struct HdPrivateKey {
    extended: ExtendedKey,
    private_key: Zeroizing<[u8; 32]>,
}

impl std::fmt::Debug for HdPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdPrivateKey")
            .field("extended", &self.extended)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl HdPrivateKey {
    pub fn new(extended: ExtendedKey, private_key: [u8; 32]) -> Self {
        Self {
            extended,
            private_key: Zeroizing::new(private_key),
        }
    }

    /// Raw scalar, dùng làm ed25519 seed
    ///
    /// # Warning
    /// Không log hoặc hiển thị giá trị này!
    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    #[inline]
    pub fn extended_key(&self) -> &ExtendedKey {
        &self.extended
    }
}

impl Deref for HdPrivateKey {
    type Target = ExtendedKey;

    fn deref(&self) -> &ExtendedKey {
        &self.extended
    }
}

// =============================================================================
// HD PUBLIC KEY
// =============================================================================

/// Extended public key
///
/// `key_data` là secp256k1 compressed point (bookkeeping track).
/// `public_key` là ed25519 public key có padding `0x00`; chỉ có khi key được derive
/// từ address (private track). Public-only derivation không biết ed25519 key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdPublicKey {
    extended: ExtendedKey,
    public_key: Option<[u8; KEY_DATA_LEN]>,
}

impl HdPublicKey {
    pub fn new(extended: ExtendedKey, public_key: Option<[u8; KEY_DATA_LEN]>) -> Self {
        Self {
            extended,
            public_key,
        }
    }

    /// `0x00 || ed25519 public key`
    #[inline]
    pub fn public_key(&self) -> Option<&[u8; KEY_DATA_LEN]> {
        self.public_key.as_ref()
    }

    /// Ed25519 public key 32 bytes (bỏ byte padding)
    pub fn ed25519_public_key(&self) -> Option<[u8; 32]> {
        self.public_key.map(|padded| {
            let mut out = [0u8; 32];
            out.copy_from_slice(&padded[1..]);
            out
        })
    }

    #[inline]
    pub fn extended_key(&self) -> &ExtendedKey {
        &self.extended
    }
}

impl Deref for HdPublicKey {
    type Target = ExtendedKey;

    fn deref(&self) -> &ExtendedKey {
        &self.extended
    }
}

// =============================================================================
// TESTS
// =============================================================================

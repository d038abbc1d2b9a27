// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Validation Error: {0}")]
    Validation(String),
}

impl WalletError {
    /// `true` khi caller có thể bỏ qua index hiện tại và thử index kế tiếp.
    ///
    /// Engine không tự retry; chính sách này thuộc về caller.
    pub fn is_recoverable_by_next_index(&self) -> bool {
        matches!(self, WalletError::Crypto(CryptoError::InvalidChildKey(_)))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Master scalar is zero or not below the secp256k1 group order.
    #[error("The master key is invalid, a different seed is required")]
    InvalidMasterKey,

    #[error("Child key at index {0} is invalid, proceed to the next index")]
    InvalidChildKey(u32),

    #[error("Cannot derive child public keys across the hardened boundary")]
    HardenedPublicDerivationUnsupported,

    #[error("Malformed key import: {0}")]
    MalformedKeyImport(String),

    #[error("Algorithm unavailable: {0}")]
    AlgorithmUnavailable(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Extended key checksum mismatch")]
    ChecksumMismatch,

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),
}

// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Hash Suite**: SHA-256, double SHA-256, HASH160 ([`hash`]).
//! - **HMAC-SHA512**: split thành IL/IR cho mọi bước derivation ([`hmac`]).
//! - **Curve Math**: secp256k1 scalar/point qua k256 ([`curve`]).
//! - **Mnemonic**: BIP-39 phrase -> seed via [`WalletMnemonic`].
//! - **Key Derivation**: seed + [`DerivationPath`] -> ed25519 seed via [`KeyDeriver`].

pub mod curve;
pub mod hash;
pub mod hmac;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use curve::{CurvePoint, Secp256k1Curve};
pub use key_deriver::{derive_signing_keypair, Ed25519Keypair, KeyDeriver};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::DerivationPath;

// wallet-core/src/lib.rs

//! Solana wallet core: HD key derivation, extended-key encoding and signing accounts.
//!
//! ```no_run
//! use wallet_core::{DerivationPath, HotAccount, SigningAccount};
//!
//! let words = ["abandon"; 11].iter().copied().chain(["about"]).collect::<Vec<_>>();
//! let account = HotAccount::from_mnemonic(&words, "", DerivationPath::default())?;
//! println!("{}", account.public_key());
//! # Ok::<(), wallet_core::WalletError>(())
//! ```

pub mod account;
pub mod crypto;
pub mod error;
pub mod hd;
pub mod pubkey;

pub use account::{HotAccount, SigningAccount};
pub use crypto::{DerivationPath, KeyDeriver, WalletMnemonic, WordCount};
pub use error::{CryptoError, MnemonicError, WalletError, WalletResult};
pub use hd::{ExtendedKey, HdAddress, HdKeyGenerator, HdPrivateKey, HdPublicKey, SolanaCoin};
pub use pubkey::PublicKey;

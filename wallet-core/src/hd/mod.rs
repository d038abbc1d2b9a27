// wallet-core/src/hd/mod.rs

//! HD Key Derivation Engine
//!
//! - **Coin descriptor**: curve label, SLIP-44 coin type, version bytes via [`SolanaCoin`].
//! - **Extended keys**: 82-byte canonical encoding with double-SHA256 checksum via [`ExtendedKey`].
//! - **Generator**: master address, child public key, child address via [`HdKeyGenerator`].

pub mod address;
pub mod coin;
pub mod generator;
pub mod key;

pub use address::HdAddress;
pub use coin::{Curve, SolanaCoin};
pub use generator::{HdKeyGenerator, MASTER_PATH};
pub use key::{ExtendedKey, HdPrivateKey, HdPublicKey, CANONICAL_LEN};

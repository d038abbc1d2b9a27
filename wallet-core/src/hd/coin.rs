// wallet-core/src/hd/coin.rs
//
// Coin descriptor - cấu hình bất biến cho HdKeyGenerator
// Host có thể load từ JSON/TOML qua serde.

use crate::crypto::paths::{coin_type, PURPOSE_BIP44};
use serde::{Deserialize, Serialize};

/// BIP-32 mainnet private version (`xprv`)
pub const MAINNET_PRIVATE_VERSION: u32 = 0x0488_ADE4;
/// BIP-32 mainnet public version (`xpub`)
pub const MAINNET_PUBLIC_VERSION: u32 = 0x0488_B21E;

/// Curve label dùng làm HMAC key khi tạo master key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// SLIP-0010: "ed25519 seed"
    Ed25519,
    /// BIP-32: "Bitcoin seed"
    Bitcoin,
}

impl Curve {
    pub const fn seed_label(&self) -> &'static str {
        match self {
            Curve::Ed25519 => "ed25519 seed",
            Curve::Bitcoin => "Bitcoin seed",
        }
    }
}

/// Coin descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolanaCoin {
    curve: Curve,
    coin_type: u32,
    purpose: u32,
    always_hardened: bool,
    #[serde(default = "default_private_version")]
    private_version: u32,
    #[serde(default = "default_public_version")]
    public_version: u32,
}

fn default_private_version() -> u32 {
    MAINNET_PRIVATE_VERSION
}

fn default_public_version() -> u32 {
    MAINNET_PUBLIC_VERSION
}

impl Default for SolanaCoin {
    fn default() -> Self {
        Self::solana()
    }
}

impl SolanaCoin {
    /// Solana: ed25519, coin type 501, purpose 44, luôn hardened
    pub const fn solana() -> Self {
        Self {
            curve: Curve::Ed25519,
            coin_type: coin_type::SOLANA,
            purpose: PURPOSE_BIP44,
            always_hardened: true,
            private_version: MAINNET_PRIVATE_VERSION,
            public_version: MAINNET_PUBLIC_VERSION,
        }
    }

    pub const fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub const fn with_versions(mut self, private_version: u32, public_version: u32) -> Self {
        self.private_version = private_version;
        self.public_version = public_version;
        self
    }

    #[inline]
    pub const fn curve(&self) -> Curve {
        self.curve
    }

    /// HMAC key cho master key
    #[inline]
    pub const fn curve_seed_label(&self) -> &'static str {
        self.curve.seed_label()
    }

    #[inline]
    pub const fn coin_type(&self) -> u32 {
        self.coin_type
    }

    #[inline]
    pub const fn purpose(&self) -> u32 {
        self.purpose
    }

    #[inline]
    pub const fn always_hardened(&self) -> bool {
        self.always_hardened
    }

    #[inline]
    pub const fn private_version(&self) -> [u8; 4] {
        self.private_version.to_be_bytes()
    }

    #[inline]
    pub const fn public_version(&self) -> [u8; 4] {
        self.public_version.to_be_bytes()
    }
}

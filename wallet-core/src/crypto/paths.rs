// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - Solana account paths
// BIP-44 (Purpose), SLIP-44 (Coin Types)

use crate::error::{WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const SOLANA: u32 = 501;
}

/// BIP-44 purpose
pub const PURPOSE_BIP44: u32 = 44;

/// Offset của hardened index (2^31)
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Một bước derivation: (index, hardened)
pub type PathStep = (u32, bool);

// =============================================================================
// DERIVATION PATH
// =============================================================================
/// Các path được hỗ trợ khi derive account từ mnemonic
///
/// Tập đóng: mỗi variant là một chuỗi `derive_child_address` cố định tính từ master.
///
/// | Variant              | Path                | Thuật toán                        |
/// |----------------------|---------------------|-----------------------------------|
/// | `DeprecatedM501H0H00`| `M/501H/0H/0/0`     | BIP-32 secp256k1 ("Bitcoin seed") |
/// | `Bip44M44H501H0H`    | `M/44H/501H/0H`     | HdKeyGenerator ("ed25519 seed")   |
/// | `Bip44M44H501H0H0H`  | `M/44H/501H/0H/0H`  | HdKeyGenerator ("ed25519 seed")   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DerivationPath {
    /// Path cũ của sollet / solana-wallet đời đầu
    DeprecatedM501H0H00,
    /// Path của solana-keygen / Solflare
    Bip44M44H501H0H,
    /// Path của Phantom / Trust Wallet (mặc định)
    #[default]
    Bip44M44H501H0H0H,
}

impl DerivationPath {
    /// Tất cả variants
    pub const ALL: [DerivationPath; 3] = [
        DerivationPath::DeprecatedM501H0H00,
        DerivationPath::Bip44M44H501H0H,
        DerivationPath::Bip44M44H501H0H0H,
    ];

    /// Canonical path text (cho diagnostics)
    pub const fn path(&self) -> &'static str {
        match self {
            DerivationPath::DeprecatedM501H0H00 => "M/501H/0H/0/0",
            DerivationPath::Bip44M44H501H0H => "M/44H/501H/0H",
            DerivationPath::Bip44M44H501H0H0H => "M/44H/501H/0H/0H",
        }
    }

    /// Các bước cố định tính từ master
    pub const fn steps(&self) -> &'static [PathStep] {
        match self {
            DerivationPath::DeprecatedM501H0H00 => {
                &[(coin_type::SOLANA, true), (0, true), (0, false), (0, false)]
            }
            DerivationPath::Bip44M44H501H0H => {
                &[(PURPOSE_BIP44, true), (coin_type::SOLANA, true), (0, true)]
            }
            DerivationPath::Bip44M44H501H0H0H => &[
                (PURPOSE_BIP44, true),
                (coin_type::SOLANA, true),
                (0, true),
                (0, true),
            ],
        }
    }

    /// Path dùng scheme BIP-32 secp256k1 chuẩn thay vì HdKeyGenerator
    #[inline]
    pub const fn is_deprecated(&self) -> bool {
        matches!(self, DerivationPath::DeprecatedM501H0H00)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    /// Chấp nhận `m`/`M` và `'`/`h`/`H` cho hardened, ví dụ `m/44'/501'/0'/0'`
    fn from_str(s: &str) -> WalletResult<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('\'', "H");

        DerivationPath::ALL
            .into_iter()
            .find(|p| p.path() == normalized)
            .ok_or_else(|| WalletError::Validation(format!("Unsupported derivation path: {}", s)))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_paths() {
        assert_eq!(DerivationPath::DeprecatedM501H0H00.path(), "M/501H/0H/0/0");
        assert_eq!(DerivationPath::Bip44M44H501H0H.path(), "M/44H/501H/0H");
        assert_eq!(DerivationPath::Bip44M44H501H0H0H.to_string(), "M/44H/501H/0H/0H");
    }

    #[test]
    fn test_default_is_bip44_with_change() {
        assert_eq!(DerivationPath::default(), DerivationPath::Bip44M44H501H0H0H);
    }

    #[test]
    fn test_steps_render_path() {
        // steps() và path() phải mô tả cùng một path
        for p in DerivationPath::ALL {
            let rendered: String = std::iter::once("M".to_string())
                .chain(
                    p.steps()
                        .iter()
                        .map(|(i, h)| format!("{}{}", i, if *h { "H" } else { "" })),
                )
                .collect::<Vec<_>>()
                .join("/");
            assert_eq!(rendered, p.path());
        }
    }

    #[test]
    fn test_from_str_variants() {
        assert_eq!(
            "m/44'/501'/0'/0'".parse::<DerivationPath>().unwrap(),
            DerivationPath::Bip44M44H501H0H0H
        );
        assert_eq!(
            "m/44h/501h/0h".parse::<DerivationPath>().unwrap(),
            DerivationPath::Bip44M44H501H0H
        );
        assert_eq!(
            " M/501H/0H/0/0 ".parse::<DerivationPath>().unwrap(),
            DerivationPath::DeprecatedM501H0H00
        );
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for p in DerivationPath::ALL {
            assert_eq!(p.to_string().parse::<DerivationPath>().unwrap(), p);
        }
    }

    #[test]
    fn test_from_str_rejects_unsupported() {
        assert!(matches!(
            "m/44'/60'/0'/0/0".parse::<DerivationPath>(),
            Err(WalletError::Validation(_))
        ));
        assert!("invalid".parse::<DerivationPath>().is_err());
    }

    #[test]
    fn test_only_deprecated_uses_bip32() {
        assert!(DerivationPath::DeprecatedM501H0H00.is_deprecated());
        assert!(!DerivationPath::Bip44M44H501H0H.is_deprecated());
        assert!(!DerivationPath::Bip44M44H501H0H0H.is_deprecated());
    }
}

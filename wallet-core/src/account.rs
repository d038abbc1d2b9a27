// wallet-core/src/account.rs
//
// Signing Account - ed25519 keypair sau capability {public_key, sign}
//
// Nguồn tạo HotAccount:
// - Random (OsRng)
// - Seed 32 bytes (ed25519 key-from-seed)
// - Secret key 64 bytes (seed ‖ public key), hoặc dạng text "[1,2,...]"
// - Mnemonic + passphrase + DerivationPath

use crate::crypto::key_deriver::{derive_signing_keypair, KeyDeriver};
use crate::crypto::mnemonic::WalletMnemonic;
use crate::crypto::paths::DerivationPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use crate::pubkey::{PublicKey, SIGNATURE_LEN};
use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use tracing::debug;
use zeroize::Zeroizing;

/// Độ dài secret key dạng keypair (seed ‖ public key)
pub const SECRET_KEY_LEN: usize = 64;

/// Capability mà phần còn lại của SDK dùng để ký
pub trait SigningAccount {
    fn public_key(&self) -> PublicKey;

    /// Detached ed25519 signature (64 bytes)
    fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN];
}

/// Account giữ private key trong bộ nhớ
///
/// Private key không bao giờ được expose; `SigningKey` tự zeroize khi drop.
pub struct HotAccount {
    signing_key: SigningKey,
}

// Custom Debug - chỉ hiển thị public key
impl std::fmt::Debug for HotAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotAccount")
            .field("public_key", &self.public_key())
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl Default for HotAccount {
    fn default() -> Self {
        Self::new()
    }
}

impl HotAccount {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Keypair ngẫu nhiên từ OS CSPRNG
    pub fn new() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Ed25519 key-from-seed
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: derive_signing_keypair(seed).into_signing_key(),
        }
    }

    /// Import secret key 64 bytes (seed ‖ public key)
    ///
    /// Public key ở 32 bytes cuối phải khớp với seed ở 32 bytes đầu.
    pub fn from_secret_key(secret_key: &[u8]) -> WalletResult<Self> {
        let keypair: Zeroizing<[u8; SECRET_KEY_LEN]> =
            Zeroizing::new(secret_key.try_into().map_err(|_| {
                WalletError::Crypto(CryptoError::MalformedKeyImport(format!(
                    "Expected {} bytes, got {}",
                    SECRET_KEY_LEN,
                    secret_key.len()
                )))
            })?);

        let signing_key = SigningKey::from_keypair_bytes(&keypair).map_err(|_| {
            WalletError::Crypto(CryptoError::MalformedKeyImport(
                "Public key half does not match the secret seed".to_string(),
            ))
        })?;

        Ok(Self { signing_key })
    }

    /// Import từ danh sách byte dạng text, ví dụ `[12,-7,255,...]` (Sollet export)
    ///
    /// Bỏ qua `[`, `]` và khoảng trắng. Mỗi token là số nguyên trong `-128..=255`.
    pub fn from_signed_byte_list(text: &str) -> WalletResult<Self> {
        let bytes = parse_signed_byte_list(text)?;
        Self::from_secret_key(&bytes)
    }

    /// Derive account từ mnemonic theo `path`
    pub fn from_mnemonic<S: AsRef<str>>(
        words: &[S],
        passphrase: &str,
        path: DerivationPath,
    ) -> WalletResult<Self> {
        let mnemonic = WalletMnemonic::from_words(words)?;
        let seed = mnemonic.to_seed_bytes(Some(passphrase))?;
        Self::from_seed_with_path(&seed[..], path)
    }

    /// Derive account từ BIP-39 seed theo `path`
    pub fn from_seed_with_path(seed: &[u8], path: DerivationPath) -> WalletResult<Self> {
        let account_seed = KeyDeriver::derive_seed(seed, path)?;
        let account = Self::from_seed(&account_seed);
        debug!(path = %path, public_key = %account.public_key(), "derived hot account");
        Ok(account)
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    pub fn verify(&self, message: &[u8], signature: &[u8; SIGNATURE_LEN]) -> bool {
        self.public_key().verify(message, signature)
    }
}

impl SigningAccount for HotAccount {
    fn public_key(&self) -> PublicKey {
        PublicKey::new(self.signing_key.verifying_key().to_bytes())
    }

    fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN] {
        self.signing_key.sign(message).to_bytes()
    }
}

/// "[a,b,c,...]" -> bytes (two's complement cho số âm)
fn parse_signed_byte_list(text: &str) -> WalletResult<Zeroizing<Vec<u8>>> {
    let malformed = |msg: String| WalletError::Crypto(CryptoError::MalformedKeyImport(msg));

    let sanitized = text.trim().trim_start_matches('[').trim_end_matches(']');
    let mut bytes = Zeroizing::new(Vec::with_capacity(SECRET_KEY_LEN));

    for (position, token) in sanitized.split(',').enumerate() {
        let token = token.trim();
        let value: i16 = token
            .parse()
            .map_err(|_| malformed(format!("Token {} is not a number", position)))?;
        if !(-128..=255).contains(&value) {
            return Err(malformed(format!(
                "Token {} is out of byte range: {}",
                position, value
            )));
        }
        bytes.push(value as u8);
    }

    if bytes.len() != SECRET_KEY_LEN {
        return Err(malformed(format!(
            "Expected {} bytes, got {}",
            SECRET_KEY_LEN,
            bytes.len()
        )));
    }

    Ok(bytes)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    // ed25519 public key của seed [7u8; 32]
    const SEED_7_ADDRESS: &str = "GmaDrppBC7P5ARKV8g3djiwP89vz1jLK23V2GBjuAEGB";

    fn words() -> Vec<&'static str> {
        TEST_MNEMONIC_12.split(' ').collect()
    }

    fn keypair_bytes_for_seed_7() -> [u8; 64] {
        let account = HotAccount::from_seed(&[7u8; 32]);
        let mut raw = [0u8; 64];
        raw[..32].copy_from_slice(&[7u8; 32]);
        raw[32..].copy_from_slice(account.public_key().as_bytes());
        raw
    }

    /// Render như Java `byte` (signed)
    fn to_signed_list(bytes: &[u8]) -> String {
        let items: Vec<String> = bytes.iter().map(|b| (*b as i8).to_string()).collect();
        format!("[{}]", items.join(","))
    }

    // =========================================================================
    // MNEMONIC DERIVATION (golden vectors)
    // =========================================================================

    #[test]
    fn test_from_mnemonic_default_path_matches_phantom() {
        let account =
            HotAccount::from_mnemonic(&words(), "", DerivationPath::default()).unwrap();
        assert_eq!(
            account.public_key().to_string(),
            "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"
        );
    }

    #[test]
    fn test_from_mnemonic_bip44_account() {
        let account =
            HotAccount::from_mnemonic(&words(), "", DerivationPath::Bip44M44H501H0H).unwrap();
        assert_eq!(
            account.public_key().to_string(),
            "GjJyeC1r2RgkuoCWMyPYkCWSGSGLcz266EaAkLA27AhL"
        );
    }

    #[test]
    fn test_from_mnemonic_deprecated_path() {
        let account =
            HotAccount::from_mnemonic(&words(), "", DerivationPath::DeprecatedM501H0H00).unwrap();
        assert_eq!(
            account.public_key().to_string(),
            "FTt72dUEL1X9pPs9V9q4Eh5ejKXEbPD6snaHSQAmnJGU"
        );
    }

    #[test]
    fn test_from_mnemonic_passphrase_changes_account() {
        let plain = HotAccount::from_mnemonic(&words(), "", DerivationPath::default()).unwrap();
        let salted =
            HotAccount::from_mnemonic(&words(), "TREZOR", DerivationPath::default()).unwrap();
        assert_ne!(plain.public_key(), salted.public_key());
    }

    #[test]
    fn test_from_mnemonic_invalid_words() {
        let result = HotAccount::from_mnemonic(&["abandon", "about"], "", DerivationPath::default());
        assert!(matches!(result, Err(WalletError::Mnemonic(_))));
    }

    // =========================================================================
    // SEED / SECRET KEY IMPORT
    // =========================================================================

    #[test]
    fn test_from_seed() {
        let account = HotAccount::from_seed(&[7u8; 32]);
        assert_eq!(account.public_key().to_string(), SEED_7_ADDRESS);
    }

    #[test]
    fn test_from_secret_key() {
        let account = HotAccount::from_secret_key(&keypair_bytes_for_seed_7()).unwrap();
        assert_eq!(account.public_key().to_string(), SEED_7_ADDRESS);
    }

    #[test]
    fn test_from_secret_key_rejects_mismatched_public_half() {
        let mut raw = keypair_bytes_for_seed_7();
        raw[40] ^= 0x01;
        assert!(matches!(
            HotAccount::from_secret_key(&raw),
            Err(WalletError::Crypto(CryptoError::MalformedKeyImport(_)))
        ));
    }

    #[test]
    fn test_from_secret_key_rejects_wrong_length() {
        assert!(matches!(
            HotAccount::from_secret_key(&[7u8; 32]),
            Err(WalletError::Crypto(CryptoError::MalformedKeyImport(_)))
        ));
    }

    #[test]
    fn test_signed_byte_list_round_trip() {
        let raw = keypair_bytes_for_seed_7();
        let from_list = HotAccount::from_signed_byte_list(&to_signed_list(&raw)).unwrap();
        let from_raw = HotAccount::from_secret_key(&raw).unwrap();

        assert_eq!(from_list.public_key(), from_raw.public_key());
        // Ed25519 deterministic: cùng key -> cùng signature
        assert_eq!(from_list.sign(b"payload"), from_raw.sign(b"payload"));
    }

    #[test]
    fn test_signed_byte_list_accepts_unsigned_and_whitespace() {
        let raw = keypair_bytes_for_seed_7();
        let items: Vec<String> = raw.iter().map(|b| b.to_string()).collect();
        let text = format!(" [ {} ] ", items.join(", "));
        let account = HotAccount::from_signed_byte_list(&text).unwrap();
        assert_eq!(account.public_key().to_string(), SEED_7_ADDRESS);
    }

    #[test]
    fn test_signed_byte_list_wrong_length() {
        let raw = keypair_bytes_for_seed_7();
        assert!(matches!(
            HotAccount::from_signed_byte_list(&to_signed_list(&raw[..63])),
            Err(WalletError::Crypto(CryptoError::MalformedKeyImport(_)))
        ));
        assert!(matches!(
            HotAccount::from_signed_byte_list("[]"),
            Err(WalletError::Crypto(CryptoError::MalformedKeyImport(_)))
        ));
    }

    #[test]
    fn test_signed_byte_list_invalid_tokens() {
        let raw = keypair_bytes_for_seed_7();
        let mut items: Vec<String> = raw.iter().map(|b| b.to_string()).collect();

        items[3] = "abc".to_string();
        assert!(matches!(
            HotAccount::from_signed_byte_list(&items.join(",")),
            Err(WalletError::Crypto(CryptoError::MalformedKeyImport(_)))
        ));

        items[3] = "256".to_string();
        assert!(HotAccount::from_signed_byte_list(&items.join(",")).is_err());

        items[3] = "-129".to_string();
        assert!(HotAccount::from_signed_byte_list(&items.join(",")).is_err());
    }

    // =========================================================================
    // SIGNING
    // =========================================================================

    #[test]
    fn test_sign_and_verify() {
        let account = HotAccount::new();
        let signature = account.sign(b"transfer 1 SOL");
        assert!(account.verify(b"transfer 1 SOL", &signature));
        assert!(!account.verify(b"transfer 2 SOL", &signature));
        assert!(account.public_key().verify(b"transfer 1 SOL", &signature));
    }

    #[test]
    fn test_trait_object() {
        let account: Box<dyn SigningAccount> = Box::new(HotAccount::from_seed(&[7u8; 32]));
        let signature = account.sign(b"msg");
        assert!(account.public_key().verify(b"msg", &signature));
    }

    #[test]
    fn test_random_accounts_differ() {
        assert_ne!(HotAccount::new().public_key(), HotAccount::default().public_key());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let account = HotAccount::from_seed(&[7u8; 32]);
        let debug_output = format!("{:?}", account);
        assert!(debug_output.contains("REDACTED"));
        assert!(debug_output.contains(SEED_7_ADDRESS));
        assert!(!debug_output.contains(&hex::encode([7u8; 32])));
    }
}

// wallet-core/src/hd/generator.rs
//
// HD Key Generator - master key, child public key, child address
//
// Hai track chạy song song ở mỗi bước:
// ┌───────────────────────────────────────────────────────────────────┐
// │  I = HMAC-SHA512(chain code, data)  →  IL (32) ‖ IR (32)          │
// │                                                                   │
// │  secp256k1 bookkeeping             ed25519 leaf                   │
// │  child = (IL + k_par) mod n        private key = IL               │
// │  keyData = ser_P(child·G)          public key = ed25519(IL)       │
// │                                                                   │
// │  chain code = IR (chung cho cả hai)                               │
// └───────────────────────────────────────────────────────────────────┘
//
// Private key mang sang bước sau là IL, không phải child scalar. Với path toàn
// hardened, kết quả trùng SLIP-0010 ed25519.

use super::address::HdAddress;
use super::coin::SolanaCoin;
use super::key::{ExtendedKey, HdPrivateKey, HdPublicKey, KEY_DATA_LEN};
use crate::crypto::curve::{parse_big_integer, serialize32, serialize_scalar, Secp256k1Curve};
use crate::crypto::hash::fingerprint;
use crate::crypto::hmac::{hmac512, Hmac512Output};
use crate::crypto::key_deriver::ed25519::derive_signing_keypair;
use crate::crypto::paths::{PathStep, HARDENED_OFFSET};
use crate::error::{CryptoError, WalletError, WalletResult};
use tracing::{debug, instrument, trace};
use zeroize::Zeroizing;

/// Path text của master node
pub const MASTER_PATH: &str = "m";

/// Key Derivation Engine
///
/// Không có state ngoài tham số curve (bất biến), nên có thể dùng chung giữa
/// nhiều thread mà không cần lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HdKeyGenerator {
    curve: Secp256k1Curve,
}

impl HdKeyGenerator {
    pub fn new() -> Self {
        Self::with_curve(Secp256k1Curve::new())
    }

    pub fn with_curve(curve: Secp256k1Curve) -> Self {
        Self { curve }
    }

    #[inline]
    pub fn curve(&self) -> &Secp256k1Curve {
        &self.curve
    }

    // =========================================================================
    // MASTER KEY
    // =========================================================================

    /// Tạo master address từ seed
    ///
    /// I = HMAC-SHA512(Key = coin.curve_seed_label(), Data = seed)
    ///
    /// # Errors
    /// `InvalidMasterKey` nếu IL = 0 hoặc IL >= n. Cần seed khác.
    #[instrument(skip_all, fields(coin_type = coin.coin_type(), curve = ?coin.curve()))]
    pub fn derive_master_address(&self, seed: &[u8], coin: &SolanaCoin) -> WalletResult<HdAddress> {
        let iv = hmac512(seed, coin.curve_seed_label().as_bytes())?;
        self.master_address_from_digest(&iv, coin)
    }

    /// Dựng master address từ HMAC output đã tính sẵn
    pub(crate) fn master_address_from_digest(
        &self,
        iv: &Hmac512Output,
        coin: &SolanaCoin,
    ) -> WalletResult<HdAddress> {
        let master_scalar = parse_big_integer(iv.left())?;
        if !self.curve.is_valid_scalar(&master_scalar) {
            return Err(WalletError::Crypto(CryptoError::InvalidMasterKey));
        }

        let private_ext = ExtendedKey::new(
            coin.private_version(),
            0,
            [0; 4],
            [0; 4],
            *iv.right(),
            *pad_scalar(iv.left()),
        );

        let public_ext = ExtendedKey::new(
            coin.public_version(),
            0,
            [0; 4],
            [0; 4],
            *iv.right(),
            self.curve.serialize_point(&self.curve.point(&master_scalar))?,
        );

        let keypair = derive_signing_keypair(iv.left());

        debug!("derived master address");

        Ok(HdAddress::new(
            HdPrivateKey::new(private_ext, *iv.left()),
            HdPublicKey::new(public_ext, Some(keypair.padded_public_key())),
            *coin,
            MASTER_PATH.to_string(),
        ))
    }

    // =========================================================================
    // CHILD PUBLIC KEY (non-hardened only)
    // =========================================================================

    /// Derive child public key chỉ từ parent public key
    ///
    /// Data = parent.keyData ‖ ser32(index), I = HMAC-SHA512(parent.chainCode, Data)
    /// child = IL·G + parent point
    ///
    /// Kết quả không có ed25519 public key (`public_key() == None`).
    ///
    /// # Errors
    /// - `HardenedPublicDerivationUnsupported` nếu `hardened` hoặc `index >= 2^31`
    /// - `InvalidChildKey` nếu IL >= n hoặc child là point at infinity. Caller nên thử index kế tiếp.
    #[instrument(skip_all, fields(depth = parent.depth(), index = index, hardened = hardened))]
    pub fn derive_child_public_key(
        &self,
        parent: &HdPublicKey,
        index: u32,
        hardened: bool,
    ) -> WalletResult<HdPublicKey> {
        if hardened || index >= HARDENED_OFFSET {
            return Err(WalletError::Crypto(
                CryptoError::HardenedPublicDerivationUnsupported,
            ));
        }

        let mut data = [0u8; KEY_DATA_LEN + 4];
        data[..KEY_DATA_LEN].copy_from_slice(parent.key_data());
        data[KEY_DATA_LEN..].copy_from_slice(&serialize32(index));
        let iv = hmac512(&data, parent.chain_code())?;

        self.child_public_key_from_digest(parent, index, &iv)
    }

    /// Dựng child public key (non-hardened) từ HMAC output đã tính sẵn
    pub(crate) fn child_public_key_from_digest(
        &self,
        parent: &HdPublicKey,
        index: u32,
        iv: &Hmac512Output,
    ) -> WalletResult<HdPublicKey> {
        let depth = child_depth(parent.depth())?;

        let il = parse_big_integer(iv.left())?;
        if il >= *self.curve.order() {
            return Err(WalletError::Crypto(CryptoError::InvalidChildKey(index)));
        }

        let parent_point = self.curve.deserialize_point(parent.key_data())?;
        let child_point = self.curve.point(&il) + parent_point;
        if child_point.is_infinity() {
            return Err(WalletError::Crypto(CryptoError::InvalidChildKey(index)));
        }

        let parent_fingerprint = fingerprint(parent.key_data());
        trace!(fingerprint = %hex::encode(parent_fingerprint), "derived child public key");

        Ok(HdPublicKey::new(
            ExtendedKey::new(
                parent.version(),
                depth,
                parent_fingerprint,
                serialize32(index),
                *iv.right(),
                self.curve.serialize_point(&child_point)?,
            ),
            None,
        ))
    }

    // =========================================================================
    // CHILD ADDRESS (hardened hoặc non-hardened)
    // =========================================================================

    /// Derive child address từ parent address
    ///
    /// - Hardened: Data = 0x00 ‖ ser256(k_par) ‖ ser32(index + 2^31)
    /// - Non-hardened: Data = parent.publicKey.keyData ‖ ser32(index)
    ///
    /// I = HMAC-SHA512(parent.privateKey.chainCode, Data). Path = `parent.path/index[H]`.
    ///
    /// # Errors
    /// - `Validation` nếu `index >= 2^31` hoặc depth vượt 255
    /// - `InvalidChildKey` nếu (IL + k_par) mod n = 0
    #[instrument(skip_all, fields(parent_path = parent.path(), index = index, hardened = hardened))]
    pub fn derive_child_address(
        &self,
        parent: &HdAddress,
        index: u32,
        hardened: bool,
    ) -> WalletResult<HdAddress> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::Validation(format!(
                "Child index {} out of range, use the hardened flag instead",
                index
            )));
        }
        let effective_index = if hardened { index | HARDENED_OFFSET } else { index };
        let child_number = serialize32(effective_index);

        let parent_private = parent.private_key();
        let k_par = parse_big_integer(parent_private.key_data())?;

        let iv = if hardened {
            let mut data = Zeroizing::new([0u8; 1 + 32 + 4]);
            data[1..33].copy_from_slice(&serialize_scalar(&k_par));
            data[33..].copy_from_slice(&child_number);
            hmac512(&data[..], parent_private.chain_code())?
        } else {
            let mut data = [0u8; KEY_DATA_LEN + 4];
            data[..KEY_DATA_LEN].copy_from_slice(parent.public_key().key_data());
            data[KEY_DATA_LEN..].copy_from_slice(&child_number);
            hmac512(&data, parent_private.chain_code())?
        };

        self.child_address_from_digest(parent, index, hardened, &iv)
    }

    /// Dựng child address từ HMAC output đã tính sẵn
    pub(crate) fn child_address_from_digest(
        &self,
        parent: &HdAddress,
        index: u32,
        hardened: bool,
        iv: &Hmac512Output,
    ) -> WalletResult<HdAddress> {
        let depth = child_depth(parent.depth())?;
        let effective_index = if hardened { index | HARDENED_OFFSET } else { index };
        let child_number = serialize32(effective_index);

        let parent_private = parent.private_key();
        let k_par = parse_big_integer(parent_private.key_data())?;

        // secp256k1 bookkeeping track
        let il = parse_big_integer(iv.left())?;
        let child_scalar = self.curve.add_scalars(&il, &k_par);
        let child_point = self.curve.point(&child_scalar);
        if child_point.is_infinity() {
            return Err(WalletError::Crypto(CryptoError::InvalidChildKey(index)));
        }

        // Fingerprint của cả hai key lấy từ ed25519 public key của parent
        let parent_padded = parent
            .public_key()
            .public_key()
            .copied()
            .unwrap_or_else(|| derive_signing_keypair(parent_private.private_key()).padded_public_key());
        let parent_fingerprint = fingerprint(&parent_padded);

        let private_ext = ExtendedKey::new(
            parent_private.version(),
            depth,
            parent_fingerprint,
            child_number,
            *iv.right(),
            *pad_scalar(iv.left()),
        );

        let public_ext = ExtendedKey::new(
            parent.public_key().version(),
            depth,
            parent_fingerprint,
            child_number,
            *iv.right(),
            self.curve.serialize_point(&child_point)?,
        );

        // ed25519 leaf track
        let keypair = derive_signing_keypair(iv.left());

        let path = format!(
            "{}/{}{}",
            parent.path(),
            index,
            if hardened { "H" } else { "" }
        );
        debug!(
            path = %path,
            fingerprint = %hex::encode(parent_fingerprint),
            "derived child address"
        );

        Ok(HdAddress::new(
            HdPrivateKey::new(private_ext, *iv.left()),
            HdPublicKey::new(public_ext, Some(keypair.padded_public_key())),
            *parent.coin(),
            path,
        ))
    }

    // =========================================================================
    // PATH WALK
    // =========================================================================

    /// Derive master rồi đi lần lượt qua `steps`
    ///
    /// Nếu `coin.always_hardened()` thì mọi bước đều hardened.
    pub fn derive_path(
        &self,
        seed: &[u8],
        coin: &SolanaCoin,
        steps: &[PathStep],
    ) -> WalletResult<HdAddress> {
        let mut address = self.derive_master_address(seed, coin)?;
        for &(index, hardened) in steps {
            let hardened = hardened || coin.always_hardened();
            address = self.derive_child_address(&address, index, hardened)?;
        }
        Ok(address)
    }
}

/// `0x00 || scalar`
fn pad_scalar(scalar: &[u8; 32]) -> Zeroizing<[u8; KEY_DATA_LEN]> {
    let mut out = Zeroizing::new([0u8; KEY_DATA_LEN]);
    out[1..].copy_from_slice(scalar);
    out
}

fn child_depth(parent_depth: u8) -> WalletResult<u8> {
    parent_depth
        .checked_add(1)
        .ok_or_else(|| WalletError::Validation("Maximum derivation depth (255) reached".to_string()))
}

// =============================================================================
// TESTS
// =============================================================================

// wallet-core/src/crypto/curve.rs
//
// secp256k1 Curve Math - scalar/point operations cho HD bookkeeping track
//
// Track secp256k1 chỉ dùng để tính keyData (compressed point) và fingerprint
// tương thích với định dạng extended key. Không dùng để ký.
// Arithmetic của k256 là constant-time (không dùng bignum tổng quát).

use crate::error::{CryptoError, WalletError, WalletResult};
use k256::elliptic_curve::bigint::{Encoding, U256};
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::{Curve, Group};
use k256::{AffinePoint, EncodedPoint, ProjectivePoint, Scalar, Secp256k1};
use std::ops::Add;

/// Độ dài compressed point (SEC1): 1 byte prefix + 32 byte X
pub const COMPRESSED_POINT_LEN: usize = 33;

// =============================================================================
// CURVE POINT
// =============================================================================

/// Điểm trên secp256k1, có thể là point at infinity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurvePoint(ProjectivePoint);

impl CurvePoint {
    /// Point at infinity (phần tử đơn vị của group)
    pub fn infinity() -> Self {
        Self(ProjectivePoint::IDENTITY)
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        bool::from(self.0.is_identity())
    }
}

impl Add for CurvePoint {
    type Output = CurvePoint;

    fn add(self, rhs: CurvePoint) -> CurvePoint {
        CurvePoint(self.0 + rhs.0)
    }
}

// =============================================================================
// CURVE PARAMETERS
// =============================================================================

/// Tham số secp256k1, tạo một lần và truyền vào engine
///
/// Thay cho bảng curve toàn cục: `HdKeyGenerator` sở hữu một giá trị này.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1Curve {
    order: U256,
}

impl Default for Secp256k1Curve {
    fn default() -> Self {
        Self::new()
    }
}

impl Secp256k1Curve {
    pub fn new() -> Self {
        Self {
            order: Secp256k1::ORDER,
        }
    }

    /// Group order `n`
    #[inline]
    pub fn order(&self) -> &U256 {
        &self.order
    }

    /// `0 < k < n`
    #[inline]
    pub fn is_valid_scalar(&self, k: &U256) -> bool {
        *k != U256::ZERO && *k < self.order
    }

    /// k·G
    pub fn point(&self, k: &U256) -> CurvePoint {
        CurvePoint(ProjectivePoint::GENERATOR * to_scalar(k))
    }

    /// (a + b) mod n
    pub fn add_scalars(&self, a: &U256, b: &U256) -> U256 {
        let sum = to_scalar(a) + to_scalar(b);
        U256::from_be_slice(&sum.to_bytes())
    }

    /// Compressed SEC1 encoding (33 bytes). Point at infinity không có dạng compressed.
    pub fn serialize_point(&self, p: &CurvePoint) -> WalletResult<[u8; COMPRESSED_POINT_LEN]> {
        if p.is_infinity() {
            return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(
                "Cannot serialize the point at infinity".to_string(),
            )));
        }

        let encoded = p.0.to_affine().to_encoded_point(true);
        let bytes = encoded.as_bytes();
        if bytes.len() != COMPRESSED_POINT_LEN {
            return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Unexpected compressed point length: {}",
                bytes.len()
            ))));
        }

        let mut out = [0u8; COMPRESSED_POINT_LEN];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Parse compressed SEC1 point, reject điểm không nằm trên curve
    pub fn deserialize_point(&self, bytes: &[u8; COMPRESSED_POINT_LEN]) -> WalletResult<CurvePoint> {
        // Chỉ nhận compressed tag 0x02 / 0x03
        if !matches!(bytes[0], 0x02 | 0x03) {
            return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid compressed point tag: 0x{:02x}",
                bytes[0]
            ))));
        }

        let encoded = EncodedPoint::from_bytes(bytes).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid SEC1 point encoding: {}",
                e
            )))
        })?;

        let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or_else(|| {
                WalletError::Crypto(CryptoError::InvalidKeyFormat(
                    "Point is not on secp256k1".to_string(),
                ))
            })?;

        Ok(CurvePoint(ProjectivePoint::from(affine)))
    }
}

// =============================================================================
// BIG INTEGER HELPERS
// =============================================================================

/// Parse big-endian unsigned integer (tối đa 256 bit).
///
/// Chấp nhận input dài hơn 32 bytes nếu các byte thừa ở đầu đều là 0,
/// ví dụ keyData 33 bytes dạng `0x00 || k`.
pub fn parse_big_integer(bytes: &[u8]) -> WalletResult<U256> {
    let first_non_zero = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_non_zero..];

    if significant.len() > 32 {
        return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
            "Integer does not fit in 256 bits ({} significant bytes)",
            significant.len()
        ))));
    }

    let mut buf = [0u8; 32];
    buf[32 - significant.len()..].copy_from_slice(significant);
    Ok(U256::from_be_slice(&buf))
}

/// ser256(k): 32 bytes big-endian
#[inline]
pub fn serialize_scalar(k: &U256) -> [u8; 32] {
    k.to_be_bytes()
}

/// ser32(i): 4 bytes big-endian
#[inline]
pub fn serialize32(i: u32) -> [u8; 4] {
    i.to_be_bytes()
}

#[inline]
fn to_scalar(k: &U256) -> Scalar {
    <Scalar as Reduce<U256>>::reduce(*k)
}

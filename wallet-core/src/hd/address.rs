// wallet-core/src/hd/address.rs

use super::coin::SolanaCoin;
use super::key::{HdPrivateKey, HdPublicKey};

/// Một node đã derive: cặp extended key private/public + coin + path text
///
/// Sở hữu cả hai key, bất biến sau khi tạo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdAddress {
    private_key: HdPrivateKey,
    public_key: HdPublicKey,
    coin: SolanaCoin,
    path: String,
}

impl HdAddress {
    pub fn new(
        private_key: HdPrivateKey,
        public_key: HdPublicKey,
        coin: SolanaCoin,
        path: String,
    ) -> Self {
        Self {
            private_key,
            public_key,
            coin,
            path,
        }
    }

    #[inline]
    pub fn private_key(&self) -> &HdPrivateKey {
        &self.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &HdPublicKey {
        &self.public_key
    }

    #[inline]
    pub fn coin(&self) -> &SolanaCoin {
        &self.coin
    }

    /// Path text, ví dụ `m/44H/501H/0H/0H`
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.private_key.depth()
    }
}

//! Chain-agnostic asset identifier.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// Opaque 32-byte identifier for an asset traded by the pool.
///
/// All 32-byte sequences are valid, so construction from bytes is
/// infallible.  The textual form is 64 lowercase hex characters, with an
/// optional `0x` prefix accepted on parse.
///
/// # Examples
///
/// ```
/// use oracle_amm::domain::AssetId;
///
/// let id = AssetId::from_bytes([1u8; 32]);
/// let parsed: AssetId = id.to_string().parse().expect("hex round trip");
/// assert_eq!(parsed, id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// First four bytes in hex, for compact log output.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for AssetId {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)
            .map_err(|_| AmmError::InvalidConfiguration("asset id must be hex"))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| AmmError::InvalidConfiguration("asset id must be 32 bytes"))?;
        Ok(Self(bytes))
    }
}

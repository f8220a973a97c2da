//! # Hashing Primitives
//!
//! Double-SHA256 digests and the [`BlockHash`] newtype used for genesis
//! hashes, merkle roots and checkpoints. Hashes are stored in internal
//! (little-endian) byte order and displayed reversed, per RPC convention.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A 32-byte double-SHA256 digest in internal byte order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    /// The all-zero hash (previous-block hash of every genesis block).
    pub const ZERO: BlockHash = BlockHash([0u8; 32]);

    /// Wraps raw digest bytes in internal byte order.
    pub const fn from_inner(bytes: [u8; 32]) -> Self {
        BlockHash(bytes)
    }

    /// The raw digest bytes in internal byte order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex string in display (big-endian) byte order.
    pub fn to_display_hex(&self) -> String {
        let mut rev = self.0;
        rev.reverse();
        hex::encode(rev)
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_hex())
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", self.to_display_hex())
    }
}

/// Double-SHA256 over `data`.
pub fn sha256d(data: &[u8]) -> BlockHash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    BlockHash(second.into())
}

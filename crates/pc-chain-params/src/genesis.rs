//! # Genesis Block Builder & Verifier
//!
//! Constructs the canonical first block of a network from literal inputs
//! (coinbase script text, reward, timestamp, difficulty bits, nonce) and
//! verifies the derived block hash and merkle root against the hardcoded
//! expectations. Verification runs once per profile at construction time;
//! a mismatch is a startup-fatal configuration error, never corrected.

use tracing::error;

use crate::error::ChainParamsError;
use crate::hash::{sha256d, BlockHash};
use crate::network::NetworkId;

/// Script opcode appended after the genesis output key.
const OP_CHECKSIG: u8 = 0xac;

/// Script opcode for data pushes of 76..=255 bytes.
const OP_PUSHDATA1: u8 = 0x4c;

/// The one coinbase transaction embedded in a genesis block.
///
/// The input script carries a human-readable timestamp string; the single
/// output pays the genesis reward to a hardcoded key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinbaseTx {
    /// Input script: two small integer pushes followed by the timestamp text.
    pub script_sig: Vec<u8>,
    /// Reward value in atomic units.
    pub value: u64,
    /// Output script: pushed public key followed by OP_CHECKSIG.
    pub script_pubkey: Vec<u8>,
}

impl CoinbaseTx {
    /// Serializes the transaction in wire format and derives its txid.
    pub fn txid(&self) -> BlockHash {
        sha256d(&self.serialize())
    }

    /// Wire-format serialization (version, one null-outpoint input, one
    /// output, zero lock time).
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(128 + self.script_sig.len() + self.script_pubkey.len());
        out.extend_from_slice(&1i32.to_le_bytes()); // nVersion
        write_compact_size(&mut out, 1); // vin count
        out.extend_from_slice(&[0u8; 32]); // null outpoint hash
        out.extend_from_slice(&u32::MAX.to_le_bytes()); // null outpoint index
        write_compact_size(&mut out, self.script_sig.len() as u64);
        out.extend_from_slice(&self.script_sig);
        out.extend_from_slice(&u32::MAX.to_le_bytes()); // nSequence
        write_compact_size(&mut out, 1); // vout count
        out.extend_from_slice(&self.value.to_le_bytes());
        write_compact_size(&mut out, self.script_pubkey.len() as u64);
        out.extend_from_slice(&self.script_pubkey);
        out.extend_from_slice(&0u32.to_le_bytes()); // nLockTime
        out
    }
}

/// The hardcoded first block of a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBlock {
    /// Block version.
    pub version: i32,
    /// Hash of the previous block; always zero for genesis.
    pub prev_hash: BlockHash,
    /// Merkle root over the single coinbase transaction.
    pub merkle_root: BlockHash,
    /// Block timestamp (Unix seconds).
    pub time: u32,
    /// Compact difficulty target.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
    /// The single coinbase transaction.
    pub coinbase: CoinbaseTx,
}

impl GenesisBlock {
    /// The 80-byte serialized header.
    pub fn header_bytes(&self) -> [u8; 80] {
        let mut out = [0u8; 80];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.prev_hash.as_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// The block hash, derived from the serialized header.
    pub fn block_hash(&self) -> BlockHash {
        sha256d(&self.header_bytes())
    }
}

/// Builds a genesis block from its literal inputs.
///
/// The merkle root is computed over the single coinbase transaction built
/// from `coinbase_text` and the reward output; the previous-block hash is
/// always zero.
pub fn build_genesis(
    coinbase_text: &str,
    reward: u64,
    output_key: &[u8],
    time: u32,
    bits: u32,
    nonce: u32,
) -> GenesisBlock {
    let mut script_sig = Vec::with_capacity(coinbase_text.len() + 8);
    push_int(&mut script_sig, 4_194_596);
    push_int(&mut script_sig, 4);
    push_data(&mut script_sig, coinbase_text.as_bytes());

    let mut script_pubkey = Vec::with_capacity(output_key.len() + 2);
    push_data(&mut script_pubkey, output_key);
    script_pubkey.push(OP_CHECKSIG);

    let coinbase = CoinbaseTx { script_sig, value: reward, script_pubkey };
    let merkle_root = coinbase.txid();

    GenesisBlock {
        version: 1,
        prev_hash: BlockHash::ZERO,
        merkle_root,
        time,
        bits,
        nonce,
        coinbase,
    }
}

/// Verifies a genesis block against its hardcoded hash and merkle root.
///
/// Returns [`ChainParamsError::GenesisMismatch`] if either derived value
/// disagrees with the literal expectation. Callers must treat this as
/// startup-fatal and abort profile construction.
pub fn verify_genesis(
    block: &GenesisBlock,
    network: NetworkId,
    expected_hash: BlockHash,
    expected_merkle_root: BlockHash,
) -> Result<(), ChainParamsError> {
    if block.merkle_root != expected_merkle_root {
        error!(
            "[Genesis] {} merkle root mismatch: computed {}, expected {}",
            network, block.merkle_root, expected_merkle_root
        );
        return Err(ChainParamsError::GenesisMismatch {
            network,
            field: "merkle root",
            expected: expected_merkle_root.to_display_hex(),
            computed: block.merkle_root.to_display_hex(),
        });
    }

    let computed = block.block_hash();
    if computed != expected_hash {
        error!(
            "[Genesis] {} block hash mismatch: computed {}, expected {}",
            network, computed, expected_hash
        );
        return Err(ChainParamsError::GenesisMismatch {
            network,
            field: "block hash",
            expected: expected_hash.to_display_hex(),
            computed: computed.to_display_hex(),
        });
    }

    Ok(())
}

/// Appends a wire-format compact size.
fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Appends a script data push (direct push up to 75 bytes, OP_PUSHDATA1 up
/// to 255). Genesis scripts never need anything larger.
fn push_data(out: &mut Vec<u8>, data: &[u8]) {
    debug_assert!(data.len() <= u8::MAX as usize);
    if data.len() <= 75 {
        out.push(data.len() as u8);
    } else {
        out.push(OP_PUSHDATA1);
        out.push(data.len() as u8);
    }
    out.extend_from_slice(data);
}

/// Appends a script integer push in minimal script-number encoding
/// (little-endian, sign-padded). Only non-negative values occur here.
fn push_int(out: &mut Vec<u8>, n: i64) {
    debug_assert!(n >= 0);
    let mut bytes = Vec::new();
    let mut v = n as u64;
    while v > 0 {
        bytes.push((v & 0xff) as u8);
        v >>= 8;
    }
    if let Some(&top) = bytes.last() {
        if top & 0x80 != 0 {
            bytes.push(0x00);
        }
    }
    push_data(out, &bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_genesis() -> GenesisBlock {
        build_genesis("sample coinbase text", 50 * 100_000_000, &[0x04; 65], 1_700_000_000, 0x1e0fffff, 42)
    }

    #[test]
    fn test_script_sig_encoding() {
        let genesis = sample_genesis();
        // 3-byte push of 4194596 (0x400124 LE), 1-byte push of 4, then text.
        assert_eq!(
            &genesis.coinbase.script_sig[..6],
            &[0x03, 0x24, 0x01, 0x40, 0x01, 0x04]
        );
        assert_eq!(genesis.coinbase.script_sig[6] as usize, "sample coinbase text".len());
    }

    #[test]
    fn test_script_pubkey_encoding() {
        let genesis = sample_genesis();
        assert_eq!(genesis.coinbase.script_pubkey.len(), 67);
        assert_eq!(genesis.coinbase.script_pubkey[0], 65);
        assert_eq!(*genesis.coinbase.script_pubkey.last().unwrap(), OP_CHECKSIG);
    }

    #[test]
    fn test_merkle_root_is_coinbase_txid() {
        let genesis = sample_genesis();
        assert_eq!(genesis.merkle_root, genesis.coinbase.txid());
    }

    #[test]
    fn test_verify_accepts_derived_values() {
        let genesis = sample_genesis();
        let hash = genesis.block_hash();
        let merkle = genesis.merkle_root;
        verify_genesis(&genesis, NetworkId::Main, hash, merkle).unwrap();
    }

    #[test]
    fn test_verify_rejects_tampered_nonce() {
        let genesis = sample_genesis();
        let hash = genesis.block_hash();
        let merkle = genesis.merkle_root;

        let mut tampered = genesis.clone();
        tampered.nonce += 1;
        let err = verify_genesis(&tampered, NetworkId::Main, hash, merkle).unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::GenesisMismatch { field: "block hash", .. }
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_merkle_root() {
        let genesis = sample_genesis();
        let hash = genesis.block_hash();
        let err =
            verify_genesis(&genesis, NetworkId::Testnet, hash, BlockHash::ZERO).unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::GenesisMismatch { field: "merkle root", network: NetworkId::Testnet, .. }
        ));
    }

    #[test]
    fn test_header_is_eighty_bytes_and_deterministic() {
        let a = sample_genesis();
        let b = sample_genesis();
        assert_eq!(a.header_bytes().len(), 80);
        assert_eq!(a.block_hash(), b.block_hash());
    }

    #[test]
    fn test_push_data_boundary() {
        let mut short = Vec::new();
        push_data(&mut short, &[0u8; 75]);
        assert_eq!(short[0], 75);

        let mut long = Vec::new();
        push_data(&mut long, &[0u8; 76]);
        assert_eq!(&long[..2], &[OP_PUSHDATA1, 76]);
    }
}

//! # Parameter Profiles
//!
//! The full constant bundle describing one network, and the layered
//! override mechanism that builds derived profiles. Main is built from
//! literals; Testnet derives from Main, Regtest from Testnet, and UnitTest
//! from Main. Derivation is explicit composition: a base record plus a
//! sparse override record merged field by field at construction time — no
//! profile depends on another profile's behavior, only on its default
//! field values.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use primitive_types::U256;

use crate::checkpoints::CheckpointTable;
use crate::error::ChainParamsError;
use crate::genesis::{build_genesis, verify_genesis, GenesisBlock};
use crate::hash::BlockHash;
use crate::network::NetworkId;
use crate::seeds::{materialize_seeds, DnsSeed, SeedAddress, MAIN_SEEDS, TESTNET_SEEDS};

/// Atomic units per coin.
pub const COIN: u64 = 100_000_000;

/// Human-readable timestamp embedded in the genesis coinbase input script.
pub const GENESIS_COINBASE_TEXT: &str =
    "The Times - How to be a sex worker: Brighton University advice for freshers";

/// Genesis reward in atomic units.
pub const GENESIS_REWARD: u64 = 10 * COIN;

/// Uncompressed public key paid by the genesis output (also the testnet
/// alert key).
#[rustfmt::skip]
pub const GENESIS_OUTPUT_KEY: [u8; 65] = [
    0x04, 0x79, 0x2b, 0x54, 0x75, 0xe8, 0x19, 0x9e,
    0x07, 0x98, 0xd7, 0x0f, 0x18, 0xbc, 0xff, 0x94,
    0x5c, 0x42, 0xe0, 0xab, 0xff, 0x13, 0x54, 0x67,
    0xfe, 0x61, 0xdc, 0x74, 0x91, 0x57, 0x9a, 0x2c,
    0x7e, 0x1f, 0xc8, 0x75, 0x4d, 0xef, 0x07, 0xbc,
    0x43, 0xfe, 0x15, 0x13, 0x8e, 0xc0, 0x1c, 0x81,
    0x24, 0xf1, 0x0b, 0x48, 0x29, 0x39, 0x7c, 0xa3,
    0xa3, 0xc9, 0xcf, 0xba, 0x06, 0xab, 0x39, 0x4f,
    0x7d,
];

/// Alert-verification key for the main network.
#[rustfmt::skip]
const ALERT_KEY_MAIN: [u8; 65] = [
    0x04, 0xa3, 0x6a, 0x42, 0x6b, 0x81, 0x2a, 0x83,
    0x77, 0x6c, 0x6e, 0xde, 0xad, 0x33, 0x6d, 0x19,
    0xaf, 0x5d, 0x2c, 0xa3, 0xa5, 0x48, 0x69, 0x7a,
    0xcb, 0x3c, 0x6f, 0x20, 0x1b, 0xa5, 0x1b, 0x44,
    0x75, 0x86, 0x19, 0xb2, 0x81, 0xf1, 0x09, 0x6b,
    0x65, 0xe6, 0x43, 0xb4, 0xd9, 0x96, 0xb9, 0x0a,
    0xfe, 0x4a, 0x9e, 0x08, 0xdd, 0x6e, 0x54, 0x60,
    0x0d, 0x5c, 0x81, 0x89, 0x7a, 0x1e, 0xc3, 0xa4,
    0x53,
];

/// Spork-message verification key (hex, shared by main and testnet).
const SPORK_KEY: &str = "04050adbaaab7ab704cf78367374d0661cb0e82050838075c13e6e53deb324d5466243a1cd9c54bd2abc43605aeaa48032fa6520bb7c8d6a20b9f88394134dc847";

/// Merkle root over the genesis coinbase transaction, identical on every
/// network (display order 23b5bae265343a0fe0ce6fe1c1358fb89c9fcb0a885f3eda3e8a2c79e7f486b1).
#[rustfmt::skip]
pub const GENESIS_MERKLE_ROOT: BlockHash = BlockHash::from_inner([
    0xb1, 0x86, 0xf4, 0xe7, 0x79, 0x2c, 0x8a, 0x3e,
    0xda, 0x3e, 0x5f, 0x88, 0x0a, 0xcb, 0x9f, 0x9c,
    0xb8, 0x8f, 0x35, 0xc1, 0xe1, 0x6f, 0xce, 0xe0,
    0x0f, 0x3a, 0x34, 0x65, 0xe2, 0xba, 0xb5, 0x23,
]);

/// Main genesis hash
/// (8192396f80f6af9a8e3035eb21ff3ee6106f4d844e38f6296a3d25478b2d72c8).
#[rustfmt::skip]
pub const MAIN_GENESIS_HASH: BlockHash = BlockHash::from_inner([
    0xc8, 0x72, 0x2d, 0x8b, 0x47, 0x25, 0x3d, 0x6a,
    0x29, 0xf6, 0x38, 0x4e, 0x84, 0x4d, 0x6f, 0x10,
    0xe6, 0x3e, 0xff, 0x21, 0xeb, 0x35, 0x30, 0x8e,
    0x9a, 0xaf, 0xf6, 0x80, 0x6f, 0x39, 0x92, 0x81,
]);

/// Testnet genesis hash
/// (39c5116db7d77240ac3f14bc0c5929d19d1d879e48dac09c3ebadb66c14f82b6).
#[rustfmt::skip]
pub const TESTNET_GENESIS_HASH: BlockHash = BlockHash::from_inner([
    0xb6, 0x82, 0x4f, 0xc1, 0x66, 0xdb, 0xba, 0x3e,
    0x9c, 0xc0, 0xda, 0x48, 0x9e, 0x87, 0x1d, 0x9d,
    0xd1, 0x29, 0x59, 0x0c, 0xbc, 0x14, 0x3f, 0xac,
    0x40, 0x72, 0xd7, 0xb7, 0x6d, 0x11, 0xc5, 0x39,
]);

/// Regtest genesis hash
/// (3b70d0d7bf96c140a8d91606741615cc6f9d73b9d8c84d5c72a0cf8759d93ef9).
#[rustfmt::skip]
pub const REGTEST_GENESIS_HASH: BlockHash = BlockHash::from_inner([
    0xf9, 0x3e, 0xd9, 0x59, 0x87, 0xcf, 0xa0, 0x72,
    0x5c, 0x4d, 0xc8, 0xd8, 0xb9, 0x73, 0x9d, 0x6f,
    0xcc, 0x15, 0x16, 0x74, 0x06, 0x16, 0xd9, 0xa8,
    0x40, 0xc1, 0x96, 0xbf, 0xd7, 0xd0, 0x70, 0x3b,
]);

/// Main checkpoint at height 150.
#[rustfmt::skip]
const MAIN_CHECKPOINT_150: BlockHash = BlockHash::from_inner([
    0xdf, 0x15, 0xce, 0xe5, 0x59, 0x31, 0xad, 0xb2,
    0x5b, 0x6d, 0xd3, 0x7e, 0xae, 0xfa, 0xda, 0x33,
    0x3e, 0x3b, 0x89, 0x46, 0xa1, 0xd9, 0x4d, 0x3f,
    0x07, 0xce, 0x95, 0xb2, 0x29, 0x09, 0x00, 0x00,
]);

/// Main checkpoint at height 200.
#[rustfmt::skip]
const MAIN_CHECKPOINT_200: BlockHash = BlockHash::from_inner([
    0x0b, 0x9b, 0x70, 0xab, 0xe2, 0x73, 0x08, 0x51,
    0xb0, 0x81, 0x35, 0x37, 0x3d, 0xef, 0xdb, 0x9a,
    0x29, 0xcf, 0x71, 0x01, 0x71, 0x03, 0x33, 0xb6,
    0x20, 0xee, 0x6a, 0x18, 0x87, 0x00, 0x00, 0x00,
]);

/// Address-prefix slots governing text encoding of keys and addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Pay-to-pubkey-hash address prefix.
    PubKeyAddress,
    /// Pay-to-script-hash address prefix.
    ScriptAddress,
    /// WIF secret-key prefix.
    SecretKey,
    /// BIP32 extended public key prefix.
    ExtPublicKey,
    /// BIP32 extended secret key prefix.
    ExtSecretKey,
    /// BIP44 coin-type prefix.
    ExtCoinType,
}

/// Per-network base58 prefix bytes for every [`AddressKind`] slot.
///
/// Prefixes must be pairwise distinct across networks that may coexist, so
/// an address can never parse as belonging to two networks at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPrefixes {
    /// Pay-to-pubkey-hash prefix.
    pub pubkey_address: Vec<u8>,
    /// Pay-to-script-hash prefix.
    pub script_address: Vec<u8>,
    /// WIF secret-key prefix.
    pub secret_key: Vec<u8>,
    /// Extended public key prefix.
    pub ext_public_key: Vec<u8>,
    /// Extended secret key prefix.
    pub ext_secret_key: Vec<u8>,
    /// BIP44 coin-type prefix.
    pub ext_coin_type: Vec<u8>,
}

impl AddressPrefixes {
    /// The prefix bytes for one slot.
    pub fn prefix(&self, kind: AddressKind) -> &[u8] {
        match kind {
            AddressKind::PubKeyAddress => &self.pubkey_address,
            AddressKind::ScriptAddress => &self.script_address,
            AddressKind::SecretKey => &self.secret_key,
            AddressKind::ExtPublicKey => &self.ext_public_key,
            AddressKind::ExtSecretKey => &self.ext_secret_key,
            AddressKind::ExtCoinType => &self.ext_coin_type,
        }
    }
}

/// The complete constant bundle describing one network.
///
/// Immutable after construction; the unit-test profile alone exposes a
/// restricted setter capability through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParameters {
    /// Network identifier.
    pub network: NetworkId,
    /// Canonical network name.
    pub network_name: &'static str,
    /// Protocol-level network discriminator prefixing every wire message.
    pub message_magic: [u8; 4],
    /// Key used by the external alert-verification collaborator.
    pub alert_public_key: Vec<u8>,
    /// Default P2P port.
    pub default_port: u16,
    /// Maximum (easiest) valid proof-of-work target.
    pub proof_of_work_limit: U256,
    /// Blocks between subsidy halvings.
    pub subsidy_halving_interval: u32,
    /// Deepest reorganization the node will follow.
    pub max_reorg_depth: u32,
    /// Block-version votes (out of the check window) to enforce an upgrade.
    pub enforce_upgrade_majority: u32,
    /// Block-version votes to start rejecting outdated blocks.
    pub reject_outdated_majority: u32,
    /// Window length for block-version upgrade voting.
    pub to_check_upgrade_majority: u32,
    /// Default number of internal miner threads.
    pub miner_threads: u32,
    /// Difficulty retarget window in seconds.
    pub target_timespan: u64,
    /// Target block interval in seconds.
    pub target_spacing: u64,
    /// Height of the last proof-of-work block; -1 means "never".
    pub last_pow_block: i64,
    /// Coinbase maturity in blocks.
    pub maturity: u32,
    /// Tolerated masternode-count drift.
    pub masternode_count_drift: i32,
    /// Masternode collateral in whole coins.
    pub masternode_collateral_limit: u64,
    /// Height of the stake-modifier format update.
    pub modifier_update_block: u32,
    /// Money supply cap in atomic units.
    pub max_money_out: i64,
    /// The hardcoded genesis block.
    pub genesis: GenesisBlock,
    /// Cached genesis block hash, verified at construction.
    pub genesis_hash: BlockHash,
    /// Materialized fixed bootstrap seeds.
    pub fixed_seeds: Vec<SeedAddress>,
    /// DNS bootstrap seeds.
    pub dns_seeds: Vec<DnsSeed>,
    /// Base58 prefix bytes per address kind.
    pub prefixes: AddressPrefixes,
    /// Whether RPC requires a configured password.
    pub require_rpc_password: bool,
    /// Whether mining refuses to start without peers.
    pub mining_requires_peers: bool,
    /// Whether minimum-difficulty blocks are accepted.
    pub allow_min_difficulty_blocks: bool,
    /// Whether expensive consistency checks default to on.
    pub default_consistency_checks: bool,
    /// Whether transactions must be standard to relay.
    pub require_standard_tx: bool,
    /// Whether blocks are mined on RPC demand.
    pub mine_blocks_on_demand: bool,
    /// Whether proof-of-work validation is skipped entirely.
    pub skip_proof_of_work_check: bool,
    /// Value of the deprecated `testnet` RPC field.
    pub testnet_deprecated_field_rpc: bool,
    /// Whether headers-first syncing is active.
    pub headers_first_syncing: bool,
    /// Maximum transactions mixed per obfuscation pool session.
    pub pool_max_transactions: u32,
    /// Spork-message verification key (hex).
    pub spork_public_key: String,
    /// Collateral address used by the obfuscation pool.
    pub obfuscation_pool_dummy_address: String,
    /// Unix timestamp at which masternode payments begin.
    pub start_masternode_payments: u64,
    /// Checkpoint table for this network.
    pub checkpoints: Arc<CheckpointTable>,
}

/// Sparse override record: only the fields that differ from the base
/// profile. Every `None` field is copied unchanged from the base.
#[derive(Debug, Clone, Default)]
pub struct ParamsOverrides {
    pub network: Option<NetworkId>,
    pub network_name: Option<&'static str>,
    pub message_magic: Option<[u8; 4]>,
    pub alert_public_key: Option<Vec<u8>>,
    pub default_port: Option<u16>,
    pub proof_of_work_limit: Option<U256>,
    pub subsidy_halving_interval: Option<u32>,
    pub max_reorg_depth: Option<u32>,
    pub enforce_upgrade_majority: Option<u32>,
    pub reject_outdated_majority: Option<u32>,
    pub to_check_upgrade_majority: Option<u32>,
    pub miner_threads: Option<u32>,
    pub target_timespan: Option<u64>,
    pub target_spacing: Option<u64>,
    pub last_pow_block: Option<i64>,
    pub maturity: Option<u32>,
    pub masternode_count_drift: Option<i32>,
    pub masternode_collateral_limit: Option<u64>,
    pub modifier_update_block: Option<u32>,
    pub max_money_out: Option<i64>,
    /// Genesis timestamp override; triggers re-verification.
    pub genesis_time: Option<u32>,
    /// Genesis difficulty-bits override; triggers re-verification.
    pub genesis_bits: Option<u32>,
    /// Genesis nonce override; triggers re-verification.
    pub genesis_nonce: Option<u32>,
    /// The derived network's own expected genesis hash. Required whenever
    /// any genesis field is overridden.
    pub expected_genesis_hash: Option<BlockHash>,
    /// `Some(vec![])` clears the inherited list.
    pub fixed_seeds: Option<Vec<SeedAddress>>,
    /// `Some(vec![])` clears the inherited list.
    pub dns_seeds: Option<Vec<DnsSeed>>,
    pub prefixes: Option<AddressPrefixes>,
    pub require_rpc_password: Option<bool>,
    pub mining_requires_peers: Option<bool>,
    pub allow_min_difficulty_blocks: Option<bool>,
    pub default_consistency_checks: Option<bool>,
    pub require_standard_tx: Option<bool>,
    pub mine_blocks_on_demand: Option<bool>,
    pub skip_proof_of_work_check: Option<bool>,
    pub testnet_deprecated_field_rpc: Option<bool>,
    pub headers_first_syncing: Option<bool>,
    pub pool_max_transactions: Option<u32>,
    pub spork_public_key: Option<String>,
    pub obfuscation_pool_dummy_address: Option<String>,
    pub start_masternode_payments: Option<u64>,
    pub checkpoints: Option<Arc<CheckpointTable>>,
}

impl ChainParameters {
    /// Builds the main-network profile from literal inputs.
    pub fn main() -> Result<Self, ChainParamsError> {
        let genesis = build_genesis(
            GENESIS_COINBASE_TEXT,
            GENESIS_REWARD,
            &GENESIS_OUTPUT_KEY,
            1538265600,
            0x1e0fffff,
            961023,
        );
        verify_genesis(&genesis, NetworkId::Main, MAIN_GENESIS_HASH, GENESIS_MERKLE_ROOT)?;

        Ok(Self {
            network: NetworkId::Main,
            network_name: NetworkId::Main.name(),
            message_magic: [0xf4, 0xcb, 0xbd, 0xe2],
            alert_public_key: ALERT_KEY_MAIN.to_vec(),
            default_port: 37006,
            proof_of_work_limit: U256::MAX >> 20u32,
            subsidy_halving_interval: 864_000,
            max_reorg_depth: 100,
            enforce_upgrade_majority: 750,
            reject_outdated_majority: 950,
            to_check_upgrade_majority: 1000,
            miner_threads: 0,
            target_timespan: 60,
            target_spacing: 60,
            last_pow_block: 300,
            maturity: 90,
            masternode_count_drift: 10,
            masternode_collateral_limit: 1000,
            modifier_update_block: 1,
            max_money_out: 20_000_000 * COIN as i64,
            genesis,
            genesis_hash: MAIN_GENESIS_HASH,
            fixed_seeds: materialize_seeds(MAIN_SEEDS, unix_now()),
            dns_seeds: vec![
                DnsSeed::new("54.37.205.229", "54.37.205.229"),
                DnsSeed::new("144.217.161.46", "144.217.161.46"),
            ],
            prefixes: AddressPrefixes {
                pubkey_address: vec![45],
                script_address: vec![31],
                secret_key: vec![60],
                ext_public_key: vec![0x04, 0x88, 0xb2, 0x1e],
                ext_secret_key: vec![0x04, 0x88, 0xad, 0xe4],
                ext_coin_type: vec![0x80, 0x00, 0x00, 0x77],
            },
            require_rpc_password: true,
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard_tx: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_deprecated_field_rpc: false,
            headers_first_syncing: false,
            pool_max_transactions: 3,
            spork_public_key: SPORK_KEY.to_string(),
            obfuscation_pool_dummy_address: "KDjbvBPN5US5tZeFVeGWicahobjTZG9yLy".to_string(),
            start_masternode_payments: 1539648000,
            checkpoints: Arc::new(main_checkpoints()),
        })
    }

    /// Derives a profile from `base`, replacing exactly the fields present
    /// in `overrides`. If any genesis field is overridden, the genesis
    /// block is rebuilt and re-verified against the override's own
    /// expected hash.
    pub fn derive(base: &Self, overrides: ParamsOverrides) -> Result<Self, ChainParamsError> {
        let o = overrides;
        let mut p = base.clone();

        if let Some(v) = o.network {
            p.network = v;
        }
        if let Some(v) = o.network_name {
            p.network_name = v;
        }
        if let Some(v) = o.message_magic {
            p.message_magic = v;
        }
        if let Some(v) = o.alert_public_key {
            p.alert_public_key = v;
        }
        if let Some(v) = o.default_port {
            p.default_port = v;
        }
        if let Some(v) = o.proof_of_work_limit {
            p.proof_of_work_limit = v;
        }
        if let Some(v) = o.subsidy_halving_interval {
            p.subsidy_halving_interval = v;
        }
        if let Some(v) = o.max_reorg_depth {
            p.max_reorg_depth = v;
        }
        if let Some(v) = o.enforce_upgrade_majority {
            p.enforce_upgrade_majority = v;
        }
        if let Some(v) = o.reject_outdated_majority {
            p.reject_outdated_majority = v;
        }
        if let Some(v) = o.to_check_upgrade_majority {
            p.to_check_upgrade_majority = v;
        }
        if let Some(v) = o.miner_threads {
            p.miner_threads = v;
        }
        if let Some(v) = o.target_timespan {
            p.target_timespan = v;
        }
        if let Some(v) = o.target_spacing {
            p.target_spacing = v;
        }
        if let Some(v) = o.last_pow_block {
            p.last_pow_block = v;
        }
        if let Some(v) = o.maturity {
            p.maturity = v;
        }
        if let Some(v) = o.masternode_count_drift {
            p.masternode_count_drift = v;
        }
        if let Some(v) = o.masternode_collateral_limit {
            p.masternode_collateral_limit = v;
        }
        if let Some(v) = o.modifier_update_block {
            p.modifier_update_block = v;
        }
        if let Some(v) = o.max_money_out {
            p.max_money_out = v;
        }
        if let Some(v) = o.fixed_seeds {
            p.fixed_seeds = v;
        }
        if let Some(v) = o.dns_seeds {
            p.dns_seeds = v;
        }
        if let Some(v) = o.prefixes {
            p.prefixes = v;
        }
        if let Some(v) = o.require_rpc_password {
            p.require_rpc_password = v;
        }
        if let Some(v) = o.mining_requires_peers {
            p.mining_requires_peers = v;
        }
        if let Some(v) = o.allow_min_difficulty_blocks {
            p.allow_min_difficulty_blocks = v;
        }
        if let Some(v) = o.default_consistency_checks {
            p.default_consistency_checks = v;
        }
        if let Some(v) = o.require_standard_tx {
            p.require_standard_tx = v;
        }
        if let Some(v) = o.mine_blocks_on_demand {
            p.mine_blocks_on_demand = v;
        }
        if let Some(v) = o.skip_proof_of_work_check {
            p.skip_proof_of_work_check = v;
        }
        if let Some(v) = o.testnet_deprecated_field_rpc {
            p.testnet_deprecated_field_rpc = v;
        }
        if let Some(v) = o.headers_first_syncing {
            p.headers_first_syncing = v;
        }
        if let Some(v) = o.pool_max_transactions {
            p.pool_max_transactions = v;
        }
        if let Some(v) = o.spork_public_key {
            p.spork_public_key = v;
        }
        if let Some(v) = o.obfuscation_pool_dummy_address {
            p.obfuscation_pool_dummy_address = v;
        }
        if let Some(v) = o.start_masternode_payments {
            p.start_masternode_payments = v;
        }
        if let Some(v) = o.checkpoints {
            p.checkpoints = v;
        }

        let genesis_changed =
            o.genesis_time.is_some() || o.genesis_bits.is_some() || o.genesis_nonce.is_some();
        if let Some(v) = o.genesis_time {
            p.genesis.time = v;
        }
        if let Some(v) = o.genesis_bits {
            p.genesis.bits = v;
        }
        if let Some(v) = o.genesis_nonce {
            p.genesis.nonce = v;
        }
        if genesis_changed || o.expected_genesis_hash.is_some() {
            let expected = o.expected_genesis_hash.unwrap_or(p.genesis_hash);
            verify_genesis(&p.genesis, p.network, expected, GENESIS_MERKLE_ROOT)?;
            p.genesis_hash = expected;
        }

        Ok(p)
    }

    /// Override set deriving Testnet from Main.
    pub fn testnet_overrides() -> ParamsOverrides {
        ParamsOverrides {
            network: Some(NetworkId::Testnet),
            network_name: Some(NetworkId::Testnet.name()),
            message_magic: Some([0xb1, 0xe2, 0xf4, 0xc3]),
            alert_public_key: Some(GENESIS_OUTPUT_KEY.to_vec()),
            default_port: Some(37005),
            enforce_upgrade_majority: Some(51),
            reject_outdated_majority: Some(75),
            to_check_upgrade_majority: Some(100),
            miner_threads: Some(0),
            target_timespan: Some(60),
            target_spacing: Some(60),
            last_pow_block: Some(150),
            maturity: Some(15),
            masternode_count_drift: Some(4),
            masternode_collateral_limit: Some(1000),
            modifier_update_block: Some(1),
            max_money_out: Some(200_000_000 * COIN as i64),
            genesis_time: Some(1538275048),
            genesis_nonce: Some(918077),
            expected_genesis_hash: Some(TESTNET_GENESIS_HASH),
            fixed_seeds: Some(materialize_seeds(TESTNET_SEEDS, unix_now())),
            dns_seeds: Some(Vec::new()),
            prefixes: Some(AddressPrefixes {
                pubkey_address: vec![108],
                script_address: vec![90],
                secret_key: vec![239],
                ext_public_key: vec![0x04, 0x35, 0x87, 0xcf],
                ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
                ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],
            }),
            require_rpc_password: Some(true),
            mining_requires_peers: Some(false),
            allow_min_difficulty_blocks: Some(true),
            default_consistency_checks: Some(false),
            require_standard_tx: Some(false),
            mine_blocks_on_demand: Some(false),
            skip_proof_of_work_check: Some(true),
            testnet_deprecated_field_rpc: Some(true),
            pool_max_transactions: Some(2),
            spork_public_key: Some(SPORK_KEY.to_string()),
            obfuscation_pool_dummy_address: Some(
                "k7t1mjRDgu5DDRKrTMf5iFBr2wZzu8os9w".to_string(),
            ),
            start_masternode_payments: Some(1539648000),
            checkpoints: Some(Arc::new(testnet_checkpoints())),
            ..Default::default()
        }
    }

    /// Override set deriving Regtest from Testnet. Regtest is fully
    /// isolated: near-trivial difficulty and no bootstrap peers at all.
    pub fn regtest_overrides() -> ParamsOverrides {
        ParamsOverrides {
            network: Some(NetworkId::Regtest),
            network_name: Some(NetworkId::Regtest.name()),
            message_magic: Some([0xa3, 0xf1, 0xd4, 0xf3]),
            subsidy_halving_interval: Some(150),
            enforce_upgrade_majority: Some(750),
            reject_outdated_majority: Some(950),
            to_check_upgrade_majority: Some(1000),
            miner_threads: Some(1),
            target_timespan: Some(24 * 60 * 60),
            target_spacing: Some(60),
            proof_of_work_limit: Some(U256::MAX >> 1u32),
            default_port: Some(38006),
            genesis_time: Some(1538265600),
            genesis_bits: Some(0x207fffff),
            genesis_nonce: Some(2),
            expected_genesis_hash: Some(REGTEST_GENESIS_HASH),
            fixed_seeds: Some(Vec::new()),
            dns_seeds: Some(Vec::new()),
            // Regtest gets its own prefixes so no address can parse as
            // belonging to two networks, even in local setups that run a
            // regtest node next to a testnet one.
            prefixes: Some(AddressPrefixes {
                pubkey_address: vec![120],
                script_address: vec![110],
                secret_key: vec![242],
                ext_public_key: vec![0x04, 0x35, 0x87, 0xd0],
                ext_secret_key: vec![0x04, 0x35, 0x83, 0x95],
                ext_coin_type: vec![0x80, 0x00, 0x00, 0x02],
            }),
            require_rpc_password: Some(false),
            mining_requires_peers: Some(false),
            allow_min_difficulty_blocks: Some(true),
            default_consistency_checks: Some(true),
            require_standard_tx: Some(false),
            mine_blocks_on_demand: Some(true),
            testnet_deprecated_field_rpc: Some(false),
            checkpoints: Some(Arc::new(regtest_checkpoints())),
            ..Default::default()
        }
    }

    /// Override set deriving UnitTest from Main: hermetic, no bootstrap
    /// peers, and checkpoints shared with Main.
    pub fn unit_test_overrides() -> ParamsOverrides {
        ParamsOverrides {
            network: Some(NetworkId::UnitTest),
            network_name: Some(NetworkId::UnitTest.name()),
            default_port: Some(38005),
            fixed_seeds: Some(Vec::new()),
            dns_seeds: Some(Vec::new()),
            require_rpc_password: Some(false),
            mining_requires_peers: Some(false),
            default_consistency_checks: Some(true),
            allow_min_difficulty_blocks: Some(false),
            mine_blocks_on_demand: Some(true),
            ..Default::default()
        }
    }

    /// Number of blocks in one difficulty retarget window.
    pub fn retarget_interval(&self) -> u64 {
        self.target_timespan / self.target_spacing
    }

    /// Whether proof-of-work has ceded to the alternate consensus at
    /// `height`. A `last_pow_block` of -1 means "never".
    pub fn is_past_pow(&self, height: i64) -> bool {
        self.last_pow_block >= 0 && height > self.last_pow_block
    }
}

/// Main-network checkpoints.
fn main_checkpoints() -> CheckpointTable {
    CheckpointTable::new(
        [
            (0, MAIN_GENESIS_HASH),
            (150, MAIN_CHECKPOINT_150),
            (200, MAIN_CHECKPOINT_200),
        ],
        1539647004, // timestamp of the last checkpoint block
        202,        // transactions between genesis and last checkpoint
        2000,       // estimated transactions per day after checkpoint
    )
}

/// Testnet checkpoints.
fn testnet_checkpoints() -> CheckpointTable {
    CheckpointTable::new([(0, TESTNET_GENESIS_HASH)], 1538275048, 0, 250)
}

/// Regtest checkpoints.
fn regtest_checkpoints() -> CheckpointTable {
    CheckpointTable::new([(0, REGTEST_GENESIS_HASH)], 1538265600, 0, 100)
}

/// Current Unix time in seconds.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

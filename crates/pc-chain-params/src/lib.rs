//! # Network-Parameter Registry
//!
//! Per-network bundles of consensus and protocol constants for the
//! Payment-Chain node: genesis block, proof-of-work limits, difficulty
//! retarget schedule, address-encoding prefixes, seed peers, checkpoints
//! and behavioral flags. Every other subsystem (consensus validation, peer
//! networking, wallet, RPC) reads these profiles as ground truth.
//!
//! ## Architecture
//!
//! - **Genesis builder & verifier** ([`genesis`]): constructs the
//!   canonical first block from literal inputs and verifies its derived
//!   hash and merkle root against hardcoded expectations.
//! - **Seed materializer** ([`seeds`]): expands compact fixed-seed tables
//!   into address records with randomized last-seen timestamps.
//! - **Checkpoint table** ([`checkpoints`]): height → expected block hash,
//!   plus sync-progress estimation metadata.
//! - **Parameter profiles** ([`params`]): the Main profile built from
//!   literals, with Testnet, Regtest and UnitTest derived through sparse
//!   override records merged field by field.
//! - **Registry & selector** ([`registry`]): process-wide state exposing
//!   the currently active profile, plus a restricted mutation capability
//!   for the UnitTest profile only.
//!
//! ## Usage
//!
//! ```rust
//! use pc_chain_params::{NetworkId, Registry};
//!
//! let mut registry = Registry::new().unwrap();
//! registry.select(NetworkId::Main);
//!
//! let params = registry.current().unwrap();
//! assert_eq!(params.default_port, 37006);
//! assert_eq!(params.checkpoints.lookup(0), Some(params.genesis_hash));
//! ```
//!
//! Profile construction is single-threaded by contract and happens once at
//! process start; after that, profiles are immutable (UnitTest's mutable
//! fields aside) and safe for unsynchronized concurrent reads.

pub mod checkpoints;
pub mod error;
pub mod genesis;
pub mod hash;
pub mod network;
pub mod params;
pub mod registry;
pub mod seeds;

pub use checkpoints::CheckpointTable;
pub use error::ChainParamsError;
pub use genesis::{build_genesis, verify_genesis, CoinbaseTx, GenesisBlock};
pub use hash::BlockHash;
pub use network::NetworkId;
pub use params::{AddressKind, AddressPrefixes, ChainParameters, ParamsOverrides, COIN};
pub use registry::{MutableParams, Registry};
pub use seeds::{materialize_seeds, DnsSeed, SeedAddress, SeedSpec, ONE_WEEK_SECS};

//! # Fixed-Seed Materializer
//!
//! Expands the compact fixed-seed tables into live address records with
//! randomized last-seen timestamps. Seeds are stamped between one and two
//! weeks in the past so that once live peer exchange begins, these
//! bootstrap entries are quickly superseded by fresher addresses instead of
//! being redialed repeatedly. The jitter only affects peer-selection
//! heuristics, so a fast non-adversarial generator is sufficient.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One week in seconds.
pub const ONE_WEEK_SECS: u64 = 7 * 24 * 60 * 60;

/// A compact fixed-seed entry: 16-byte IPv6(-mapped) address plus port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec {
    /// Raw IPv6 address bytes (IPv4 entries are v4-mapped).
    pub addr: [u8; 16],
    /// TCP port.
    pub port: u16,
}

/// A materialized seed address, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    /// Socket address of the bootstrap peer.
    pub addr: SocketAddr,
    /// Randomized last-seen timestamp (Unix seconds).
    pub last_seen: u64,
}

/// A DNS seed entry: a label for logging plus the host to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Human-readable label.
    pub name: String,
    /// Hostname (or address) handed to the resolver.
    pub host: String,
}

impl DnsSeed {
    /// Builds a DNS seed entry.
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self { name: name.into(), host: host.into() }
    }
}

/// Expands a compact seed table into address records.
///
/// Each record gets a `last_seen` drawn uniformly from
/// `[now - 2 * ONE_WEEK_SECS, now - ONE_WEEK_SECS)`, i.e. between one and
/// two weeks in the past.
pub fn materialize_seeds(table: &[SeedSpec], now: u64) -> Vec<SeedAddress> {
    let mut rng = rand::thread_rng();
    let floor = now.saturating_sub(2 * ONE_WEEK_SECS);
    let seeds: Vec<SeedAddress> = table
        .iter()
        .map(|spec| {
            let jitter: u64 = rng.gen_range(0..ONE_WEEK_SECS);
            SeedAddress {
                addr: SocketAddr::new(IpAddr::V6(Ipv6Addr::from(spec.addr)), spec.port),
                last_seen: floor + jitter,
            }
        })
        .collect();
    debug!("[Seeds] Materialized {} fixed seed(s)", seeds.len());
    seeds
}

// Compact fixed-seed tables, one entry per known bootstrap node. IPv4
// entries are stored v4-mapped, matching the wire representation.

/// Fixed seeds for the main network.
pub const MAIN_SEEDS: &[SeedSpec] = &[
    SeedSpec {
        addr: [
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x36, 0x25,
            0xcd, 0xe5,
        ], // 54.37.205.229
        port: 37006,
    },
    SeedSpec {
        addr: [
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x90, 0xd9,
            0xa1, 0x2e,
        ], // 144.217.161.46
        port: 37006,
    },
];

/// Fixed seeds for the test network. No public bootstrap nodes exist yet.
pub const TESTNET_SEEDS: &[SeedSpec] = &[];

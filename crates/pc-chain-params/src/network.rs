//! # Network Identifiers
//!
//! The closed set of networks this node can operate on. Exactly one profile
//! exists per identifier at runtime; the identifier round-trips the network
//! name used on the command line and in datadir layouts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainParamsError;

/// Identifies one of the four networks with a defined parameter profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NetworkId {
    /// The production network.
    Main,
    /// The public test network.
    Testnet,
    /// Local regression-test network (fully isolated, no bootstrap peers).
    Regtest,
    /// Hermetic unit-test network; the only profile with mutable fields.
    UnitTest,
}

impl NetworkId {
    /// All networks, in derivation order.
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Testnet,
        NetworkId::Regtest,
        NetworkId::UnitTest,
    ];

    /// The canonical network name.
    pub fn name(self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Testnet => "test",
            NetworkId::Regtest => "regtest",
            NetworkId::UnitTest => "unittest",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(NetworkId::Main),
            "test" => Ok(NetworkId::Testnet),
            "regtest" => Ok(NetworkId::Regtest),
            "unittest" => Ok(NetworkId::UnitTest),
            other => Err(ChainParamsError::UnknownNetwork(other.to_string())),
        }
    }
}

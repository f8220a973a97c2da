//! # Error Types
//!
//! Errors raised by the network-parameter registry. All of them are
//! configuration-time invariant violations: none is recoverable by retry,
//! and each should terminate startup or the offending call path.

use thiserror::Error;

use crate::network::NetworkId;

/// Errors that can occur while building or selecting chain parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainParamsError {
    /// Derived genesis hash or merkle root disagrees with the hardcoded
    /// literal. Fatal at startup: the node must refuse to run with
    /// divergent genesis data.
    #[error("genesis {field} mismatch on {network}: computed {computed}, expected {expected}")]
    GenesisMismatch {
        network: NetworkId,
        field: &'static str,
        expected: String,
        computed: String,
    },

    /// Selection or lookup requested for an identifier with no defined
    /// profile (e.g. an unrecognized network name from the command line).
    #[error("unknown network: {0:?}")]
    UnknownNetwork(String),

    /// Parameters read before any network was selected.
    #[error("no network selected: select() must happen before current()")]
    NoNetworkSelected,

    /// Test-only setter requested while a non-unit-test network is active.
    #[error("wrong network for mutation: {0} parameters are immutable")]
    WrongNetworkForMutation(NetworkId),
}

//! # Profile Registry & Selector
//!
//! Holds the four fully-built parameter profiles and tracks which one is
//! the active selection. [`Registry`] is an explicit object threaded
//! through initialization; the module-level functions wrap one process-wide
//! instance for the many call sites that treat the active network as
//! ambient state.
//!
//! ## Lifecycle
//!
//! All profiles are built once, up front, in [`Registry::new`]. After
//! that, profiles are immutable and safe for unsynchronized concurrent
//! reads; `select` must happen-before any `current` that depends on it.
//! Calling `current` before any `select` is a programming error
//! ([`ChainParamsError::NoNetworkSelected`]), not a condition to retry.

use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::ChainParamsError;
use crate::network::NetworkId;
use crate::params::ChainParameters;

/// One fully-built profile per network.
#[derive(Debug)]
struct Profiles {
    main: Arc<ChainParameters>,
    testnet: Arc<ChainParameters>,
    regtest: Arc<ChainParameters>,
    unit_test: Arc<ChainParameters>,
}

/// Process-wide state holding the active profile.
///
/// States: `Unselected` (fresh) and `Selected(id)`. `select` is
/// idempotent; re-selecting simply reassigns the active profile.
#[derive(Debug)]
pub struct Registry {
    profiles: Profiles,
    current: Option<NetworkId>,
}

impl Registry {
    /// Builds all four profiles eagerly. A genesis mismatch in any profile
    /// aborts construction; the process must refuse to start.
    pub fn new() -> Result<Self, ChainParamsError> {
        let main = ChainParameters::main()?;
        let testnet = ChainParameters::derive(&main, ChainParameters::testnet_overrides())?;
        let regtest = ChainParameters::derive(&testnet, ChainParameters::regtest_overrides())?;
        let unit_test = ChainParameters::derive(&main, ChainParameters::unit_test_overrides())?;
        debug!("[Registry] Built parameter profiles for all networks");

        Ok(Self {
            profiles: Profiles {
                main: Arc::new(main),
                testnet: Arc::new(testnet),
                regtest: Arc::new(regtest),
                unit_test: Arc::new(unit_test),
            },
            current: None,
        })
    }

    /// Makes `id` the active selection.
    pub fn select(&mut self, id: NetworkId) {
        info!("[Registry] Selected network {}", id);
        self.current = Some(id);
    }

    /// The active profile.
    pub fn current(&self) -> Result<Arc<ChainParameters>, ChainParamsError> {
        match self.current {
            Some(id) => Ok(self.get(id)),
            None => Err(ChainParamsError::NoNetworkSelected),
        }
    }

    /// The active network identifier, if any selection was made.
    pub fn current_network(&self) -> Option<NetworkId> {
        self.current
    }

    /// Direct profile lookup, independent of the current selection.
    pub fn get(&self, id: NetworkId) -> Arc<ChainParameters> {
        match id {
            NetworkId::Main => Arc::clone(&self.profiles.main),
            NetworkId::Testnet => Arc::clone(&self.profiles.testnet),
            NetworkId::Regtest => Arc::clone(&self.profiles.regtest),
            NetworkId::UnitTest => Arc::clone(&self.profiles.unit_test),
        }
    }

    /// The restricted mutation capability, available only while UnitTest
    /// is the active selection.
    pub fn mutable_current(&mut self) -> Result<MutableParams<'_>, ChainParamsError> {
        match self.current {
            None => Err(ChainParamsError::NoNetworkSelected),
            Some(NetworkId::UnitTest) => {
                Ok(MutableParams { params: &mut self.profiles.unit_test })
            }
            Some(other) => Err(ChainParamsError::WrongNetworkForMutation(other)),
        }
    }
}

/// Setter capability over the UnitTest profile, for test-harness use only.
///
/// Only the fields below may be rewritten after construction; every other
/// profile simply never exposes this type. Mutation is copy-on-write:
/// readers holding an earlier [`Arc`] keep a consistent snapshot while
/// subsequent `current()` calls observe the new values.
#[derive(Debug)]
pub struct MutableParams<'a> {
    params: &'a mut Arc<ChainParameters>,
}

impl MutableParams<'_> {
    /// Rewrites the subsidy halving interval.
    pub fn set_subsidy_halving_interval(&mut self, blocks: u32) {
        Arc::make_mut(self.params).subsidy_halving_interval = blocks;
    }

    /// Rewrites the upgrade-enforcement majority threshold.
    pub fn set_enforce_upgrade_majority(&mut self, votes: u32) {
        Arc::make_mut(self.params).enforce_upgrade_majority = votes;
    }

    /// Rewrites the outdated-rejection majority threshold.
    pub fn set_reject_outdated_majority(&mut self, votes: u32) {
        Arc::make_mut(self.params).reject_outdated_majority = votes;
    }

    /// Rewrites the upgrade-voting window length.
    pub fn set_to_check_upgrade_majority(&mut self, window: u32) {
        Arc::make_mut(self.params).to_check_upgrade_majority = window;
    }

    /// Toggles default consistency checks.
    pub fn set_default_consistency_checks(&mut self, on: bool) {
        Arc::make_mut(self.params).default_consistency_checks = on;
    }

    /// Toggles acceptance of minimum-difficulty blocks.
    pub fn set_allow_min_difficulty_blocks(&mut self, on: bool) {
        Arc::make_mut(self.params).allow_min_difficulty_blocks = on;
    }

    /// Toggles skipping of proof-of-work validation.
    pub fn set_skip_proof_of_work_check(&mut self, on: bool) {
        Arc::make_mut(self.params).skip_proof_of_work_check = on;
    }
}

// =============================================================================
// PROCESS-WIDE REGISTRY
// =============================================================================

static GLOBAL: RwLock<Option<Registry>> = RwLock::new(None);

/// Runs `f` against the global registry, building it on first use.
fn with_global_mut<R>(
    f: impl FnOnce(&mut Registry) -> Result<R, ChainParamsError>,
) -> Result<R, ChainParamsError> {
    let mut guard = GLOBAL.write();
    if guard.is_none() {
        *guard = Some(Registry::new()?);
    }
    match guard.as_mut() {
        Some(registry) => f(registry),
        // Unreachable: the slot was just filled above.
        None => Err(ChainParamsError::NoNetworkSelected),
    }
}

/// Selects the active network on the process-wide registry, building all
/// profiles on first use.
pub fn select(id: NetworkId) -> Result<(), ChainParamsError> {
    with_global_mut(|registry| {
        registry.select(id);
        Ok(())
    })
}

/// Resolves a network name from the command-line collaborator and selects
/// it. Fails with [`ChainParamsError::UnknownNetwork`] for names outside
/// the defined set.
pub fn select_from_str(name: &str) -> Result<(), ChainParamsError> {
    select(NetworkId::from_str(name)?)
}

/// The active profile of the process-wide registry.
pub fn current() -> Result<Arc<ChainParameters>, ChainParamsError> {
    match &*GLOBAL.read() {
        Some(registry) => registry.current(),
        None => Err(ChainParamsError::NoNetworkSelected),
    }
}

/// The active network of the process-wide registry, if selected.
pub fn current_network() -> Option<NetworkId> {
    GLOBAL.read().as_ref().and_then(Registry::current_network)
}

/// Direct profile lookup on the process-wide registry, independent of the
/// current selection. Builds the profiles on first use.
pub fn get(id: NetworkId) -> Result<Arc<ChainParameters>, ChainParamsError> {
    {
        let guard = GLOBAL.read();
        if let Some(registry) = &*guard {
            return Ok(registry.get(id));
        }
    }
    with_global_mut(|registry| Ok(registry.get(id)))
}

/// Runs `f` with the UnitTest mutation capability of the process-wide
/// registry. Fails with [`ChainParamsError::WrongNetworkForMutation`]
/// unless UnitTest is the active selection.
pub fn with_mutable_current<R>(
    f: impl FnOnce(&mut MutableParams<'_>) -> R,
) -> Result<R, ChainParamsError> {
    let mut guard = GLOBAL.write();
    match guard.as_mut() {
        Some(registry) => {
            let mut capability = registry.mutable_current()?;
            Ok(f(&mut capability))
        }
        None => Err(ChainParamsError::NoNetworkSelected),
    }
}

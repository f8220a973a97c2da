//! Selection and mutation lifecycle against an explicit [`Registry`]
//! instance, as the node-runtime wires it during startup.

#[cfg(test)]
mod tests {
    use pc_chain_params::{ChainParamsError, NetworkId, Registry};

    #[test]
    fn test_startup_flow_select_then_read_everywhere() {
        let mut registry = Registry::new().unwrap();
        registry.select(NetworkId::Main);

        // The active profile drives wire and encoding decisions...
        let params = registry.current().unwrap();
        assert_eq!(params.message_magic, [0xf4, 0xcb, 0xbd, 0xe2]);
        assert!(params.require_standard_tx);

        // ...while code reasoning about a specific network bypasses the
        // selection.
        assert_eq!(registry.get(NetworkId::Regtest).default_port, 38006);
        assert_eq!(registry.current().unwrap().network, NetworkId::Main);
    }

    #[test]
    fn test_reselection_switches_served_profile() {
        let mut registry = Registry::new().unwrap();
        for id in NetworkId::ALL {
            registry.select(id);
            assert_eq!(registry.current().unwrap().network, id);
        }
    }

    #[test]
    fn test_mutation_capability_gated_by_selection() {
        let mut registry = Registry::new().unwrap();

        registry.select(NetworkId::Main);
        assert_eq!(
            registry.mutable_current().unwrap_err(),
            ChainParamsError::WrongNetworkForMutation(NetworkId::Main)
        );
        registry.select(NetworkId::Regtest);
        assert_eq!(
            registry.mutable_current().unwrap_err(),
            ChainParamsError::WrongNetworkForMutation(NetworkId::Regtest)
        );

        registry.select(NetworkId::UnitTest);
        let mut capability = registry.mutable_current().unwrap();
        capability.set_reject_outdated_majority(42);
        capability.set_default_consistency_checks(false);

        let unit_test = registry.current().unwrap();
        assert_eq!(unit_test.reject_outdated_majority, 42);
        assert!(!unit_test.default_consistency_checks);

        // Production profiles keep their constructed values.
        assert_eq!(registry.get(NetworkId::Main).reject_outdated_majority, 950);
        assert_eq!(registry.get(NetworkId::Testnet).reject_outdated_majority, 75);
    }

    #[test]
    fn test_independent_registries_do_not_share_mutations() {
        let mut first = Registry::new().unwrap();
        first.select(NetworkId::UnitTest);
        first.mutable_current().unwrap().set_subsidy_halving_interval(9);

        let second = Registry::new().unwrap();
        assert_eq!(second.get(NetworkId::UnitTest).subsidy_halving_interval, 864_000);
        assert_eq!(first.get(NetworkId::UnitTest).subsidy_halving_interval, 9);
    }
}

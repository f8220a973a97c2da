//! End-to-end checks over the full profile derivation chain:
//! Main → Testnet → Regtest and Main → UnitTest, as served by a registry.

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pc_chain_params::{AddressKind, NetworkId, Registry, ONE_WEEK_SECS};
    use primitive_types::U256;

    fn unix_now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    // =========================================================================
    // DERIVATION CHAIN
    // =========================================================================

    #[test]
    fn test_per_network_identity_fields() {
        let registry = Registry::new().unwrap();
        let expected = [
            (NetworkId::Main, "main", 37006),
            (NetworkId::Testnet, "test", 37005),
            (NetworkId::Regtest, "regtest", 38006),
            (NetworkId::UnitTest, "unittest", 38005),
        ];
        for (id, name, port) in expected {
            let params = registry.get(id);
            assert_eq!(params.network, id);
            assert_eq!(params.network_name, name);
            assert_eq!(params.default_port, port);
        }
    }

    #[test]
    fn test_regtest_inherits_unoverridden_testnet_fields() {
        let registry = Registry::new().unwrap();
        let testnet = registry.get(NetworkId::Testnet);
        let regtest = registry.get(NetworkId::Regtest);

        assert_eq!(regtest.last_pow_block, 150);
        assert_eq!(regtest.maturity, testnet.maturity);
        assert_eq!(regtest.masternode_count_drift, testnet.masternode_count_drift);
        assert_eq!(regtest.max_money_out, testnet.max_money_out);
        assert_eq!(regtest.alert_public_key, testnet.alert_public_key);
        // Inherited behavioral flag: testnet skips proof-of-work checks
        // and regtest does not override that.
        assert!(regtest.skip_proof_of_work_check);
    }

    #[test]
    fn test_unit_test_inherits_unoverridden_main_fields() {
        let registry = Registry::new().unwrap();
        let main = registry.get(NetworkId::Main);
        let unit_test = registry.get(NetworkId::UnitTest);

        assert_eq!(unit_test.message_magic, main.message_magic);
        assert_eq!(unit_test.maturity, main.maturity);
        assert_eq!(unit_test.last_pow_block, main.last_pow_block);
        assert_eq!(unit_test.prefixes, main.prefixes);
        assert_eq!(unit_test.genesis_hash, main.genesis_hash);
        // And the hermetic overrides took effect.
        assert!(unit_test.fixed_seeds.is_empty());
        assert!(unit_test.dns_seeds.is_empty());
        assert!(unit_test.mine_blocks_on_demand);
    }

    #[test]
    fn test_proof_of_work_limits() {
        let registry = Registry::new().unwrap();
        assert_eq!(registry.get(NetworkId::Main).proof_of_work_limit, U256::MAX >> 20u32);
        assert_eq!(registry.get(NetworkId::Testnet).proof_of_work_limit, U256::MAX >> 20u32);
        // Regtest relaxes the limit to near-trivial difficulty.
        assert_eq!(registry.get(NetworkId::Regtest).proof_of_work_limit, U256::MAX >> 1u32);
    }

    // =========================================================================
    // ADDRESS PREFIXES
    // =========================================================================

    #[test]
    fn test_prefixes_pairwise_distinct_across_coexisting_networks() {
        let registry = Registry::new().unwrap();
        let networks = [NetworkId::Main, NetworkId::Testnet, NetworkId::Regtest];
        let kinds = [
            AddressKind::PubKeyAddress,
            AddressKind::ScriptAddress,
            AddressKind::SecretKey,
            AddressKind::ExtPublicKey,
            AddressKind::ExtSecretKey,
            AddressKind::ExtCoinType,
        ];
        for kind in kinds {
            for (i, a) in networks.iter().enumerate() {
                for b in &networks[i + 1..] {
                    assert_ne!(
                        registry.get(*a).prefixes.prefix(kind),
                        registry.get(*b).prefixes.prefix(kind),
                        "{a} and {b} share a {kind:?} prefix"
                    );
                }
            }
        }
    }

    #[test]
    fn test_documented_pubkey_prefix_bytes() {
        let registry = Registry::new().unwrap();
        let prefix =
            |id: NetworkId| registry.get(id).prefixes.prefix(AddressKind::PubKeyAddress).to_vec();
        assert_eq!(prefix(NetworkId::Main), vec![45]);
        assert_eq!(prefix(NetworkId::Testnet), vec![108]);
        assert_eq!(prefix(NetworkId::UnitTest), vec![45]);
    }

    // =========================================================================
    // SEEDS & CHECKPOINTS
    // =========================================================================

    #[test]
    fn test_main_fixed_seeds_are_one_to_two_weeks_old() {
        let before = unix_now();
        let registry = Registry::new().unwrap();
        let after = unix_now();

        let main = registry.get(NetworkId::Main);
        assert!(!main.fixed_seeds.is_empty());
        for seed in &main.fixed_seeds {
            assert!(seed.last_seen >= before - 2 * ONE_WEEK_SECS);
            assert!(seed.last_seen < after - ONE_WEEK_SECS);
        }
    }

    #[test]
    fn test_checkpoint_tables_served_per_network() {
        let registry = Registry::new().unwrap();

        let main = registry.get(NetworkId::Main);
        assert_eq!(main.checkpoints.lookup(0), Some(main.genesis_hash));
        assert_eq!(
            main.checkpoints.lookup(150).unwrap().to_display_hex(),
            "00000929b295ce073f4dd9a146893b3e33dafaae7ed36d5bb2ad3159e5ce15df"
        );
        assert_eq!(
            main.checkpoints.lookup(200).unwrap().to_display_hex(),
            "00000087186aee20b63303710171cf299adbef3d373581b0510873e2ab709b0b"
        );
        assert_eq!(main.checkpoints.lookup(100), None);
        assert_eq!(main.checkpoints.last_checkpoint_time, 1539647004);
        assert_eq!(main.checkpoints.transactions_at_last_checkpoint, 202);
        assert_eq!(main.checkpoints.estimated_transactions_per_day, 2000);

        let testnet = registry.get(NetworkId::Testnet);
        assert_eq!(testnet.checkpoints.lookup(0), Some(testnet.genesis_hash));
        assert_eq!(testnet.checkpoints.latest_height(), Some(0));

        let regtest = registry.get(NetworkId::Regtest);
        assert_eq!(regtest.checkpoints.lookup(0), Some(regtest.genesis_hash));
        assert_eq!(regtest.checkpoints.estimated_transactions_per_day, 100);
    }
}

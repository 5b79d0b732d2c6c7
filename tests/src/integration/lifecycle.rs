//! # Lifecycle Scenarios
//!
//! Per-key state machine: ABSENT --Create--> LIVE --Update--> LIVE --Delete--> ABSENT.

#[cfg(test)]
mod tests {
    use crate::fixtures::{member, privileged, registry, request};
    use dr_01_asset_registry::{
        hash_pin, AccountStatus, AssetRegistryApi, PlaintextPin, RegistryConfig, RegistryError,
        StatusTransitionTable,
    };
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_create_read_duplicate() {
        let (svc, _) = registry(RegistryConfig::default());

        svc.create_asset(
            &privileged(),
            request("DLR100", "919000000100", "1111", 100.0, "ACTIVE"),
        )
        .unwrap();

        let asset = svc.read_asset("DLR100").unwrap();
        assert_eq!(asset.msisdn, "919000000100");
        assert_eq!(asset.balance, 100.0);
        assert_eq!(asset.status, AccountStatus::Active);
        assert_eq!(asset.credential.as_str(), "");

        let err = svc
            .create_asset(
                &privileged(),
                request("DLR100", "919000000999", "2222", 0.0, "CLOSED"),
            )
            .unwrap_err();
        assert_eq!(err.kind(), "AlreadyExists");
        assert_eq!(svc.read_asset("DLR100").unwrap(), asset);
    }

    #[test]
    fn test_member_cannot_mutate() {
        let (svc, _) = registry(RegistryConfig::default());
        svc.init_ledger().unwrap();

        let create = svc.create_asset(
            &member(),
            request("DLR100", "919000000100", "1111", 1.0, "ACTIVE"),
        );
        assert!(matches!(create, Err(RegistryError::Unauthorized { .. })));
        assert!(!svc.asset_exists("DLR100").unwrap());

        let update = svc.update_asset(
            &member(),
            request("DLR001", "919000000100", "1111", 0.0, "CLOSED"),
        );
        assert!(matches!(update, Err(RegistryError::Unauthorized { .. })));
        assert_eq!(
            svc.read_asset("DLR001").unwrap().status,
            AccountStatus::Active
        );

        let delete = svc.delete_asset(&member(), "DLR001");
        assert!(matches!(delete, Err(RegistryError::Unauthorized { .. })));
        assert!(svc.asset_exists("DLR001").unwrap());

        // Reads stay open to every caller.
        assert_eq!(svc.get_all_assets().unwrap().len(), 5);
    }

    #[test]
    fn test_init_ledger_is_ungated_and_resets_seed_accounts() {
        let (svc, _) = registry(RegistryConfig::default());
        svc.init_ledger().unwrap();

        svc.update_asset(
            &privileged(),
            request("DLR001", "919876543210", "9999", 1.0, "CLOSED"),
        )
        .unwrap();
        svc.delete_asset(&privileged(), "DLR002").unwrap();

        // No caller is involved: InitLedger needs no identity.
        assert_eq!(svc.init_ledger().unwrap(), 5);

        let restored = svc.read_asset("DLR001").unwrap();
        assert_eq!(restored.balance, 10000.0);
        assert_eq!(restored.status, AccountStatus::Active);
        assert!(svc
            .verify_credential("DLR001", &PlaintextPin::new("4321"))
            .unwrap());
        assert!(svc.asset_exists("DLR002").unwrap());
        assert_eq!(svc.get_asset_history("DLR002").unwrap().len(), 3);
    }

    #[test]
    fn test_verify_credential() {
        let (svc, _) = registry(RegistryConfig::default());
        svc.create_asset(
            &privileged(),
            request("DLR200", "919000000200", "9999", 0.0, "ACTIVE"),
        )
        .unwrap();

        assert!(svc
            .verify_credential("DLR200", &PlaintextPin::new("9999"))
            .unwrap());
        assert!(!svc
            .verify_credential("DLR200", &PlaintextPin::new("0000"))
            .unwrap());
    }

    #[test]
    fn test_get_all_after_mixed_operations() {
        let (svc, _) = registry(RegistryConfig::default());
        svc.init_ledger().unwrap();
        svc.create_asset(
            &privileged(),
            request("DLR000", "919000000000", "1000", 0.0, "ACTIVE"),
        )
        .unwrap();
        svc.delete_asset(&privileged(), "DLR003").unwrap();

        let all = svc.get_all_assets().unwrap();
        let ids: Vec<&str> = all.iter().map(|a| a.dealer_id.as_str()).collect();
        assert_eq!(ids, ["DLR000", "DLR001", "DLR002", "DLR004", "DLR005"]);
        assert!(all.iter().all(|a| a.credential.is_redacted()));
    }

    #[test]
    fn test_update_with_strict_lifecycle() {
        let config = RegistryConfig::new().with_status_transitions(StatusTransitionTable::strict());
        let (svc, _) = registry(config);
        svc.init_ledger().unwrap();

        // DLR004 is BLOCKED; it may only go back to ACTIVE or be closed.
        let err = svc
            .update_asset(
                &privileged(),
                request("DLR004", "917012345678", "2468", 0.0, "SUSPENDED"),
            )
            .unwrap_err();
        assert_eq!(err.kind(), "InvalidStatusTransition");

        svc.update_asset(
            &privileged(),
            request("DLR004", "917012345678", "8642", 50.0, "ACTIVE"),
        )
        .unwrap();
        svc.update_asset(
            &privileged(),
            request("DLR004", "917012345678", "8642", 0.0, "CLOSED"),
        )
        .unwrap();

        let err = svc
            .update_asset(
                &privileged(),
                request("DLR004", "917012345678", "8642", 0.0, "ACTIVE"),
            )
            .unwrap_err();
        assert_eq!(err.kind(), "InvalidStatusTransition");
    }

    #[test]
    fn test_update_rehashes_supplied_pin() {
        let (svc, _) = registry(RegistryConfig::default());
        svc.init_ledger().unwrap();

        svc.update_asset(
            &privileged(),
            request("DLR002", "918123456789", "7777", 5000.25, "ACTIVE"),
        )
        .unwrap();

        let history = svc.get_asset_history("DLR002").unwrap();
        let latest = history.last().unwrap().record.as_ref().unwrap();
        assert_eq!(latest.credential, hash_pin(&PlaintextPin::new("7777")));
        assert!(!svc
            .verify_credential("DLR002", &PlaintextPin::new("1234"))
            .unwrap());
    }

    #[test]
    fn test_concurrent_creates_of_distinct_ids() {
        let (svc, _) = registry(RegistryConfig::default());
        let svc = Arc::new(svc);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let svc = Arc::clone(&svc);
                thread::spawn(move || {
                    for j in 0..25 {
                        let id = format!("DLR{i}{j:03}");
                        svc.create_asset(
                            &privileged(),
                            request(&id, "919000000000", "1234", f64::from(j), "ACTIVE"),
                        )
                        .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let all = svc.get_all_assets().unwrap();
        assert_eq!(all.len(), 200);
        assert!(all
            .windows(2)
            .all(|pair| pair[0].dealer_id < pair[1].dealer_id));
        assert_eq!(svc.ledger().open_cursors(), 0);
    }
}

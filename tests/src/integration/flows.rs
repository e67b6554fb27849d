//! # Integration Test Flows
//!
//! The custody chaincode running end to end on the in-memory ledger.
//!
//! ## Flows Tested
//!
//! 1. **Init → info**: settings are stored verbatim and read back
//! 2. **Produce → sell carton → sell package → history**: the full
//!    chain-of-custody path
//! 3. **Concurrent custody transfers**: the second writer loses at commit
//! 4. **Peer runtime**: a script replay commits only successful invocations

#[cfg(test)]
mod tests {
    use crate::harness::{Harness, GENESIS_SECS};
    use cf_02_custody_chaincode::prelude::*;
    use cf_peer::{parse_script, Invocation, PeerRuntime};
    use cf_shared_types::{ChaincodeStub, LedgerError};
    use chrono::{DateTime, Utc};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Initialized chaincode with a registered producer and reseller.
    fn registered() -> Harness {
        let h = Harness::new();
        assert!(h.init("alice", r#"{"admin":"alice"}"#).is_ok());
        assert!(h.invoke("P1", "createUser", &["producer"]).is_ok());
        assert!(h.invoke("R1", "createUser", &["reseller"]).is_ok());
        h
    }

    // =============================================================================
    // SETTINGS
    // =============================================================================

    #[test]
    fn test_init_then_info_returns_settings() {
        let h = Harness::new();
        assert!(h.init("alice", r#"{"admin":"alice"}"#).is_ok());

        let info = h.invoke("anyone", "info", &[]);
        assert!(info.is_ok());
        let settings: Settings = info.payload_json().unwrap();
        assert_eq!(settings.admin, "alice");
    }

    #[test]
    fn test_info_before_init_returns_empty_payload() {
        let h = Harness::new();
        let info = h.invoke("anyone", "info", &[]);
        assert!(info.is_ok());
        assert!(info.payload.is_empty());
    }

    // =============================================================================
    // ROLE REGISTRY
    // =============================================================================

    #[test]
    fn test_registration_flow() {
        let h = registered();
        assert!(h.user_exists("P1", "producer"));
        assert!(h.user_exists("R1", "reseller"));
        assert!(!h.user_exists("R1", "producer"));
        assert!(!h.user_exists("X9", "pharmacy"));

        let bad = h.invoke("D1", "createUser", &["distributor"]);
        assert_eq!(bad.message, "Unknown user role: distributor");
        assert!(!h.user_exists("D1", "distributor"));
    }

    // =============================================================================
    // CHAIN OF CUSTODY
    // =============================================================================

    #[test]
    fn test_full_custody_flow() {
        let h = registered();

        // Step 2: P1 produces a carton of three packages.
        let created = h.create_carton("P1", 3);
        let carton_id = created.carton.id.clone();
        assert!(!carton_id.is_empty());
        assert_eq!(created.carton.producer, "P1");
        assert_eq!(created.carton.owner, "P1");
        assert_eq!(created.packages.len(), 3);
        assert!(created.packages.iter().all(|p| !p.sold));

        // Step 3: someone other than the owner cannot sell it.
        let refused = h.sell_carton("R2", &carton_id, "R1");
        assert!(!refused.is_ok());
        assert_eq!(refused.message, "Carton doesn't belong to you!");
        assert_eq!(h.get_carton(&carton_id).owner, "P1");

        // Step 4: the owner can.
        assert!(h.sell_carton("P1", &carton_id, "R1").is_ok());
        assert_eq!(h.get_carton(&carton_id).owner, "R1");

        // The previous owner has lost the right to sell packages.
        let package_id = created.packages[0].id.clone();
        assert!(!h.sell_package("P1", &carton_id, &package_id).is_ok());

        // Step 5: the new owner sells one package.
        assert!(h.sell_package("R1", &carton_id, &package_id).is_ok());
        let sold = h.get_package(&carton_id, &package_id);
        assert!(sold.sold);
        let sell_date = sold.sell_date.expect("sale time recorded");
        assert!(sell_date > DateTime::<Utc>::from_timestamp(GENESIS_SECS, 0).unwrap());

        // Siblings and carton owner are untouched.
        for sibling in &created.packages[1..] {
            assert!(!h.get_package(&carton_id, &sibling.id).sold);
        }
        assert_eq!(h.get_carton(&carton_id).owner, "R1");

        // Step 6: history has one entry per write to the carton record.
        let response = h.package_history(&carton_id, &package_id);
        assert!(response.is_ok(), "{}", response.message);
        let history: PackageHistoryResponse = response.payload_json().unwrap();
        assert_eq!(history.carton.owner, "R1");
        assert_eq!(history.package, sold);

        let owners: Vec<String> = history
            .owner_history
            .iter()
            .map(|entry| entry.carton().expect("snapshot is a carton").owner)
            .collect();
        assert_eq!(owners, vec!["P1", "R1"]);
        assert!(history.owner_history[0].timestamp < history.owner_history[1].timestamp);
        assert_ne!(history.owner_history[0].tx_id, history.owner_history[1].tx_id);
    }

    #[test]
    fn test_history_wire_format() {
        let h = registered();
        let created = h.create_carton("P1", 1);
        let response = h.package_history(&created.carton.id, &created.packages[0].id);

        let json: serde_json::Value = response.payload_json().unwrap();
        let entry = &json["ownerHistory"][0];
        assert!(entry["owner"].is_string());
        assert!(entry["txId"].is_string());
        assert!(entry["timeStamp"].is_i64());
        assert!(json["package"]["sellDate"].is_null());
    }

    #[test]
    fn test_carton_sale_leaves_packages_unchanged() {
        let h = registered();
        let created = h.create_carton("P1", 4);
        let before = h.packages(&created.carton.id);

        assert!(h.sell_carton("P1", &created.carton.id, "R1").is_ok());
        assert_eq!(h.packages(&created.carton.id), before);
        assert_eq!(before.len(), 4);
    }

    #[test]
    fn test_resale_of_sold_package_overwrites_time() {
        let h = registered();
        let created = h.create_carton("P1", 1);
        let (carton_id, package_id) = (&created.carton.id, &created.packages[0].id);

        assert!(h.sell_package("P1", carton_id, package_id).is_ok());
        let first = h.get_package(carton_id, package_id).sell_date;
        assert!(h.sell_package("P1", carton_id, package_id).is_ok());
        let second = h.get_package(carton_id, package_id).sell_date;

        assert!(first.is_some());
        assert!(second > first);
    }

    #[test]
    fn test_unknown_carton_and_package() {
        let h = registered();
        let response = h.sell_carton("P1", "404", "R1");
        assert_eq!(response.message, "No Carton for 404");

        let created = h.create_carton("P1", 1);
        let response = h.sell_package("P1", &created.carton.id, "nope");
        assert_eq!(
            response.message,
            format!("No package for {}:nope", created.carton.id)
        );
    }

    #[test]
    fn test_reserved_rune_in_id_is_rejected_as_input() {
        let h = registered();
        let expected =
            r#"Invalid key: invalid composite key component "a\0b": contains reserved rune U+0000"#;

        let response = h.invoke("P1", "getCarton", &[r#"{"cartonId":"a\u0000b"}"#]);
        assert!(!response.is_ok());
        assert_eq!(response.message, expected);

        let response = h.invoke("P1", "getCartonPackages", &[r#"{"cartonId":"a\u0000b"}"#]);
        assert_eq!(response.message, expected);

        let created = h.create_carton("P1", 1);
        let arg = format!(r#"{{"cartonId":"{}","packageId":"x\udbff\udfff"}}"#, created.carton.id);
        let response = h.invoke("P1", "sellPackage", &[arg.as_str()]);
        assert!(response.message.starts_with("Invalid key: "));
        assert!(response.message.ends_with("U+10FFFF"));
    }

    #[test]
    fn test_package_limit_from_config() {
        let h = Harness::with_config(ChaincodeConfig::default().with_max_packages_per_carton(5));
        let response = h.invoke(
            "P1",
            "createCarton",
            &[r#"{"name":"big","description":"d","packageNum":6}"#],
        );
        assert!(!response.is_ok());
        assert!(h.ledger.is_empty());
    }

    #[test]
    fn test_cartons_from_different_transactions_get_distinct_ids() {
        let h = registered();
        let first = h.create_carton("P1", 2);
        let second = h.create_carton("P1", 2);
        assert_ne!(first.carton.id, second.carton.id);
        assert_eq!(h.packages(&first.carton.id).len(), 2);
        assert_eq!(h.packages(&second.carton.id).len(), 2);
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[test]
    fn test_concurrent_sales_second_commit_conflicts() {
        let h = registered();
        let created = h.create_carton("P1", 1);
        let arg = |buyer: &str| {
            vec![format!(
                r#"{{"cartonId":"{}","buyer":"{buyer}"}}"#,
                created.carton.id
            )]
        };

        let mut first = h.ledger.begin("P1");
        let mut second = h.ledger.begin("P1");
        assert!(h.chaincode.invoke(&mut first, "sellCarton", &arg("R1")).is_ok());
        assert!(h.chaincode.invoke(&mut second, "sellCarton", &arg("R2")).is_ok());

        h.ledger.commit(first).unwrap();
        assert!(matches!(
            h.ledger.commit(second),
            Err(LedgerError::MvccConflict { .. })
        ));
        assert_eq!(h.get_carton(&created.carton.id).owner, "R1");
    }

    #[test]
    fn test_invocation_does_not_read_own_writes() {
        let h = registered();
        let created = h.create_carton("P1", 1);
        let arg = vec![format!(
            r#"{{"cartonId":"{}","buyer":"R1"}}"#,
            created.carton.id
        )];

        // Both sales in one transaction see the committed owner P1.
        let mut ctx = h.ledger.begin("P1");
        assert!(h.chaincode.invoke(&mut ctx, "sellCarton", &arg).is_ok());
        assert!(h.chaincode.invoke(&mut ctx, "sellCarton", &arg).is_ok());
        assert!(!ctx.tx_id().is_empty());
        h.ledger.commit(ctx).unwrap();

        let history = h.package_history(&created.carton.id, &created.packages[0].id);
        let history: PackageHistoryResponse = history.payload_json().unwrap();
        assert_eq!(history.owner_history.len(), 2);
    }

    // =============================================================================
    // PEER RUNTIME
    // =============================================================================

    #[test]
    fn test_peer_replays_script() {
        let script = parse_script(
            r#"[
                {"creator":"alice","function":"init","args":["{\"admin\":\"alice\"}"]},
                {"creator":"P1","function":"createUser","args":["producer"]},
                {"creator":"P1","function":"createCarton","args":["{\"name\":\"B\",\"description\":\"d\",\"packageNum\":2}"]},
                {"creator":"","function":"createUser","args":["producer"]},
                {"creator":"alice","function":"info","args":[]}
            ]"#,
        )
        .unwrap();

        let runtime = PeerRuntime::new(
            cf_01_ledger_substrate::InMemoryLedger::new(),
            CustodyChaincode::default(),
        );
        let outcomes = runtime.run(&script);

        let statuses: Vec<u16> = outcomes.iter().map(|o| o.status).collect();
        assert_eq!(statuses, vec![200, 200, 200, 500, 200]);
        assert!(outcomes[3].message.starts_with("Error extracting user identity"));
        assert_eq!(outcomes[2].payload["packages"].as_array().map(Vec::len), Some(2));
        assert_eq!(outcomes[4].payload["admin"], "alice");

        // settings + user + carton + two packages
        assert_eq!(runtime.ledger().len(), 5);
    }

    #[test]
    fn test_peer_reinit_rejected() {
        let runtime = PeerRuntime::new(
            cf_01_ledger_substrate::InMemoryLedger::new(),
            CustodyChaincode::default(),
        );
        let init = Invocation::new("alice", "init", &[r#"{"admin":"alice"}"#]);
        assert!(runtime.submit(&init).is_ok());
        let again = runtime.submit(&init);
        assert_eq!(again.status, 500);
        assert_eq!(again.message, "Chaincode already initialized");
    }
}

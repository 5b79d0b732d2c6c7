//! # Node Host Scenarios
//!
//! The JSON-lines host driving a registry from a scripted session.

#[cfg(test)]
mod tests {
    use node_runtime::{build_registry, memory_ledger, seed_if_empty, serve, NodeConfig, Response};
    use std::io::Cursor;

    fn run_session(config: &NodeConfig, script: &[&str]) -> Vec<Response> {
        let registry = build_registry(memory_ledger(), config);
        seed_if_empty(&registry, config).unwrap();

        let input = script.join("\n");
        let mut output = Vec::new();
        serve(&registry, Cursor::new(input), &mut output).unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_scripted_session() {
        let out = run_session(
            &NodeConfig::default(),
            &[
                r#"{"function":"GetAllAssets","args":[]}"#,
                r#"{"caller":"Org1MSP","function":"CreateAsset","args":["DLR100","919000000100","1111","100","ACTIVE","0","NA","new dealer"]}"#,
                r#"{"caller":"Org2MSP","function":"DeleteAsset","args":["DLR100"]}"#,
                r#"{"function":"VerifyMPIN","args":["DLR100","1111"]}"#,
                r#"{"caller":"Org1MSP","function":"UpdateAsset","args":["DLR100","919000000100","2222","150.5","SUSPENDED","50.5","DEPOSIT","top-up"]}"#,
                r#"{"function":"ReadAsset","args":["DLR100"]}"#,
                r#"{"function":"GetAssetHistory","args":["DLR100"]}"#,
            ],
        );
        assert_eq!(out.len(), 7);

        assert_eq!(out[0].result.as_ref().unwrap().as_array().unwrap().len(), 5);
        assert!(out[1].ok);
        assert_eq!(out[2].error.as_ref().unwrap().kind, "Unauthorized");
        assert_eq!(out[3].result, Some(serde_json::Value::Bool(true)));
        assert!(out[4].ok);

        let record = out[5].result.as_ref().unwrap();
        assert_eq!(record["STATUS"], "SUSPENDED");
        assert_eq!(record["TRANSTYPE"], "DEPOSIT");
        assert_eq!(record["BALANCE"], 150.5);
        assert_eq!(record["MPIN"], "");

        assert_eq!(out[6].result.as_ref().unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_anonymous_init_ledger() {
        let config = NodeConfig {
            seed_genesis: false,
            ..NodeConfig::default()
        };
        let out = run_session(
            &config,
            &[
                r#"{"function":"InitLedger","args":[]}"#,
                r#"{"caller":"Org2MSP","function":"InitLedger","args":[]}"#,
                r#"{"function":"GetAssetHistory","args":["DLR003"]}"#,
            ],
        );
        assert_eq!(out[0].result, Some(serde_json::json!(5)));
        assert_eq!(out[1].result, Some(serde_json::json!(5)));
        assert_eq!(out[2].result.as_ref().unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_configured_privileged_msp() {
        let config = NodeConfig {
            privileged_msp: "DealerOpsMSP".to_string(),
            seed_genesis: false,
            ..NodeConfig::default()
        };
        let out = run_session(
            &config,
            &[
                r#"{"caller":"Org1MSP","function":"CreateAsset","args":["DLR1","9190","1111","0","ACTIVE","0","NA",""]}"#,
                r#"{"caller":"DealerOpsMSP","function":"CreateAsset","args":["DLR1","9190","1111","0","ACTIVE","0","NA",""]}"#,
                r#"{"function":"GetAllAssets","args":[]}"#,
            ],
        );
        assert_eq!(out[0].error.as_ref().unwrap().kind, "Unauthorized");
        assert!(out[1].ok);
        assert_eq!(out[2].result.as_ref().unwrap().as_array().unwrap().len(), 1);
    }
}

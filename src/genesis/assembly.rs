use alloy_genesis::GenesisAccount;
use alloy_primitives::Address;
use reth_tracing::tracing::{debug, info};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::GenesisError;

/// Read a base genesis document.
pub fn load_base_genesis(path: &Path) -> Result<Value, GenesisError> {
    let json = std::fs::read_to_string(path)
        .map_err(|source| GenesisError::GenesisIo { path: path.to_path_buf(), source })?;
    Ok(serde_json::from_str(&json)?)
}

/// Merge `accounts` into the object at `genesis[target_key]`.
///
/// Existing entries for the same address are replaced, whatever the case of
/// their hex key. Every other entry and key of the document is kept.
pub fn merge_into_genesis(
    mut genesis: Value,
    target_key: &str,
    accounts: &BTreeMap<Address, GenesisAccount>,
) -> Result<Value, GenesisError> {
    let target = genesis
        .get_mut(target_key)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| GenesisError::MissingAllocKey(target_key.to_string()))?;

    for (address, account) in accounts {
        let key = address.to_string();
        let before = target.len();
        target.retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
        if target.len() != before {
            debug!(target: "ima::genesis", %address, "Replacing existing genesis account");
        }
        target.insert(key, serde_json::to_value(account)?);
    }

    info!(
        target: "ima::genesis",
        key = target_key,
        accounts = accounts.len(),
        "Merged predeployed accounts into genesis"
    );
    Ok(genesis)
}

/// Pretty-printed genesis document, keys sorted at every level, with a
/// trailing newline.
pub fn genesis_to_json(genesis: &Value) -> Result<String, GenesisError> {
    let mut json = serde_json::to_string_pretty(&sort_keys(genesis))?;
    json.push('\n');
    Ok(json)
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<_, _> = map.iter().collect();
            Value::Object(sorted.into_iter().map(|(k, v)| (k.clone(), sort_keys(v))).collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::tests::TempDir;
    use alloy_primitives::{address, Bytes, B256, U256};
    use serde_json::json;

    const PREDEPLOY: Address = address!("d2aaa00000000000000000000000000000000000");
    const FUNDED: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    fn accounts() -> BTreeMap<Address, GenesisAccount> {
        let account = GenesisAccount {
            balance: U256::ZERO,
            nonce: Some(0),
            code: Some(Bytes::from_static(&[0x60, 0x00])),
            storage: Some(BTreeMap::from([(B256::ZERO, B256::with_last_byte(1))])),
            private_key: None,
        };
        BTreeMap::from([(PREDEPLOY, account)])
    }

    fn base() -> Value {
        json!({
            "config": {"chainId": 1289306510},
            "alloc": {FUNDED: {"balance": "0x1000"}}
        })
    }

    #[test]
    fn test_merge_keeps_existing_entries() {
        let merged = merge_into_genesis(base(), "alloc", &accounts()).unwrap();
        let alloc = merged["alloc"].as_object().unwrap();
        assert_eq!(alloc.len(), 2);
        assert_eq!(alloc[FUNDED]["balance"], "0x1000");
        assert_eq!(merged["config"]["chainId"], 1289306510);

        let predeploy = &alloc[&PREDEPLOY.to_string()];
        assert_eq!(predeploy["code"], "0x6000");
        let storage = predeploy["storage"].as_object().unwrap();
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_merge_into_custom_key() {
        let base = json!({"accounts": {}, "alloc": {}});
        let merged = merge_into_genesis(base, "accounts", &accounts()).unwrap();
        assert_eq!(merged["accounts"].as_object().unwrap().len(), 1);
        assert!(merged["alloc"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_merge_replaces_lowercase_entry() {
        let base = json!({"alloc": {"0xd2aaa00000000000000000000000000000000000": {"balance": "0x5"}}});
        let merged = merge_into_genesis(base, "alloc", &accounts()).unwrap();
        let alloc = merged["alloc"].as_object().unwrap();
        assert_eq!(alloc.len(), 1);
        assert!(alloc[&PREDEPLOY.to_string()].get("code").is_some());
    }

    #[test]
    fn test_missing_target_key() {
        let err = merge_into_genesis(json!({"config": {}}), "alloc", &accounts()).unwrap_err();
        assert!(matches!(err, GenesisError::MissingAllocKey(key) if key == "alloc"));
    }

    #[test]
    fn test_target_key_must_be_object() {
        let err = merge_into_genesis(json!({"alloc": []}), "alloc", &accounts()).unwrap_err();
        assert!(matches!(err, GenesisError::MissingAllocKey(_)));
    }

    #[test]
    fn test_output_is_sorted_and_terminated() {
        let json = genesis_to_json(&json!({"b": 1, "a": {"d": 2, "c": 3}})).unwrap();
        assert!(json.ends_with("}\n"));
        assert!(json.find("\"a\"").unwrap() < json.find("\"b\"").unwrap());
        assert!(json.find("\"c\"").unwrap() < json.find("\"d\"").unwrap());
    }

    #[test]
    fn test_load_base_genesis() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("base_genesis.json");
        std::fs::write(&path, base().to_string()).unwrap();
        assert_eq!(load_base_genesis(&path).unwrap(), base());

        let err = load_base_genesis(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GenesisError::GenesisIo { .. }));

        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_base_genesis(&path).unwrap_err(), GenesisError::Serialization(_)));
    }
}

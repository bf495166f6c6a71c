use alloy_json_abi::JsonAbi;
use alloy_primitives::keccak256;

/// Compute the Solidity function selector (first 4 bytes of keccak256(signature)).
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Whether `abi` exposes a function with the given signature,
/// e.g. `"getRoleMember(bytes32,uint256)"`.
pub fn has_accessor(abi: &JsonAbi, signature: &str) -> bool {
    let selector = function_selector(signature);
    abi.functions().any(|function| function.selector().0 == selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABI: &str = r#"[
        {"type": "function", "name": "messageProxy", "inputs": [],
         "outputs": [{"name": "", "type": "address"}], "stateMutability": "view"},
        {"type": "function", "name": "hasRole",
         "inputs": [{"name": "role", "type": "bytes32"}, {"name": "account", "type": "address"}],
         "outputs": [{"name": "", "type": "bool"}], "stateMutability": "view"}
    ]"#;

    #[test]
    fn test_known_selectors() {
        // ERC20 transfer, the canonical example
        assert_eq!(function_selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
        // AccessControl hasRole
        assert_eq!(function_selector("hasRole(bytes32,address)"), [0x91, 0xd1, 0x48, 0x54]);
    }

    #[test]
    fn test_has_accessor() {
        let abi: JsonAbi = serde_json::from_str(ABI).unwrap();
        assert!(has_accessor(&abi, "messageProxy()"));
        assert!(has_accessor(&abi, "hasRole(bytes32,address)"));
        assert!(!has_accessor(&abi, "hasRole(bytes32)"));
        assert!(!has_accessor(&abi, "tokenManagers(uint256)"));
    }
}

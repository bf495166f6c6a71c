use alloy_primitives::{Address, Keccak256, B256, U256};

/// Compute the base slot for a Solidity dynamic array's data.
///
/// For `address[] public tokenManagers` at slot 102:
///   base = keccak256(abi.encode(102))
///   tokenManagers[0] lives at base + 0
///   tokenManagers[1] lives at base + 1
///   etc.
pub fn dynamic_array_base_slot(array_slot: U256) -> U256 {
    let mut hasher = Keccak256::new();
    hasher.update(B256::from(array_slot.to_be_bytes()).as_slice());
    U256::from_be_bytes(hasher.finalize().0)
}

/// Compute the storage slot of a mapping value.
///
/// For `mapping(bytes32 => RoleData) _roles` at slot 51:
///   slot = keccak256(abi.encode(role, 51))
///
/// Keys of every value type are left-padded to a full word before hashing, so
/// addresses go through [`encode_address`] first.
pub fn mapping_value_slot(key: B256, mapping_slot: U256) -> U256 {
    let mut hasher = Keccak256::new();
    hasher.update(key.as_slice());
    hasher.update(B256::from(mapping_slot.to_be_bytes()).as_slice());
    U256::from_be_bytes(hasher.finalize().0)
}

/// Compute the storage slot for a Solidity `mapping(address => _)` entry.
pub fn mapping_address_slot(key: Address, mapping_slot: U256) -> U256 {
    mapping_value_slot(encode_address(key), mapping_slot)
}

/// Encode an address into a B256 storage value (left-padded).
pub fn encode_address(addr: Address) -> B256 {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(addr.as_slice());
    B256::from(bytes)
}

/// Decode an address from a B256 storage value (left-padded with zeros).
pub fn decode_address(value: B256) -> Address {
    Address::from_slice(&value[12..32])
}

/// Convert a slot index into its B256 storage key (big-endian).
pub fn slot_key(slot: U256) -> B256 {
    B256::from(slot.to_be_bytes())
}

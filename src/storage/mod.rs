//! Contract Storage Writer
//!
//! Translates semantic values (words, addresses, dynamic arrays, roles) into
//! Solidity-compatible storage slots. The writer never reads back; slot
//! collisions between hand-written layouts are the layout author's concern.
//! Every layout is declared as a [`StorageLayout`] table.
//!
//! Layout rules reproduced here:
//!   - value types occupy one full slot (nothing handled here is packed)
//!   - `T[] a` at slot `s`: length at `s`, `a[i]` at `keccak256(s) + i`
//!   - `mapping(K => V) m` at slot `s`: `m[k]` at `keccak256(pad32(k) . s)`

pub mod layout;
pub mod roles;
pub mod slots;

pub use layout::{next_slot, StorageField, StorageLayout};
pub use roles::{role_id, RoleId, DEFAULT_ADMIN_ROLE};
pub use slots::{
    decode_address, dynamic_array_base_slot, encode_address, mapping_address_slot,
    mapping_value_slot, slot_key,
};

use alloy_primitives::{Address, B256, U256};
use std::collections::BTreeMap;

/// Sparse contract storage: slot index → word.
///
/// A slot absent from the map reads as zero, matching uninitialized storage.
/// Zero-valued entries are dropped when the map is turned into genesis storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotMap {
    slots: BTreeMap<U256, U256>,
}

impl SlotMap {
    /// Create an empty slot map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a 256-bit word at `slot`, overwriting any prior value.
    pub fn write_uint256(&mut self, slot: U256, value: U256) {
        self.slots.insert(slot, value);
    }

    /// Store a `bytes32` word at `slot`.
    pub fn write_bytes32(&mut self, slot: U256, value: B256) {
        self.write_uint256(slot, U256::from_be_bytes(value.0));
    }

    /// Store a boolean (0 or 1) at `slot`.
    pub fn write_bool(&mut self, slot: U256, value: bool) {
        self.write_uint256(slot, U256::from(value as u8));
    }

    /// Store an address in the low 160 bits of `slot`.
    pub fn write_address(&mut self, slot: U256, address: Address) {
        self.write_bytes32(slot, encode_address(address));
    }

    /// Store `address[]` declared at `slot`: length at `slot`, elements
    /// contiguously from `keccak256(slot)`.
    pub fn write_addresses_array(&mut self, slot: U256, addresses: &[Address]) {
        self.write_uint256(slot, U256::from(addresses.len()));
        let base = dynamic_array_base_slot(slot);
        for (i, address) in addresses.iter().enumerate() {
            self.write_address(base + U256::from(i), *address);
        }
    }

    /// Read the raw word at `slot` (zero when unset).
    pub fn get(&self, slot: U256) -> U256 {
        self.slots.get(&slot).copied().unwrap_or(U256::ZERO)
    }

    /// Number of slots written so far (including zero writes).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing was written.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over written slots in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&U256, &U256)> {
        self.slots.iter()
    }

    /// Copy every entry of `other` into this map; entries of `other` win.
    pub fn extend(&mut self, other: SlotMap) {
        self.slots.extend(other.slots);
    }

    /// Convert into genesis storage (B256 keys and values), omitting zero words.
    pub fn into_genesis_storage(self) -> BTreeMap<B256, B256> {
        self.slots
            .into_iter()
            .filter(|(_, value)| !value.is_zero())
            .map(|(slot, value)| (slot_key(slot), B256::from(value.to_be_bytes())))
            .collect()
    }
}

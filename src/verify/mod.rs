//! Read-back of generated storage.
//!
//! Mirrors the public accessors of the predeployed contracts
//! (`hasRole`, `getRoleMember`, `messageProxy()` and friends) by walking the
//! same storage paths the EVM would, so generated state can be checked
//! without executing bytecode. Reads go through [`StorageReader`], which the
//! generated alloc implements via [`AllocStorageReader`].

pub mod readers;
pub mod selectors;

pub use readers::{
    get_role_member, get_role_member_count, has_role, read_address, read_address_array,
    read_bool, read_bytes32, read_uint, MAX_ARRAY_LENGTH,
};
pub use selectors::{function_selector, has_accessor};

use alloy_genesis::GenesisAccount;
use alloy_primitives::{Address, B256, U256};
use std::collections::BTreeMap;

/// Trait for reading contract storage slots.
pub trait StorageReader {
    /// Read a storage slot value from a contract address.
    /// Returns None if the contract or slot doesn't exist.
    fn read_storage(&self, address: Address, slot: U256) -> Option<B256>;
}

/// A StorageReader over a generated genesis alloc.
#[derive(Debug, Clone, Copy)]
pub struct AllocStorageReader<'a> {
    alloc: &'a BTreeMap<Address, GenesisAccount>,
}

impl<'a> AllocStorageReader<'a> {
    pub fn new(alloc: &'a BTreeMap<Address, GenesisAccount>) -> Self {
        Self { alloc }
    }
}

impl StorageReader for AllocStorageReader<'_> {
    fn read_storage(&self, address: Address, slot: U256) -> Option<B256> {
        let account = self.alloc.get(&address)?;
        let storage = account.storage.as_ref()?;
        storage.get(&B256::from(slot.to_be_bytes())).copied()
    }
}

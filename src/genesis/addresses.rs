use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::GenesisError;

/// ProxyAdmin: owner of every predeployed proxy
pub const PROXY_ADMIN_ADDRESS: Address = address!("d2aaa00000000000000000000000000000000000");

/// MessageProxyForSchain proxy
pub const MESSAGE_PROXY_FOR_SCHAIN_ADDRESS: Address =
    address!("d2aaa00100000000000000000000000000000000");
/// MessageProxyForSchain implementation
pub const MESSAGE_PROXY_FOR_SCHAIN_IMPLEMENTATION_ADDRESS: Address =
    address!("d2aaa00100000000000000000000000000000001");

/// KeyStorage proxy
pub const KEY_STORAGE_ADDRESS: Address = address!("d2aaa00200000000000000000000000000000000");
/// KeyStorage implementation
pub const KEY_STORAGE_IMPLEMENTATION_ADDRESS: Address =
    address!("d2aaa00200000000000000000000000000000001");

/// CommunityLocker proxy
pub const COMMUNITY_LOCKER_ADDRESS: Address = address!("d2aaa00300000000000000000000000000000000");
/// CommunityLocker implementation
pub const COMMUNITY_LOCKER_IMPLEMENTATION_ADDRESS: Address =
    address!("d2aaa00300000000000000000000000000000001");

/// TokenManagerEth (referenced only)
pub const TOKEN_MANAGER_ETH_ADDRESS: Address = address!("d2aaa00400000000000000000000000000000000");
/// TokenManagerERC20 (referenced only)
pub const TOKEN_MANAGER_ERC20_ADDRESS: Address =
    address!("d2aaa00500000000000000000000000000000000");
/// TokenManagerERC721 (referenced only)
pub const TOKEN_MANAGER_ERC721_ADDRESS: Address =
    address!("d2aaa00600000000000000000000000000000000");

/// TokenManagerLinker proxy
pub const TOKEN_MANAGER_LINKER_ADDRESS: Address =
    address!("d2aaa00800000000000000000000000000000000");
/// TokenManagerLinker implementation
pub const TOKEN_MANAGER_LINKER_IMPLEMENTATION_ADDRESS: Address =
    address!("d2aaa00800000000000000000000000000000001");

/// Logical predeployed contract names, as used in the address table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractName {
    ProxyAdmin,
    MessageProxyForSchain,
    MessageProxyForSchainImplementation,
    KeyStorage,
    KeyStorageImplementation,
    CommunityLocker,
    CommunityLockerImplementation,
    TokenManagerEth,
    TokenManagerErc20,
    TokenManagerErc721,
    TokenManagerLinker,
    TokenManagerLinkerImplementation,
}

impl ContractName {
    /// Every allocated name, in table order.
    pub const ALL: [ContractName; 12] = [
        ContractName::ProxyAdmin,
        ContractName::MessageProxyForSchain,
        ContractName::MessageProxyForSchainImplementation,
        ContractName::KeyStorage,
        ContractName::KeyStorageImplementation,
        ContractName::CommunityLocker,
        ContractName::CommunityLockerImplementation,
        ContractName::TokenManagerEth,
        ContractName::TokenManagerErc20,
        ContractName::TokenManagerErc721,
        ContractName::TokenManagerLinker,
        ContractName::TokenManagerLinkerImplementation,
    ];

    /// Canonical predeployed address.
    pub const fn canonical_address(self) -> Address {
        match self {
            ContractName::ProxyAdmin => PROXY_ADMIN_ADDRESS,
            ContractName::MessageProxyForSchain => MESSAGE_PROXY_FOR_SCHAIN_ADDRESS,
            ContractName::MessageProxyForSchainImplementation => {
                MESSAGE_PROXY_FOR_SCHAIN_IMPLEMENTATION_ADDRESS
            }
            ContractName::KeyStorage => KEY_STORAGE_ADDRESS,
            ContractName::KeyStorageImplementation => KEY_STORAGE_IMPLEMENTATION_ADDRESS,
            ContractName::CommunityLocker => COMMUNITY_LOCKER_ADDRESS,
            ContractName::CommunityLockerImplementation => COMMUNITY_LOCKER_IMPLEMENTATION_ADDRESS,
            ContractName::TokenManagerEth => TOKEN_MANAGER_ETH_ADDRESS,
            ContractName::TokenManagerErc20 => TOKEN_MANAGER_ERC20_ADDRESS,
            ContractName::TokenManagerErc721 => TOKEN_MANAGER_ERC721_ADDRESS,
            ContractName::TokenManagerLinker => TOKEN_MANAGER_LINKER_ADDRESS,
            ContractName::TokenManagerLinkerImplementation => {
                TOKEN_MANAGER_LINKER_IMPLEMENTATION_ADDRESS
            }
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContractName::ProxyAdmin => "ProxyAdmin",
            ContractName::MessageProxyForSchain => "MessageProxyForSchain",
            ContractName::MessageProxyForSchainImplementation => {
                "MessageProxyForSchain (implementation)"
            }
            ContractName::KeyStorage => "KeyStorage",
            ContractName::KeyStorageImplementation => "KeyStorage (implementation)",
            ContractName::CommunityLocker => "CommunityLocker",
            ContractName::CommunityLockerImplementation => "CommunityLocker (implementation)",
            ContractName::TokenManagerEth => "TokenManagerEth",
            ContractName::TokenManagerErc20 => "TokenManagerERC20",
            ContractName::TokenManagerErc721 => "TokenManagerERC721",
            ContractName::TokenManagerLinker => "TokenManagerLinker",
            ContractName::TokenManagerLinkerImplementation => "TokenManagerLinker (implementation)",
        };
        f.write_str(name)
    }
}

/// Logical contract name → fixed address.
///
/// Fixed before generation starts and only read afterwards. Deserializing
/// applies the given entries on top of the canonical table, so a config file
/// only lists the addresses it moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<ContractName, Address>", into = "BTreeMap<ContractName, Address>")]
pub struct AddressTable {
    addresses: BTreeMap<ContractName, Address>,
}

impl AddressTable {
    /// The canonical predeployed addresses.
    pub fn canonical() -> Self {
        Self {
            addresses: ContractName::ALL.into_iter().map(|n| (n, n.canonical_address())).collect(),
        }
    }

    /// A table with no entries.
    pub fn empty() -> Self {
        Self { addresses: BTreeMap::new() }
    }

    /// Builder method to set the address of `name`
    pub fn with_address(mut self, name: ContractName, address: Address) -> Self {
        self.addresses.insert(name, address);
        self
    }

    /// Address allocated to `name`.
    pub fn get(&self, name: ContractName) -> Result<Address, GenesisError> {
        self.addresses.get(&name).copied().ok_or(GenesisError::MissingAddress(name))
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (ContractName, Address)> + '_ {
        self.addresses.iter().map(|(name, address)| (*name, *address))
    }
}

impl Default for AddressTable {
    fn default() -> Self {
        Self::canonical()
    }
}

impl From<BTreeMap<ContractName, Address>> for AddressTable {
    fn from(overrides: BTreeMap<ContractName, Address>) -> Self {
        let mut table = Self::canonical();
        table.addresses.extend(overrides);
        table
    }
}

impl From<AddressTable> for BTreeMap<ContractName, Address> {
    fn from(table: AddressTable) -> Self {
        table.addresses
    }
}

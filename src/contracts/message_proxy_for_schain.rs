use alloy_primitives::{keccak256, Address, B256, U256};

use crate::config::GeneratorConfig;
use crate::constants::{
    CHAIN_CONNECTOR_ROLE, CONSTANT_SETTER_ROLE, EXTRA_CONTRACT_REGISTRAR_ROLE, MAINNET_NAME,
};
use crate::errors::GenesisError;
use crate::generator::ContractState;
use crate::genesis::ContractName;
use crate::storage::layout::{ACCESS_CONTROL_END, ACCESS_CONTROL_PREFIX, ROLES_SLOT};
use crate::storage::{
    mapping_value_slot, next_slot, role_id, SlotMap, StorageField, StorageLayout,
    DEFAULT_ADMIN_ROLE,
};

// ---------- storage ----------
// 0..100:  Initializable, ContextUpgradeable, AccessControlUpgradeable
// ----MessageProxyForSchain----
// 101:  connectedChains      mapping(bytes32 => ConnectedChainInfo)
// 102:  registryContracts    mapping(bytes32 => mapping(address => bool))
// 103:  gasLimit
// 104:  keyStorage
// 105:  schainHash
//
// ConnectedChainInfo:
// +0:   incomingMessageCounter
// +1:   outgoingMessageCounter
// +2:   inited

pub const CONNECTED_CHAINS_SLOT: u64 = ACCESS_CONTROL_END;
pub const REGISTRY_CONTRACTS_SLOT: u64 = next_slot(CONNECTED_CHAINS_SLOT);
pub const GAS_LIMIT_SLOT: u64 = next_slot(REGISTRY_CONTRACTS_SLOT);
pub const KEY_STORAGE_SLOT: u64 = next_slot(GAS_LIMIT_SLOT);
pub const SCHAIN_HASH_SLOT: u64 = next_slot(KEY_STORAGE_SLOT);

/// Offset of `inited` inside a `ConnectedChainInfo` entry
pub const CHAIN_INFO_INITED_OFFSET: u64 = 2;

/// Slot of `connectedChains[chain_hash].inited`.
pub fn connected_chain_inited_slot(chain_hash: B256) -> U256 {
    mapping_value_slot(chain_hash, U256::from(CONNECTED_CHAINS_SLOT))
        + U256::from(CHAIN_INFO_INITED_OFFSET)
}

/// Schain side of the IMA message bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageProxyForSchain {
    /// Receives the admin, connector, registrar and constant setter roles
    pub owner: Address,
    /// Gas available to post-processing of one incoming message
    pub gas_limit: u64,
    /// KeyStorage address
    pub key_storage: Address,
    /// `keccak256(schainName)`
    pub schain_hash: B256,
}

impl MessageProxyForSchain {
    /// Roles held by the owner right after initialization.
    pub fn owner_roles() -> [B256; 4] {
        [
            DEFAULT_ADMIN_ROLE,
            role_id(CHAIN_CONNECTOR_ROLE),
            role_id(EXTRA_CONTRACT_REGISTRAR_ROLE),
            role_id(CONSTANT_SETTER_ROLE),
        ]
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenesisError> {
        Ok(Self {
            owner: config.schain_owner,
            gas_limit: config.gas_limit,
            key_storage: config.addresses.get(ContractName::KeyStorage)?,
            schain_hash: keccak256(config.schain_name.as_bytes()),
        })
    }
}

impl ContractState for MessageProxyForSchain {
    const ARTIFACT_NAME: &'static str = "MessageProxyForSchain";

    const LAYOUT: StorageLayout = StorageLayout {
        contract: "MessageProxyForSchain",
        fields: &[
            ACCESS_CONTROL_PREFIX[0],
            ACCESS_CONTROL_PREFIX[1],
            ACCESS_CONTROL_PREFIX[2],
            ACCESS_CONTROL_PREFIX[3],
            StorageField::new("connectedChains", "MessageProxy", CONNECTED_CHAINS_SLOT),
            StorageField::new("registryContracts", "MessageProxy", REGISTRY_CONTRACTS_SLOT),
            StorageField::new("gasLimit", "MessageProxy", GAS_LIMIT_SLOT),
            StorageField::new("keyStorage", "MessageProxyForSchain", KEY_STORAGE_SLOT),
            StorageField::new("schainHash", "MessageProxyForSchain", SCHAIN_HASH_SLOT),
        ],
    };

    fn write_storage(&self, storage: &mut SlotMap) {
        let roles = U256::from(ROLES_SLOT);
        for role in Self::owner_roles() {
            storage.grant_role(roles, role, &[self.owner]);
        }

        // mainnet is connected from the start
        storage.write_bool(connected_chain_inited_slot(keccak256(MAINNET_NAME)), true);

        storage.write_uint256(U256::from(GAS_LIMIT_SLOT), U256::from(self.gas_limit));
        storage.write_address(U256::from(KEY_STORAGE_SLOT), self.key_storage);
        storage.write_bytes32(U256::from(SCHAIN_HASH_SLOT), self.schain_hash);
    }
}

use alloy_primitives::{Address, U256};

use crate::config::GeneratorConfig;
use crate::constants::REGISTRAR_ROLE;
use crate::errors::GenesisError;
use crate::generator::ContractState;
use crate::genesis::ContractName;
use crate::storage::layout::{ACCESS_CONTROL_END, ACCESS_CONTROL_PREFIX, ROLES_SLOT};
use crate::storage::{next_slot, role_id, SlotMap, StorageField, StorageLayout, DEFAULT_ADMIN_ROLE};

// ---------- storage ----------
// --------Initializable--------
// 0:    _initialized, _initializing
// -----ContextUpgradeable------
// 1:    __gap
// ...   __gap
// 50:   __gap
// --AccessControlUpgradeable---
// 51:   _roles
// 52:   __gap
// ...   __gap
// 100:  __gap
// -----TokenManagerLinker------
// 101:  messageProxy
// 102:  tokenManagers

/// `messageProxy` slot
pub const MESSAGE_PROXY_SLOT: u64 = ACCESS_CONTROL_END;
/// `tokenManagers` slot
pub const TOKEN_MANAGERS_SLOT: u64 = next_slot(MESSAGE_PROXY_SLOT);

/// Registry of the schain's token managers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenManagerLinker {
    /// Receives `DEFAULT_ADMIN_ROLE` and `REGISTRAR_ROLE`
    pub deployer: Address,
    /// MessageProxyForSchain address
    pub message_proxy: Address,
    /// Registered token managers, in registration order
    pub token_managers: Vec<Address>,
}

impl TokenManagerLinker {
    /// Linker with the ETH, ERC20 and ERC721 token managers registered.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenesisError> {
        let addresses = &config.addresses;
        Ok(Self {
            deployer: config.schain_owner,
            message_proxy: addresses.get(ContractName::MessageProxyForSchain)?,
            token_managers: vec![
                addresses.get(ContractName::TokenManagerEth)?,
                addresses.get(ContractName::TokenManagerErc20)?,
                addresses.get(ContractName::TokenManagerErc721)?,
            ],
        })
    }
}

impl ContractState for TokenManagerLinker {
    const ARTIFACT_NAME: &'static str = "TokenManagerLinker";

    const LAYOUT: StorageLayout = StorageLayout {
        contract: "TokenManagerLinker",
        fields: &[
            ACCESS_CONTROL_PREFIX[0],
            ACCESS_CONTROL_PREFIX[1],
            ACCESS_CONTROL_PREFIX[2],
            ACCESS_CONTROL_PREFIX[3],
            StorageField::new("messageProxy", "TokenManagerLinker", MESSAGE_PROXY_SLOT),
            StorageField::new("tokenManagers", "TokenManagerLinker", TOKEN_MANAGERS_SLOT),
        ],
    };

    fn write_storage(&self, storage: &mut SlotMap) {
        let roles = U256::from(ROLES_SLOT);
        storage.grant_role(roles, DEFAULT_ADMIN_ROLE, &[self.deployer]);
        storage.grant_role(roles, role_id(REGISTRAR_ROLE), &[self.deployer]);
        storage.write_address(U256::from(MESSAGE_PROXY_SLOT), self.message_proxy);
        storage.write_addresses_array(U256::from(TOKEN_MANAGERS_SLOT), &self.token_managers);
    }
}

use alloy_primitives::{keccak256, Address, B256, U256};

use crate::config::GeneratorConfig;
use crate::errors::GenesisError;
use crate::generator::ContractState;
use crate::genesis::ContractName;
use crate::storage::layout::{ACCESS_CONTROL_END, ACCESS_CONTROL_PREFIX, ROLES_SLOT};
use crate::storage::{next_slot, SlotMap, StorageField, StorageLayout, DEFAULT_ADMIN_ROLE};

// ---------- storage ----------
// 0..100:  Initializable, ContextUpgradeable, AccessControlUpgradeable
//          (same prefix as TokenManagerLinker, `_roles` at 51)
// -------CommunityLocker-------
// 101:  messageProxy
// 102:  tokenManagerLinker
// 103:  communityPool
// 104:  schainHash
// 105:  timeLimitPerMessage
// 106:  _unfrozenUsers
// 107:  _lastMessageTimeStamp

pub const MESSAGE_PROXY_SLOT: u64 = ACCESS_CONTROL_END;
pub const TOKEN_MANAGER_LINKER_SLOT: u64 = next_slot(MESSAGE_PROXY_SLOT);
pub const COMMUNITY_POOL_SLOT: u64 = next_slot(TOKEN_MANAGER_LINKER_SLOT);
pub const SCHAIN_HASH_SLOT: u64 = next_slot(COMMUNITY_POOL_SLOT);
pub const TIME_LIMIT_PER_MESSAGE_SLOT: u64 = next_slot(SCHAIN_HASH_SLOT);
pub const UNFROZEN_USERS_SLOT: u64 = next_slot(TIME_LIMIT_PER_MESSAGE_SLOT);
pub const LAST_MESSAGE_TIMESTAMP_SLOT: u64 = next_slot(UNFROZEN_USERS_SLOT);

/// Rate limiter for outgoing user messages on the schain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityLocker {
    /// Receives `DEFAULT_ADMIN_ROLE`
    pub deployer: Address,
    /// MessageProxyForSchain address
    pub message_proxy: Address,
    /// TokenManagerLinker address
    pub token_manager_linker: Address,
    /// CommunityPool on mainnet
    pub community_pool: Address,
    /// `keccak256(schainName)`
    pub schain_hash: B256,
    /// Seconds between two messages of the same user
    pub time_limit_per_message: u64,
}

impl CommunityLocker {
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenesisError> {
        Ok(Self {
            deployer: config.schain_owner,
            message_proxy: config.addresses.get(ContractName::MessageProxyForSchain)?,
            token_manager_linker: config.addresses.get(ContractName::TokenManagerLinker)?,
            community_pool: config.community_pool,
            schain_hash: keccak256(config.schain_name.as_bytes()),
            time_limit_per_message: config.time_limit_per_message,
        })
    }
}

impl ContractState for CommunityLocker {
    const ARTIFACT_NAME: &'static str = "CommunityLocker";

    const LAYOUT: StorageLayout = StorageLayout {
        contract: "CommunityLocker",
        fields: &[
            ACCESS_CONTROL_PREFIX[0],
            ACCESS_CONTROL_PREFIX[1],
            ACCESS_CONTROL_PREFIX[2],
            ACCESS_CONTROL_PREFIX[3],
            StorageField::new("messageProxy", "CommunityLocker", MESSAGE_PROXY_SLOT),
            StorageField::new("tokenManagerLinker", "CommunityLocker", TOKEN_MANAGER_LINKER_SLOT),
            StorageField::new("communityPool", "CommunityLocker", COMMUNITY_POOL_SLOT),
            StorageField::new("schainHash", "CommunityLocker", SCHAIN_HASH_SLOT),
            StorageField::new("timeLimitPerMessage", "CommunityLocker", TIME_LIMIT_PER_MESSAGE_SLOT),
            StorageField::new("_unfrozenUsers", "CommunityLocker", UNFROZEN_USERS_SLOT),
            StorageField::new("_lastMessageTimeStamp", "CommunityLocker", LAST_MESSAGE_TIMESTAMP_SLOT),
        ],
    };

    fn write_storage(&self, storage: &mut SlotMap) {
        storage.grant_role(U256::from(ROLES_SLOT), DEFAULT_ADMIN_ROLE, &[self.deployer]);
        storage.write_address(U256::from(MESSAGE_PROXY_SLOT), self.message_proxy);
        storage.write_address(U256::from(TOKEN_MANAGER_LINKER_SLOT), self.token_manager_linker);
        storage.write_address(U256::from(COMMUNITY_POOL_SLOT), self.community_pool);
        storage.write_bytes32(U256::from(SCHAIN_HASH_SLOT), self.schain_hash);
        storage.write_uint256(
            U256::from(TIME_LIMIT_PER_MESSAGE_SLOT),
            U256::from(self.time_limit_per_message),
        );
    }
}

use alloy_primitives::{Address, U256};

use crate::config::GeneratorConfig;
use crate::generator::ContractState;
use crate::storage::layout::{ACCESS_CONTROL_PREFIX, ROLES_SLOT};
use crate::storage::{SlotMap, StorageLayout, DEFAULT_ADMIN_ROLE};

// ---------- storage ----------
// 0..100:  Initializable, ContextUpgradeable, AccessControlUpgradeable
// ---------KeyStorage----------
// (no own fields)

/// BLS common public key holder of the schain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStorage {
    pub owner: Address,
}

impl KeyStorage {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self { owner: config.schain_owner }
    }
}

impl ContractState for KeyStorage {
    const ARTIFACT_NAME: &'static str = "KeyStorage";

    const LAYOUT: StorageLayout =
        StorageLayout { contract: "KeyStorage", fields: &ACCESS_CONTROL_PREFIX };

    fn write_storage(&self, storage: &mut SlotMap) {
        storage.grant_role(U256::from(ROLES_SLOT), DEFAULT_ADMIN_ROLE, &[self.owner]);
    }
}

use alloy_primitives::{Address, U256};

use crate::config::GeneratorConfig;
use crate::generator::ContractState;
use crate::storage::{SlotMap, StorageField, StorageLayout};

// ---------- storage ----------
// ----------Ownable------------
// 0:    _owner

pub const OWNER_SLOT: u64 = 0;

/// Admin of every predeployed `TransparentUpgradeableProxy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyAdmin {
    pub owner: Address,
}

impl ProxyAdmin {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self { owner: config.schain_owner }
    }
}

impl ContractState for ProxyAdmin {
    const ARTIFACT_NAME: &'static str = "ProxyAdmin";

    const LAYOUT: StorageLayout = StorageLayout {
        contract: "ProxyAdmin",
        fields: &[StorageField::new("_owner", "Ownable", OWNER_SLOT)],
    };

    fn write_storage(&self, storage: &mut SlotMap) {
        storage.write_address(U256::from(OWNER_SLOT), self.owner);
    }
}

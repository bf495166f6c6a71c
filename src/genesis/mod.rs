//! IMA predeployed genesis accounts.
//!
//! [`generate_contracts`] runs every contract generator against the fixed
//! address table and collects the resulting accounts into a [`GenesisAlloc`].
//! [`merge_into_genesis`] then places them under the allocation key of a base
//! genesis document.

pub mod addresses;
mod assembly;

pub use addresses::{
    AddressTable, ContractName, COMMUNITY_LOCKER_ADDRESS, COMMUNITY_LOCKER_IMPLEMENTATION_ADDRESS,
    KEY_STORAGE_ADDRESS, KEY_STORAGE_IMPLEMENTATION_ADDRESS, MESSAGE_PROXY_FOR_SCHAIN_ADDRESS,
    MESSAGE_PROXY_FOR_SCHAIN_IMPLEMENTATION_ADDRESS, PROXY_ADMIN_ADDRESS,
    TOKEN_MANAGER_ERC20_ADDRESS, TOKEN_MANAGER_ERC721_ADDRESS, TOKEN_MANAGER_ETH_ADDRESS,
    TOKEN_MANAGER_LINKER_ADDRESS, TOKEN_MANAGER_LINKER_IMPLEMENTATION_ADDRESS,
};
pub use assembly::{genesis_to_json, load_base_genesis, merge_into_genesis};

use alloy_genesis::GenesisAccount;
use alloy_primitives::Address;
use reth_tracing::tracing::{debug, info};
use std::collections::BTreeMap;

use crate::artifacts::ArtifactSource;
use crate::config::GeneratorConfig;
use crate::contracts::{
    CommunityLocker, KeyStorage, MessageProxyForSchain, ProxyAdmin, TokenManagerLinker,
};
use crate::errors::GenesisError;
use crate::generator::{ContractGenerator, ContractState, Predeploy, UpgradeableContractGenerator};

/// Artifact of the proxy every upgradeable predeploy sits behind
pub const PROXY_ARTIFACT_NAME: &str = "TransparentUpgradeableProxy";

/// Generated accounts keyed by address, each remembering which contract
/// claimed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenesisAlloc {
    accounts: BTreeMap<Address, GenesisAccount>,
    labels: BTreeMap<Address, String>,
}

impl GenesisAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `account` at `address`. A second claim on the same address is
    /// a configuration error.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        address: Address,
        account: GenesisAccount,
    ) -> Result<(), GenesisError> {
        let label = label.into();
        if let Some(existing) = self.labels.get(&address) {
            return Err(GenesisError::DuplicateAddress {
                address,
                existing: existing.clone(),
                duplicate: label,
            });
        }
        debug!(target: "ima::genesis", %address, contract = %label, "Allocated account");
        self.labels.insert(address, label);
        self.accounts.insert(address, account);
        Ok(())
    }

    /// Insert every account a predeploy yields.
    pub fn add(&mut self, predeploy: impl Predeploy) -> Result<(), GenesisError> {
        let label = predeploy.label();
        for (address, account) in predeploy.into_accounts() {
            self.insert(label.clone(), address, account)?;
        }
        Ok(())
    }

    pub fn get(&self, address: &Address) -> Option<&GenesisAccount> {
        self.accounts.get(address)
    }

    /// Name of the contract that claimed `address`.
    pub fn label(&self, address: &Address) -> Option<&str> {
        self.labels.get(address).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts in address order, with their labels.
    pub fn iter(&self) -> impl Iterator<Item = (Address, &str, &GenesisAccount)> + '_ {
        self.accounts.iter().map(|(address, account)| {
            (*address, self.labels.get(address).map_or("", String::as_str), account)
        })
    }

    pub fn accounts(&self) -> &BTreeMap<Address, GenesisAccount> {
        &self.accounts
    }

    pub fn into_accounts(self) -> BTreeMap<Address, GenesisAccount> {
        self.accounts
    }
}

/// Wrap `contract` in a proxy administered by the ProxyAdmin.
fn upgradeable<C: ContractState>(
    artifacts: &impl ArtifactSource,
    addresses: &AddressTable,
    proxy: ContractName,
    implementation: ContractName,
    contract: &C,
) -> Result<UpgradeableContractGenerator, GenesisError> {
    Ok(UpgradeableContractGenerator::new(
        artifacts.artifact(PROXY_ARTIFACT_NAME)?,
        addresses.get(proxy)?,
        addresses.get(implementation)?,
        addresses.get(ContractName::ProxyAdmin)?,
        ContractGenerator::for_contract(artifacts, contract)?,
    ))
}

/// Generate every IMA predeployed account.
///
/// Produces the ProxyAdmin and, behind proxies it administers,
/// MessageProxyForSchain, KeyStorage, CommunityLocker and TokenManagerLinker
/// together with their implementation accounts. Any error aborts the whole
/// run; no partial table is returned.
pub fn generate_contracts(
    config: &GeneratorConfig,
    artifacts: &impl ArtifactSource,
) -> Result<GenesisAlloc, GenesisError> {
    config.validate()?;
    let addresses = &config.addresses;

    info!(
        target: "ima::genesis",
        owner = %config.schain_owner,
        schain = %config.schain_name,
        "Generating IMA predeployed contracts"
    );

    let proxy_admin = ContractGenerator::for_contract(artifacts, &ProxyAdmin::from_config(config))?
        .at(addresses.get(ContractName::ProxyAdmin)?);

    let message_proxy = upgradeable(
        artifacts,
        addresses,
        ContractName::MessageProxyForSchain,
        ContractName::MessageProxyForSchainImplementation,
        &MessageProxyForSchain::from_config(config)?,
    )?;

    let key_storage = upgradeable(
        artifacts,
        addresses,
        ContractName::KeyStorage,
        ContractName::KeyStorageImplementation,
        &KeyStorage::from_config(config),
    )?;

    let community_locker = upgradeable(
        artifacts,
        addresses,
        ContractName::CommunityLocker,
        ContractName::CommunityLockerImplementation,
        &CommunityLocker::from_config(config)?,
    )?;

    let token_manager_linker = upgradeable(
        artifacts,
        addresses,
        ContractName::TokenManagerLinker,
        ContractName::TokenManagerLinkerImplementation,
        &TokenManagerLinker::from_config(config)?,
    )?;

    let mut alloc = GenesisAlloc::new();
    alloc.add(proxy_admin)?;
    alloc.add(message_proxy)?;
    alloc.add(key_storage)?;
    alloc.add(community_locker)?;
    alloc.add(token_manager_linker)?;

    info!(target: "ima::genesis", accounts = alloc.len(), "Generated predeployed accounts");
    Ok(alloc)
}

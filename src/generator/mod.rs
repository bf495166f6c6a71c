//! Contract generators.
//!
//! A [`ContractGenerator`] pairs an artifact with a [`SlotMap`] and turns into a
//! genesis account exactly once. Concrete contracts describe their initialized
//! state through [`ContractState`]; the orchestrator only sees [`Predeploy`],
//! which both plain and proxied contracts implement.

mod upgradeable;

pub use upgradeable::{UpgradeableContractGenerator, EIP1967_ADMIN_SLOT, EIP1967_IMPLEMENTATION_SLOT};

use alloy_genesis::GenesisAccount;
use alloy_primitives::{Address, U256};
use reth_tracing::tracing::debug;

use crate::artifacts::{Artifact, ArtifactSource};
use crate::errors::GenesisError;
use crate::storage::{SlotMap, StorageLayout};

/// Initialized state of one logical contract.
///
/// Implementors hard-code the slot layout of the reference contract (inherited
/// gaps included) and write the values its initializer would have stored.
pub trait ContractState {
    /// Artifact holding the contract's runtime code and ABI
    const ARTIFACT_NAME: &'static str;

    /// Declared storage layout, base contracts first
    const LAYOUT: StorageLayout;

    /// Write the post-initialization state into `storage`.
    fn write_storage(&self, storage: &mut SlotMap);
}

/// Storage and code of a single contract account.
#[derive(Debug, Clone)]
pub struct ContractGenerator {
    artifact: Artifact,
    storage: SlotMap,
}

impl ContractGenerator {
    /// A code-only account with empty storage (e.g. a proxy implementation).
    pub fn new(artifact: Artifact) -> Self {
        Self { artifact, storage: SlotMap::new() }
    }

    /// A plain account for the artifact named `name`.
    pub fn from_source(artifacts: &impl ArtifactSource, name: &str) -> Result<Self, GenesisError> {
        Ok(Self::new(artifacts.artifact(name)?))
    }

    /// An account holding `contract`'s initialized state.
    pub fn initialized<C: ContractState>(artifact: Artifact, contract: &C) -> Self {
        let mut generator = Self::new(artifact);
        contract.write_storage(&mut generator.storage);
        generator
    }

    /// Like [`ContractGenerator::initialized`], looking the artifact up by
    /// [`ContractState::ARTIFACT_NAME`].
    pub fn for_contract<C: ContractState>(
        artifacts: &impl ArtifactSource,
        contract: &C,
    ) -> Result<Self, GenesisError> {
        Ok(Self::initialized(artifacts.artifact(C::ARTIFACT_NAME)?, contract))
    }

    /// Artifact the account's code comes from.
    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    /// Storage written so far.
    pub fn storage(&self) -> &SlotMap {
        &self.storage
    }

    /// Read a single slot of the pending storage.
    pub fn slot(&self, slot: U256) -> U256 {
        self.storage.get(slot)
    }

    /// Place this account at a fixed address.
    pub fn at(self, address: Address) -> FixedContract {
        FixedContract { address, generator: self }
    }

    /// Turn the generator into its genesis account.
    pub fn finalize(self) -> GenesisAccount {
        debug!(
            target: "ima::generator",
            contract = self.artifact.name(),
            slots = self.storage.len(),
            "Finalizing contract account"
        );
        GenesisAccount {
            balance: U256::ZERO,
            nonce: Some(0),
            code: Some(self.artifact.code().clone()),
            storage: Some(self.storage.into_genesis_storage()),
            private_key: None,
        }
    }

    pub(crate) fn into_parts(self) -> (Artifact, SlotMap) {
        (self.artifact, self.storage)
    }
}

/// Something that yields one or more genesis accounts at fixed addresses.
pub trait Predeploy {
    /// Human readable name, used in diagnostics
    fn label(&self) -> String;

    /// Consume the generator and produce its accounts.
    fn into_accounts(self) -> Vec<(Address, GenesisAccount)>;
}

/// A plain contract placed at a fixed address.
#[derive(Debug, Clone)]
pub struct FixedContract {
    address: Address,
    generator: ContractGenerator,
}

impl FixedContract {
    /// Address the account is placed at.
    pub fn address(&self) -> Address {
        self.address
    }
}

impl Predeploy for FixedContract {
    fn label(&self) -> String {
        self.generator.artifact().name().to_string()
    }

    fn into_accounts(self) -> Vec<(Address, GenesisAccount)> {
        vec![(self.address, self.generator.finalize())]
    }
}

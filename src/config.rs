use alloy_primitives::Address;
use reth_tracing::tracing::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::constants::{DEFAULT_GAS_LIMIT, DEFAULT_TIME_LIMIT_SEC};
use crate::errors::GenesisError;
use crate::genesis::AddressTable;

/// Inputs of a generation run.
///
/// Read from the same JSON file the deployment scripts use (`schain_owner`,
/// `schain_name`, optional mainnet `community_pool`), plus optional address
/// overrides and tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Schain owner: receives every admin role and owns the ProxyAdmin
    pub schain_owner: Address,
    /// Schain name, hashed into `schainHash`
    pub schain_name: String,
    /// CommunityPool contract on mainnet
    #[serde(default)]
    pub community_pool: Address,
    /// Predeployed address overrides on top of the canonical table
    #[serde(default)]
    pub addresses: AddressTable,
    /// MessageProxyForSchain `gasLimit`
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
    /// CommunityLocker `timeLimitPerMessage` in seconds
    #[serde(default = "default_time_limit")]
    pub time_limit_per_message: u64,
    /// Keys this generator does not use, such as the deposit box and `linker`
    /// entries of a full deployment config
    #[serde(flatten)]
    pub ignored: BTreeMap<String, serde_json::Value>,
}

fn default_gas_limit() -> u64 {
    DEFAULT_GAS_LIMIT
}

fn default_time_limit() -> u64 {
    DEFAULT_TIME_LIMIT_SEC
}

impl GeneratorConfig {
    /// Configuration with canonical addresses and default tunables.
    pub fn new(schain_owner: Address, schain_name: impl Into<String>) -> Self {
        Self {
            schain_owner,
            schain_name: schain_name.into(),
            community_pool: Address::ZERO,
            addresses: AddressTable::canonical(),
            gas_limit: DEFAULT_GAS_LIMIT,
            time_limit_per_message: DEFAULT_TIME_LIMIT_SEC,
            ignored: BTreeMap::new(),
        }
    }

    /// Load and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, GenesisError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| GenesisError::ConfigIo { path: path.to_path_buf(), source })?;
        Self::from_json(&json)
    }

    /// Parse and validate a configuration document. Unknown keys are kept in
    /// [`GeneratorConfig::ignored`] and logged.
    pub fn from_json(json: &str) -> Result<Self, GenesisError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GenesisError::InvalidConfig(e.to_string()))?;
        for key in config.ignored_keys() {
            debug!(target: "ima::config", key, "Ignoring unsupported config key");
        }
        config.validate()?;
        Ok(config)
    }

    /// Names of the config keys no generator reads.
    pub fn ignored_keys(&self) -> impl Iterator<Item = &str> {
        self.ignored.keys().map(String::as_str)
    }

    /// Reject configurations that would produce unusable contracts.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.schain_owner.is_zero() {
            return Err(GenesisError::InvalidConfig("schain_owner must not be zero".into()));
        }
        if self.schain_name.is_empty() {
            return Err(GenesisError::InvalidConfig("schain_name must not be empty".into()));
        }
        Ok(())
    }

    /// Builder method to set the mainnet community pool
    pub fn with_community_pool(mut self, community_pool: Address) -> Self {
        self.community_pool = community_pool;
        self
    }

    /// Builder method to set the address table
    pub fn with_addresses(mut self, addresses: AddressTable) -> Self {
        self.addresses = addresses;
        self
    }

    /// Builder method to set the message proxy gas limit
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Builder method to set the community locker time limit
    pub fn with_time_limit_per_message(mut self, seconds: u64) -> Self {
        self.time_limit_per_message = seconds;
        self
    }
}

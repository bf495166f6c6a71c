use alloy_genesis::GenesisAccount;
use alloy_primitives::{b256, Address, B256, U256};
use reth_tracing::tracing::debug;

use super::{ContractGenerator, Predeploy};
use crate::artifacts::Artifact;

/// EIP-1967 implementation slot: `keccak256("eip1967.proxy.implementation") - 1`
pub const EIP1967_IMPLEMENTATION_SLOT: B256 =
    b256!("360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");

/// EIP-1967 admin slot: `keccak256("eip1967.proxy.admin") - 1`
pub const EIP1967_ADMIN_SLOT: B256 =
    b256!("b53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103");

/// A contract behind a `TransparentUpgradeableProxy`.
///
/// Yields two accounts:
/// - the implementation: logic code, empty storage (never called directly)
/// - the proxy: proxy code, the wrapped contract's storage, and the EIP-1967
///   implementation and admin slots
///
/// The EIP-1967 slots are hashes, far outside any sequential field range, so
/// delegated calls see the wrapped contract's layout untouched.
#[derive(Debug, Clone)]
pub struct UpgradeableContractGenerator {
    proxy_address: Address,
    implementation_address: Address,
    proxy: ContractGenerator,
    implementation: ContractGenerator,
}

impl UpgradeableContractGenerator {
    /// Wrap `inner` in a proxy at `proxy_address` administered by `admin_address`.
    pub fn new(
        proxy_artifact: Artifact,
        proxy_address: Address,
        implementation_address: Address,
        admin_address: Address,
        inner: ContractGenerator,
    ) -> Self {
        let (logic_artifact, inner_storage) = inner.into_parts();

        let mut proxy = ContractGenerator::new(proxy_artifact);
        proxy.storage.extend(inner_storage);
        proxy.storage.write_address(
            U256::from_be_bytes(EIP1967_IMPLEMENTATION_SLOT.0),
            implementation_address,
        );
        proxy.storage.write_address(U256::from_be_bytes(EIP1967_ADMIN_SLOT.0), admin_address);

        Self {
            proxy_address,
            implementation_address,
            proxy,
            implementation: ContractGenerator::new(logic_artifact),
        }
    }

    /// Address of the proxy account.
    pub fn proxy_address(&self) -> Address {
        self.proxy_address
    }

    /// Address of the implementation account.
    pub fn implementation_address(&self) -> Address {
        self.implementation_address
    }

    /// Pending proxy storage (wrapped state plus EIP-1967 slots).
    pub fn proxy(&self) -> &ContractGenerator {
        &self.proxy
    }
}

impl Predeploy for UpgradeableContractGenerator {
    fn label(&self) -> String {
        self.implementation.artifact().name().to_string()
    }

    fn into_accounts(self) -> Vec<(Address, GenesisAccount)> {
        debug!(
            target: "ima::generator",
            contract = self.implementation.artifact().name(),
            proxy = %self.proxy_address,
            implementation = %self.implementation_address,
            "Generating upgradeable contract"
        );
        vec![
            (self.proxy_address, self.proxy.finalize()),
            (self.implementation_address, self.implementation.finalize()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::tests::test_artifact;
    use crate::storage::{decode_address, slot_key};
    use alloy_primitives::{address, keccak256};

    const PROXY: Address = address!("d2aaa00100000000000000000000000000000000");
    const IMPLEMENTATION: Address = address!("d2aaa00100000000000000000000000000000001");
    const ADMIN: Address = address!("d2aaa00000000000000000000000000000000000");

    fn wrapped() -> UpgradeableContractGenerator {
        let mut inner = ContractGenerator::new(test_artifact("KeyStorage"));
        inner.storage.write_uint256(U256::from(101), U256::from(77));
        UpgradeableContractGenerator::new(
            test_artifact("TransparentUpgradeableProxy"),
            PROXY,
            IMPLEMENTATION,
            ADMIN,
            inner,
        )
    }

    #[test]
    fn test_eip1967_slots_are_hash_minus_one() {
        let implementation = U256::from_be_bytes(keccak256("eip1967.proxy.implementation").0) - U256::from(1);
        let admin = U256::from_be_bytes(keccak256("eip1967.proxy.admin").0) - U256::from(1);
        assert_eq!(slot_key(implementation), EIP1967_IMPLEMENTATION_SLOT);
        assert_eq!(slot_key(admin), EIP1967_ADMIN_SLOT);
    }

    #[test]
    fn test_produces_proxy_and_implementation() {
        let accounts = wrapped().into_accounts();
        assert_eq!(accounts.len(), 2);

        let (proxy_address, proxy) = &accounts[0];
        assert_eq!(*proxy_address, PROXY);
        assert_eq!(&proxy.code.clone().unwrap()[..], b"TransparentUpgradeableProxy");

        let (implementation_address, implementation) = &accounts[1];
        assert_eq!(*implementation_address, IMPLEMENTATION);
        assert_eq!(&implementation.code.clone().unwrap()[..], b"KeyStorage");
        assert!(implementation.storage.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_proxy_storage_is_transparent() {
        let accounts = wrapped().into_accounts();
        let storage = accounts[0].1.storage.clone().unwrap();

        assert_eq!(
            storage.get(&slot_key(U256::from(101))),
            Some(&B256::from(U256::from(77).to_be_bytes()))
        );
        assert_eq!(decode_address(storage[&EIP1967_IMPLEMENTATION_SLOT]), IMPLEMENTATION);
        assert_eq!(decode_address(storage[&EIP1967_ADMIN_SLOT]), ADMIN);
        assert_eq!(storage.len(), 3);
    }

    #[test]
    fn test_label_is_logic_contract() {
        assert_eq!(wrapped().label(), "KeyStorage");
        assert_eq!(wrapped().proxy_address(), PROXY);
        assert_eq!(wrapped().implementation_address(), IMPLEMENTATION);
    }
}

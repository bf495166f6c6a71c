//! AccessControl role registry encoding.
//!
//! `_roles` is a `mapping(bytes32 => RoleData)`. Inside the per-role region:
//!   - region + 0: `mapping(address => bool) members`
//!   - region + 1: enumerable set `_values` (`address[]`)
//!   - region + 2: enumerable set `_indexes` (`mapping(address => uint256)`, 1-based)

use alloy_primitives::{keccak256, Address, B256, U256};

use super::slots::{dynamic_array_base_slot, mapping_address_slot, mapping_value_slot};
use super::SlotMap;

/// 32-byte role identifier.
pub type RoleId = B256;

/// `DEFAULT_ADMIN_ROLE` is the literal zero word, not a hash.
pub const DEFAULT_ADMIN_ROLE: RoleId = B256::ZERO;

const MEMBERSHIP_OFFSET: u64 = 0;
const VALUES_OFFSET: u64 = 1;
const INDEXES_OFFSET: u64 = 2;

/// Role id of a named role: `keccak256("REGISTRAR_ROLE")`.
pub fn role_id(name: &str) -> RoleId {
    keccak256(name.as_bytes())
}

/// First slot of the `RoleData` region of `role`.
pub fn role_region_slot(roles_slot: U256, role: RoleId) -> U256 {
    mapping_value_slot(role, roles_slot)
}

/// Slot of the membership flag of `account` under `role`.
pub fn role_membership_slot(roles_slot: U256, role: RoleId, account: Address) -> U256 {
    let region = role_region_slot(roles_slot, role);
    mapping_address_slot(account, region + U256::from(MEMBERSHIP_OFFSET))
}

/// Length slot of the enumerable member array of `role`.
pub fn role_members_slot(roles_slot: U256, role: RoleId) -> U256 {
    role_region_slot(roles_slot, role) + U256::from(VALUES_OFFSET)
}

/// Slot of the `index`-th enumerable member of `role`.
pub fn role_member_slot(roles_slot: U256, role: RoleId, index: usize) -> U256 {
    dynamic_array_base_slot(role_members_slot(roles_slot, role)) + U256::from(index)
}

/// Slot of the 1-based position of `account` in the member array of `role`.
pub fn role_member_index_slot(roles_slot: U256, role: RoleId, account: Address) -> U256 {
    let region = role_region_slot(roles_slot, role);
    mapping_address_slot(account, region + U256::from(INDEXES_OFFSET))
}

impl SlotMap {
    /// Grant `role` to `members`, in order, as `_setupRole` would have.
    ///
    /// `members` must not contain duplicates: the index entries would be
    /// overwritten and enumeration would disagree with membership.
    pub fn grant_role(&mut self, roles_slot: U256, role: RoleId, members: &[Address]) {
        self.write_addresses_array(role_members_slot(roles_slot, role), members);
        for (position, member) in members.iter().enumerate() {
            self.write_uint256(
                role_member_index_slot(roles_slot, role, *member),
                U256::from(position + 1),
            );
            self.write_bool(role_membership_slot(roles_slot, role, *member), true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{decode_address, encode_address};
    use alloy_primitives::{address, b256};

    const ROLES: U256 = U256::from_limbs([51, 0, 0, 0]);
    const DEPLOYER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    const SECOND: Address = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");
    const OUTSIDER: Address = address!("3c44cdddb6a900fa2b585dd299e03d12fa4293bc");

    fn member_at(map: &SlotMap, role: RoleId, index: usize) -> Address {
        decode_address(B256::from(map.get(role_member_slot(ROLES, role, index)).to_be_bytes()))
    }

    #[test]
    fn test_role_id_hashes_name() {
        assert_eq!(
            role_id("REGISTRAR_ROLE"),
            keccak256(b"REGISTRAR_ROLE")
        );
        assert_ne!(role_id("REGISTRAR_ROLE"), DEFAULT_ADMIN_ROLE);
    }

    #[test]
    fn test_default_admin_is_zero_word() {
        assert_eq!(
            DEFAULT_ADMIN_ROLE,
            b256!("0000000000000000000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn test_region_follows_mapping_law() {
        let role = role_id("REGISTRAR_ROLE");
        let mut preimage = [0u8; 64];
        preimage[..32].copy_from_slice(role.as_slice());
        preimage[32..].copy_from_slice(&ROLES.to_be_bytes::<32>());
        assert_eq!(role_region_slot(ROLES, role), U256::from_be_bytes(keccak256(preimage).0));
    }

    #[test]
    fn test_region_changes_with_role_and_base() {
        let registrar = role_id("REGISTRAR_ROLE");
        let admin_region = role_region_slot(ROLES, DEFAULT_ADMIN_ROLE);
        assert_ne!(admin_region, role_region_slot(ROLES, registrar));
        assert_ne!(admin_region, role_region_slot(U256::from(52), DEFAULT_ADMIN_ROLE));
    }

    #[test]
    fn test_grant_role_roundtrip() {
        let role = role_id("CHAIN_CONNECTOR_ROLE");
        let mut map = SlotMap::new();
        map.grant_role(ROLES, role, &[DEPLOYER, SECOND]);

        assert_eq!(map.get(role_membership_slot(ROLES, role, DEPLOYER)), U256::from(1));
        assert_eq!(map.get(role_membership_slot(ROLES, role, SECOND)), U256::from(1));
        assert_eq!(map.get(role_membership_slot(ROLES, role, OUTSIDER)), U256::ZERO);

        assert_eq!(map.get(role_members_slot(ROLES, role)), U256::from(2));
        assert_eq!(member_at(&map, role, 0), DEPLOYER);
        assert_eq!(member_at(&map, role, 1), SECOND);
    }

    #[test]
    fn test_grant_role_index_entries_are_one_based() {
        let mut map = SlotMap::new();
        map.grant_role(ROLES, DEFAULT_ADMIN_ROLE, &[DEPLOYER, SECOND]);
        assert_eq!(map.get(role_member_index_slot(ROLES, DEFAULT_ADMIN_ROLE, DEPLOYER)), U256::from(1));
        assert_eq!(map.get(role_member_index_slot(ROLES, DEFAULT_ADMIN_ROLE, SECOND)), U256::from(2));
        assert_eq!(map.get(role_member_index_slot(ROLES, DEFAULT_ADMIN_ROLE, OUTSIDER)), U256::ZERO);
    }

    #[test]
    fn test_grant_role_writes_expected_slot_count() {
        // length + 2 elements + 2 index entries + 2 membership flags
        let mut map = SlotMap::new();
        map.grant_role(ROLES, DEFAULT_ADMIN_ROLE, &[DEPLOYER, SECOND]);
        assert_eq!(map.len(), 7);
    }

    #[test]
    fn test_membership_slot_layout() {
        let region = role_region_slot(ROLES, DEFAULT_ADMIN_ROLE);
        assert_eq!(
            role_membership_slot(ROLES, DEFAULT_ADMIN_ROLE, DEPLOYER),
            mapping_value_slot(encode_address(DEPLOYER), region)
        );
        assert_eq!(role_members_slot(ROLES, DEFAULT_ADMIN_ROLE), region + U256::from(1));
        assert_eq!(
            role_member_index_slot(ROLES, DEFAULT_ADMIN_ROLE, DEPLOYER),
            mapping_value_slot(encode_address(DEPLOYER), region + U256::from(2))
        );
    }

    #[test]
    fn test_two_roles_do_not_share_slots() {
        let registrar = role_id("REGISTRAR_ROLE");
        let mut admin = SlotMap::new();
        admin.grant_role(ROLES, DEFAULT_ADMIN_ROLE, &[DEPLOYER]);
        let mut both = admin.clone();
        both.grant_role(ROLES, registrar, &[DEPLOYER]);
        assert_eq!(both.len(), admin.len() * 2);
    }
}

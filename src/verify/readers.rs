use alloy_primitives::{Address, B256, U256};

use super::StorageReader;
use crate::storage::roles::{role_member_slot, role_members_slot, role_membership_slot};
use crate::storage::{decode_address, dynamic_array_base_slot, RoleId};

/// Raw word at `slot`; unset storage reads as zero.
pub fn read_bytes32(reader: &impl StorageReader, address: Address, slot: U256) -> B256 {
    reader.read_storage(address, slot).unwrap_or(B256::ZERO)
}

/// Word at `slot` as an unsigned integer.
pub fn read_uint(reader: &impl StorageReader, address: Address, slot: U256) -> U256 {
    U256::from_be_bytes(read_bytes32(reader, address, slot).0)
}

/// Address held in the low 20 bytes of `slot`.
pub fn read_address(reader: &impl StorageReader, address: Address, slot: U256) -> Address {
    decode_address(read_bytes32(reader, address, slot))
}

pub fn read_bool(reader: &impl StorageReader, address: Address, slot: U256) -> bool {
    !read_uint(reader, address, slot).is_zero()
}

/// Longest `address[]` [`read_address_array`] will walk.
pub const MAX_ARRAY_LENGTH: u64 = 1024;

/// All elements of an `address[]` declared at `slot`, or `None` if the stored
/// length exceeds [`MAX_ARRAY_LENGTH`].
pub fn read_address_array(
    reader: &impl StorageReader,
    address: Address,
    slot: U256,
) -> Option<Vec<Address>> {
    let length = read_uint(reader, address, slot);
    if length > U256::from(MAX_ARRAY_LENGTH) {
        return None;
    }
    let base = dynamic_array_base_slot(slot);
    let length: u64 = length.to();
    Some((0..length).map(|i| read_address(reader, address, base + U256::from(i))).collect())
}

/// `hasRole(role, account)`
pub fn has_role(
    reader: &impl StorageReader,
    contract: Address,
    roles_slot: U256,
    role: RoleId,
    account: Address,
) -> bool {
    read_bool(reader, contract, role_membership_slot(roles_slot, role, account))
}

/// `getRoleMemberCount(role)`
pub fn get_role_member_count(
    reader: &impl StorageReader,
    contract: Address,
    roles_slot: U256,
    role: RoleId,
) -> usize {
    read_uint(reader, contract, role_members_slot(roles_slot, role)).saturating_to()
}

/// `getRoleMember(role, index)`, or `None` past the end of the member list.
pub fn get_role_member(
    reader: &impl StorageReader,
    contract: Address,
    roles_slot: U256,
    role: RoleId,
    index: usize,
) -> Option<Address> {
    if index >= get_role_member_count(reader, contract, roles_slot, role) {
        return None;
    }
    Some(read_address(reader, contract, role_member_slot(roles_slot, role, index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{role_id, SlotMap, DEFAULT_ADMIN_ROLE};
    use crate::verify::tests::MockStorage;
    use alloy_primitives::address;

    const CONTRACT: Address = address!("d2aaa00800000000000000000000000000000000");
    const ALICE: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    const BOB: Address = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");
    const CAROL: Address = address!("3c44cdddb6a900fa2b585dd299e03d12fa4293bc");
    const ROLES: u64 = 51;

    fn reader_with_roles() -> MockStorage {
        let mut slots = SlotMap::new();
        slots.grant_role(U256::from(ROLES), DEFAULT_ADMIN_ROLE, &[ALICE, BOB]);
        slots.grant_role(U256::from(ROLES), role_id("REGISTRAR_ROLE"), &[CAROL]);
        MockStorage::from_slots(CONTRACT, slots)
    }

    #[test]
    fn test_role_membership() {
        let reader = reader_with_roles();
        let roles = U256::from(ROLES);
        assert!(has_role(&reader, CONTRACT, roles, DEFAULT_ADMIN_ROLE, ALICE));
        assert!(has_role(&reader, CONTRACT, roles, DEFAULT_ADMIN_ROLE, BOB));
        assert!(!has_role(&reader, CONTRACT, roles, DEFAULT_ADMIN_ROLE, CAROL));
        assert!(has_role(&reader, CONTRACT, roles, role_id("REGISTRAR_ROLE"), CAROL));
        assert!(!has_role(&reader, CONTRACT, roles, role_id("REGISTRAR_ROLE"), ALICE));
    }

    #[test]
    fn test_role_enumeration_keeps_order() {
        let reader = reader_with_roles();
        let roles = U256::from(ROLES);
        assert_eq!(get_role_member_count(&reader, CONTRACT, roles, DEFAULT_ADMIN_ROLE), 2);
        assert_eq!(get_role_member(&reader, CONTRACT, roles, DEFAULT_ADMIN_ROLE, 0), Some(ALICE));
        assert_eq!(get_role_member(&reader, CONTRACT, roles, DEFAULT_ADMIN_ROLE, 1), Some(BOB));
        assert_eq!(get_role_member(&reader, CONTRACT, roles, DEFAULT_ADMIN_ROLE, 2), None);
    }

    #[test]
    fn test_unknown_role_is_empty() {
        let reader = reader_with_roles();
        let roles = U256::from(ROLES);
        let role = role_id("UNKNOWN_ROLE");
        assert_eq!(get_role_member_count(&reader, CONTRACT, roles, role), 0);
        assert_eq!(get_role_member(&reader, CONTRACT, roles, role, 0), None);
    }

    #[test]
    fn test_wrong_roles_slot_sees_nothing() {
        let reader = reader_with_roles();
        assert!(!has_role(&reader, CONTRACT, U256::from(ROLES + 1), DEFAULT_ADMIN_ROLE, ALICE));
    }

    #[test]
    fn test_scalar_reads() {
        let mut slots = SlotMap::new();
        slots.write_address(U256::from(101), ALICE);
        slots.write_uint256(U256::from(105), U256::from(300));
        slots.write_bool(U256::from(106), true);
        let reader = MockStorage::from_slots(CONTRACT, slots);

        assert_eq!(read_address(&reader, CONTRACT, U256::from(101)), ALICE);
        assert_eq!(read_uint(&reader, CONTRACT, U256::from(105)), U256::from(300));
        assert!(read_bool(&reader, CONTRACT, U256::from(106)));
        assert!(!read_bool(&reader, CONTRACT, U256::from(107)));
        assert_eq!(read_bytes32(&reader, CONTRACT, U256::from(107)), B256::ZERO);
    }

    #[test]
    fn test_address_array() {
        let mut slots = SlotMap::new();
        slots.write_addresses_array(U256::from(102), &[ALICE, BOB, CAROL]);
        let reader = MockStorage::from_slots(CONTRACT, slots);
        assert_eq!(
            read_address_array(&reader, CONTRACT, U256::from(102)),
            Some(vec![ALICE, BOB, CAROL])
        );
        assert_eq!(read_address_array(&reader, CONTRACT, U256::from(103)), Some(vec![]));
    }

    #[test]
    fn test_address_array_rejects_oversized_length() {
        let mut slots = SlotMap::new();
        slots.write_uint256(U256::from(102), U256::MAX);
        slots.write_uint256(U256::from(103), U256::from(MAX_ARRAY_LENGTH + 1));
        slots.write_uint256(U256::from(104), U256::from(MAX_ARRAY_LENGTH));
        let reader = MockStorage::from_slots(CONTRACT, slots);

        assert_eq!(read_address_array(&reader, CONTRACT, U256::from(102)), None);
        assert_eq!(read_address_array(&reader, CONTRACT, U256::from(103)), None);
        let unset = read_address_array(&reader, CONTRACT, U256::from(104)).unwrap();
        assert_eq!(unset.len(), MAX_ARRAY_LENGTH as usize);
        assert!(unset.iter().all(|member| member.is_zero()));
    }
}

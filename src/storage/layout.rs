use alloy_primitives::U256;

/// Slot directly after `occupied_slot`.
///
/// Layouts are spelled out in declaration order; `next_slot` is only sugar
/// for "the field declared right after this one-slot field".
pub const fn next_slot(occupied_slot: u64) -> u64 {
    occupied_slot + 1
}

/// One declared storage variable (or reserved gap) of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageField {
    /// Solidity variable name
    pub name: &'static str,
    /// Contract that declares the variable (base contracts included)
    pub origin: &'static str,
    /// First slot occupied
    pub slot: u64,
    /// Number of consecutive slots occupied (50 for `uint256[50] __gap`)
    pub span: u64,
}

impl StorageField {
    /// A single-slot field.
    pub const fn new(name: &'static str, origin: &'static str, slot: u64) -> Self {
        Self { name, origin, slot, span: 1 }
    }

    /// A reserved `__gap` array spanning `span` slots.
    pub const fn gap(origin: &'static str, slot: u64, span: u64) -> Self {
        Self { name: "__gap", origin, slot, span }
    }

    /// First slot as a storage index.
    pub const fn index(&self) -> U256 {
        U256::from_limbs([self.slot, 0, 0, 0])
    }

    /// First slot after this field.
    pub const fn end(&self) -> u64 {
        self.slot + self.span
    }

    /// Whether the field is padding reserved for future base-contract fields.
    pub fn is_gap(&self) -> bool {
        self.name == "__gap"
    }
}

/// The storage layout of one logical contract, in declaration order.
///
/// This is the single place where a contract's slot numbering lives. When the
/// reference contract changes, only its table changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageLayout {
    /// Contract name
    pub contract: &'static str,
    /// Fields, base contracts first
    pub fields: &'static [StorageField],
}

impl StorageLayout {
    /// Look up a field by name, skipping gaps.
    pub fn field(&self, name: &str) -> Option<&StorageField> {
        self.fields.iter().find(|f| !f.is_gap() && f.name == name)
    }

    /// Number of slots the declared fields occupy.
    pub fn slot_count(&self) -> u64 {
        self.fields.last().map(StorageField::end).unwrap_or(0)
    }

    /// Whether fields start at slot 0 and follow each other with no hole or
    /// overlap.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 0;
        for field in self.fields {
            if field.slot != expected {
                return false;
            }
            expected = field.end();
        }
        true
    }

    /// Whether `slot` lies inside the declared field range.
    pub fn contains_slot(&self, slot: U256) -> bool {
        slot < U256::from(self.slot_count())
    }
}

/// Fields every `AccessControlUpgradeable` contract inherits:
/// `Initializable`, `ContextUpgradeable`'s gap, `_roles` and its gap.
pub const ACCESS_CONTROL_PREFIX: [StorageField; 4] = [
    StorageField::new("_initialized", "Initializable", 0),
    StorageField::gap("ContextUpgradeable", 1, 50),
    StorageField::new("_roles", "AccessControlUpgradeable", 51),
    StorageField::gap("AccessControlUpgradeable", 52, 49),
];

/// `_roles` slot of every `AccessControlUpgradeable` contract.
pub const ROLES_SLOT: u64 = ACCESS_CONTROL_PREFIX[2].slot;

/// First slot available to a contract deriving from `AccessControlUpgradeable`.
pub const ACCESS_CONTROL_END: u64 = ACCESS_CONTROL_PREFIX[3].slot + ACCESS_CONTROL_PREFIX[3].span;

//! IEEE 802.1Q VLAN id bounds.
//!
//! VLAN 0 and 4095 are reserved. VLAN ids carried in attribute values and
//! VLAN lists returned by the switch are range-checked against these bounds.
//!
//! # Examples
//!
//! ```
//! use sonic_types::is_valid_vlan_id;
//!
//! assert!(is_valid_vlan_id(100));
//! assert!(!is_valid_vlan_id(0));
//! assert!(!is_valid_vlan_id(4095));
//! ```

/// Minimum valid VLAN id.
pub const VLAN_ID_MIN: u16 = 1;

/// Maximum valid VLAN id.
pub const VLAN_ID_MAX: u16 = 4094;

/// Returns true if `id` is a usable VLAN number.
pub const fn is_valid_vlan_id(id: u16) -> bool {
    id >= VLAN_ID_MIN && id <= VLAN_ID_MAX
}

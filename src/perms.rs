//! Permission bitmasks.
//!
//! An employee's permission value is a small bitfield. The named masks below
//! cover the three roles the application knows about; `has_permission` on
//! [`crate::employee::Employee`] is an any-bit-set test, so holding any one
//! of the HR bits grants the HR actions.
//!
//! Bit layout, low to high: view own record, view all / search, modify,
//! create, delete.

/// View own record.
pub const GENERAL: u16 = 1;
/// View all employees and search.
pub const MANAGEMENT: u16 = 2;
/// Modify, create, and delete employees (bits 2-4).
pub const HR: u16 = 28;
/// Everything.
pub const ALL: u16 = HR | MANAGEMENT | GENERAL;

/// Build the mask for a created or edited employee from the two yes/no role
/// answers. Everyone always carries GENERAL.
pub fn compose(is_hr: bool, is_management: bool) -> u16 {
    (HR * is_hr as u16) | (MANAGEMENT * is_management as u16) | GENERAL
}

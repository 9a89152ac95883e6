//! Staffdesk - a terminal employee-record manager.
//!
//! Single-process and fully synchronous: a flat-file record store, a
//! bitmask permission model, and a stack of interactive screens navigated
//! by nested display calls.

pub mod app;
pub mod audit;
pub mod employee;
pub mod input;
pub mod perms;
pub mod screens;
pub mod store;

#[cfg(test)]
pub mod test_utils;

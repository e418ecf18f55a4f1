//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by domain: the read-only master catalog, the allocation store
//! shared by both modes, and the settings table.

pub mod allocation;
pub mod master_shop;
pub mod setting;

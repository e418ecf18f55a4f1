//! Business logic services.
//!
//! Services coordinate between repositories and enforce the domain rules:
//! cap-bounded token allocation, planning-to-real synchronization, report
//! aggregation, and settings management.

pub mod allocation;
pub mod report;
pub mod settings;

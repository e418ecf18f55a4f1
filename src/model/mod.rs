//! API data transfer objects shared by the HTTP surface.

pub mod allocation;
pub mod api;
pub mod catalog;
pub mod report;
pub mod settings;

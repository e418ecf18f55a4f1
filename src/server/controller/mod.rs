pub mod allocation;
pub mod catalog;
pub mod health;
pub mod report;
pub mod settings;
pub mod util;

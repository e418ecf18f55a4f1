pub mod allocation_shop;
pub mod master_shop;
pub mod prelude;
pub mod setting;

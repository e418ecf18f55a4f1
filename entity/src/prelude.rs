pub use super::allocation_shop::Entity as AllocationShop;
pub use super::master_shop::Entity as MasterShop;
pub use super::setting::Entity as Setting;

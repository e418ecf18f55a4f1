use sea_orm::DatabaseConnection;

use crate::server::{
    data::{allocation::AllocationRepository, setting::SettingRepository},
    error::{allocation::AllocationError, Error},
    service::allocation::quota,
};

pub static TOKEN_CAP_KEY: &str = "token_cap";
pub const DEFAULT_TOKEN_CAP: i32 = 200;

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    /// Creates a new instance of [`SettingsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the token cap, falling back to the default when unset
    pub async fn get_cap(&self) -> Result<i32, Error> {
        let repository = SettingRepository::new(self.db);

        Ok(repository
            .get(TOKEN_CAP_KEY)
            .await?
            .unwrap_or(DEFAULT_TOKEN_CAP))
    }

    /// Writes default settings for any key not yet present, run once at
    /// startup
    pub async fn ensure_defaults(&self) -> Result<(), Error> {
        let repository = SettingRepository::new(self.db);

        repository.ensure(TOKEN_CAP_KEY, DEFAULT_TOKEN_CAP).await?;

        Ok(())
    }

    /// Updates the token cap.
    ///
    /// Rejects negative values and any cap below the currently allocated
    /// total. Both modes share the cap, so the check runs against whichever
    /// mode has allocated more.
    pub async fn set_cap(&self, new_cap: i32) -> Result<i32, Error> {
        if new_cap < 0 {
            return Err(
                AllocationError::Validation("Token cap cannot be negative".to_string()).into(),
            );
        }

        let repository = AllocationRepository::new(self.db);

        let mut allocated: i64 = 0;
        for mode in [
            entity::allocation_shop::AllocationMode::Planning,
            entity::allocation_shop::AllocationMode::Real,
        ] {
            let shops = repository.list(mode, None, None).await?;
            let total = shops.iter().map(quota::counted_quantity).sum();

            allocated = allocated.max(total);
        }

        if i64::from(new_cap) < allocated {
            return Err(AllocationError::InvalidCap {
                requested: new_cap,
                allocated,
            }
            .into());
        }

        SettingRepository::new(self.db)
            .set(TOKEN_CAP_KEY, new_cap)
            .await?;

        Ok(new_cap)
    }
}

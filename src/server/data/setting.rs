use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    /// Creates a new instance of [`SettingRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads a setting value by key
    pub async fn get(&self, key: &str) -> Result<Option<i32>, DbErr> {
        let setting = entity::prelude::Setting::find()
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(setting.map(|setting| setting.value))
    }

    /// Upserts a setting value
    pub async fn set(&self, key: &str, value: i32) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        let existing = entity::prelude::Setting::find()
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.db)
            .await?;

        match existing {
            Some(setting) => {
                let mut active: entity::setting::ActiveModel = setting.into();
                active.value = ActiveValue::Set(value);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?;
            }
            None => {
                entity::setting::ActiveModel {
                    key: ActiveValue::Set(key.to_string()),
                    value: ActiveValue::Set(value),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Writes a default value only when the key is absent
    pub async fn ensure(&self, key: &str, default: i32) -> Result<i32, DbErr> {
        match self.get(key).await? {
            Some(value) => Ok(value),
            None => {
                self.set(key, default).await?;
                Ok(default)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseConnection, DbErr};

    use crate::server::util::test::setup::{create_tables, test_setup};

    use super::SettingRepository;

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.state.db;
        create_tables(&db).await?;

        Ok(db)
    }

    /// Expect set to insert then overwrite a value
    #[tokio::test]
    async fn test_set_and_get() -> Result<(), DbErr> {
        let db = setup().await?;
        let repository = SettingRepository::new(&db);

        assert_eq!(repository.get("token_cap").await?, None);

        repository.set("token_cap", 200).await?;
        assert_eq!(repository.get("token_cap").await?, Some(200));

        repository.set("token_cap", 150).await?;
        assert_eq!(repository.get("token_cap").await?, Some(150));

        Ok(())
    }

    /// Expect ensure to keep an already stored value
    #[tokio::test]
    async fn test_ensure_keeps_existing() -> Result<(), DbErr> {
        let db = setup().await?;
        let repository = SettingRepository::new(&db);

        repository.set("token_cap", 120).await?;

        let value = repository.ensure("token_cap", 200).await?;
        assert_eq!(value, 120);

        let fresh = repository.ensure("other", 7).await?;
        assert_eq!(fresh, 7);

        Ok(())
    }
}

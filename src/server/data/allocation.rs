use chrono::Utc;
use entity::allocation_shop::AllocationMode;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

/// Field set for inserting an allocation record. Quantities are assumed to
/// be already clamped by the service layer.
#[derive(Debug, Clone)]
pub struct NewAllocation {
    pub name: String,
    pub gazette_code: Option<String>,
    pub district: Option<String>,
    pub station: Option<String>,
    pub category: Option<String>,
    pub tokens: i32,
    pub expected_tokens: i32,
    pub avg_sale: String,
    pub total_tokens: i32,
    pub allocated_tokens: String,
}

/// Partial update for an allocation record; `None` fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct AllocationUpdate {
    pub name: Option<String>,
    pub gazette_code: Option<Option<String>>,
    pub district: Option<Option<String>>,
    pub station: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub tokens: Option<i32>,
    pub expected_tokens: Option<i32>,
    pub avg_sale: Option<String>,
    pub total_tokens: Option<i32>,
    pub allocated_tokens: Option<String>,
}

pub struct AllocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllocationRepository<'a> {
    /// Creates a new instance of [`AllocationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists records for one mode in insertion order, optionally filtered by
    /// district and station
    pub async fn list(
        &self,
        mode: AllocationMode,
        district: Option<&str>,
        station: Option<&str>,
    ) -> Result<Vec<entity::allocation_shop::Model>, DbErr> {
        let mut query = entity::prelude::AllocationShop::find()
            .filter(entity::allocation_shop::Column::Mode.eq(mode));

        if let Some(district) = district {
            query = query.filter(entity::allocation_shop::Column::District.eq(district));
        }

        if let Some(station) = station {
            query = query.filter(entity::allocation_shop::Column::Station.eq(station));
        }

        query
            .order_by_asc(entity::allocation_shop::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a record by id regardless of mode
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::allocation_shop::Model>, DbErr> {
        entity::prelude::AllocationShop::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds a record in one mode by its gazette code
    pub async fn find_by_code(
        &self,
        mode: AllocationMode,
        gazette_code: &str,
    ) -> Result<Option<entity::allocation_shop::Model>, DbErr> {
        entity::prelude::AllocationShop::find()
            .filter(entity::allocation_shop::Column::Mode.eq(mode))
            .filter(entity::allocation_shop::Column::GazetteCode.eq(gazette_code))
            .one(self.db)
            .await
    }

    /// Inserts a record into one mode
    pub async fn create(
        &self,
        mode: AllocationMode,
        shop: NewAllocation,
    ) -> Result<entity::allocation_shop::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::allocation_shop::ActiveModel {
            mode: ActiveValue::Set(mode),
            name: ActiveValue::Set(shop.name),
            gazette_code: ActiveValue::Set(shop.gazette_code),
            district: ActiveValue::Set(shop.district),
            station: ActiveValue::Set(shop.station),
            category: ActiveValue::Set(shop.category),
            tokens: ActiveValue::Set(shop.tokens),
            expected_tokens: ActiveValue::Set(shop.expected_tokens),
            avg_sale: ActiveValue::Set(shop.avg_sale),
            total_tokens: ActiveValue::Set(shop.total_tokens),
            allocated_tokens: ActiveValue::Set(shop.allocated_tokens),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to an existing record and touches updated_at
    pub async fn update(
        &self,
        model: entity::allocation_shop::Model,
        update: AllocationUpdate,
    ) -> Result<entity::allocation_shop::Model, DbErr> {
        let mut active: entity::allocation_shop::ActiveModel = model.into();

        if let Some(name) = update.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(gazette_code) = update.gazette_code {
            active.gazette_code = ActiveValue::Set(gazette_code);
        }
        if let Some(district) = update.district {
            active.district = ActiveValue::Set(district);
        }
        if let Some(station) = update.station {
            active.station = ActiveValue::Set(station);
        }
        if let Some(category) = update.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(tokens) = update.tokens {
            active.tokens = ActiveValue::Set(tokens);
        }
        if let Some(expected_tokens) = update.expected_tokens {
            active.expected_tokens = ActiveValue::Set(expected_tokens);
        }
        if let Some(avg_sale) = update.avg_sale {
            active.avg_sale = ActiveValue::Set(avg_sale);
        }
        if let Some(total_tokens) = update.total_tokens {
            active.total_tokens = ActiveValue::Set(total_tokens);
        }
        if let Some(allocated_tokens) = update.allocated_tokens {
            active.allocated_tokens = ActiveValue::Set(allocated_tokens);
        }

        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    /// Deletes a record by id, returning the deleted model if it existed
    pub async fn delete(&self, id: i32) -> Result<Option<entity::allocation_shop::Model>, DbErr> {
        let Some(model) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::AllocationShop::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(model))
    }

    /// Replaces the entire contents of one mode inside a transaction.
    ///
    /// Either every record is swapped or none are; the other mode is never
    /// touched.
    pub async fn replace_all(
        &self,
        mode: AllocationMode,
        shops: Vec<NewAllocation>,
    ) -> Result<Vec<entity::allocation_shop::Model>, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now().naive_utc();

        entity::prelude::AllocationShop::delete_many()
            .filter(entity::allocation_shop::Column::Mode.eq(mode))
            .exec(&txn)
            .await?;

        let mut inserted = Vec::with_capacity(shops.len());
        for shop in shops {
            let model = entity::allocation_shop::ActiveModel {
                mode: ActiveValue::Set(mode),
                name: ActiveValue::Set(shop.name),
                gazette_code: ActiveValue::Set(shop.gazette_code),
                district: ActiveValue::Set(shop.district),
                station: ActiveValue::Set(shop.station),
                category: ActiveValue::Set(shop.category),
                tokens: ActiveValue::Set(shop.tokens),
                expected_tokens: ActiveValue::Set(shop.expected_tokens),
                avg_sale: ActiveValue::Set(shop.avg_sale),
                total_tokens: ActiveValue::Set(shop.total_tokens),
                allocated_tokens: ActiveValue::Set(shop.allocated_tokens),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            inserted.push(model);
        }

        txn.commit().await?;

        Ok(inserted)
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, OnConflict},
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::catalog::MasterShopSeed;

/// Filters for master catalog listings. All fields are optional; `search`
/// matches gazette code or locality case-insensitively as a substring.
#[derive(Debug, Default, Clone)]
pub struct MasterShopFilter {
    pub district: Option<String>,
    pub station: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

pub struct MasterShopRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MasterShopRepository<'a> {
    /// Creates a new instance of [`MasterShopRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists catalog entries matching the filter, ordered by gazette code
    pub async fn list(
        &self,
        filter: &MasterShopFilter,
    ) -> Result<Vec<entity::master_shop::Model>, DbErr> {
        let mut query = entity::prelude::MasterShop::find();

        if let Some(district) = &filter.district {
            query = query.filter(entity::master_shop::Column::District.eq(district));
        }

        if let Some(station) = &filter.station {
            query = query.filter(entity::master_shop::Column::ExciseStation.eq(station));
        }

        if let Some(category) = &filter.category {
            query = query.filter(entity::master_shop::Column::Category.eq(category));
        }

        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::master_shop::Entity,
                            entity::master_shop::Column::GazetteCode,
                        ))))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::master_shop::Entity,
                            entity::master_shop::Column::Locality,
                        ))))
                        .like(pattern),
                    ),
            );
        }

        query
            .order_by_asc(entity::master_shop::Column::GazetteCode)
            .all(self.db)
            .await
    }

    /// Finds a catalog entry by its gazette code
    pub async fn get_by_code(
        &self,
        gazette_code: &str,
    ) -> Result<Option<entity::master_shop::Model>, DbErr> {
        entity::prelude::MasterShop::find()
            .filter(entity::master_shop::Column::GazetteCode.eq(gazette_code))
            .one(self.db)
            .await
    }

    /// Lists distinct district names in ascending order
    pub async fn list_districts(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::MasterShop::find()
            .select_only()
            .column(entity::master_shop::Column::District)
            .distinct()
            .order_by_asc(entity::master_shop::Column::District)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Lists distinct (station, district) pairs, optionally limited to one
    /// district, ordered by station name
    pub async fn list_stations(
        &self,
        district: Option<&str>,
    ) -> Result<Vec<(String, String)>, DbErr> {
        let mut query = entity::prelude::MasterShop::find()
            .select_only()
            .column(entity::master_shop::Column::ExciseStation)
            .column(entity::master_shop::Column::District)
            .distinct();

        if let Some(district) = district {
            query = query.filter(entity::master_shop::Column::District.eq(district));
        }

        query
            .order_by_asc(entity::master_shop::Column::ExciseStation)
            .into_tuple::<(String, String)>()
            .all(self.db)
            .await
    }

    /// Lists distinct station names in ascending order, regardless of the
    /// district they belong to
    pub async fn list_station_names(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::MasterShop::find()
            .select_only()
            .column(entity::master_shop::Column::ExciseStation)
            .distinct()
            .order_by_asc(entity::master_shop::Column::ExciseStation)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Lists distinct non-null categories in ascending order
    pub async fn list_categories(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::MasterShop::find()
            .select_only()
            .column(entity::master_shop::Column::Category)
            .distinct()
            .filter(entity::master_shop::Column::Category.is_not_null())
            .order_by_asc(entity::master_shop::Column::Category)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Total number of catalog entries
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::MasterShop::find().count(self.db).await
    }

    /// Inserts seed entries, silently skipping gazette codes already present.
    ///
    /// Returns the number of rows inserted; re-running the same seed is a
    /// no-op for existing codes.
    pub async fn insert_missing(&self, entries: Vec<MasterShopSeed>) -> Result<u64, DbErr> {
        if entries.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().naive_utc();
        let models = entries
            .into_iter()
            .map(|entry| entity::master_shop::ActiveModel {
                gazette_code: ActiveValue::Set(entry.gazette_code),
                locality: ActiveValue::Set(entry.locality),
                annual_excise_tax: ActiveValue::Set(entry.annual_excise_tax),
                category: ActiveValue::Set(entry.category),
                district: ActiveValue::Set(entry.district),
                excise_station: ActiveValue::Set(entry.excise_station),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::MasterShop::insert_many(models)
            .on_conflict(
                OnConflict::column(entity::master_shop::Column::GazetteCode)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }
}

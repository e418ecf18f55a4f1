use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Master catalog entry. Bulk-loaded once, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "master_shop")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub gazette_code: String,
    pub locality: String,
    pub annual_excise_tax: Option<String>,
    pub category: Option<String>,
    pub district: String,
    pub excise_station: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Discriminates the two parallel allocation collections sharing this table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum AllocationMode {
    #[sea_orm(string_value = "planning")]
    Planning,
    #[sea_orm(string_value = "real")]
    Real,
}

impl std::str::FromStr for AllocationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(Self::Planning),
            "real" => Ok(Self::Real),
            other => Err(format!("Unknown allocation mode: {other:?}")),
        }
    }
}

impl std::fmt::Display for AllocationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planning => write!(f, "planning"),
            Self::Real => write!(f, "real"),
        }
    }
}

/// Working allocation record for one shop within one mode.
///
/// The district, station, and category columns are denormalized copies of the
/// linked master catalog entry, captured when the record is created and never
/// re-synced. `gazette_code` is nullable: legacy records may lack one.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "allocation_shop")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mode: AllocationMode,
    pub name: String,
    pub gazette_code: Option<String>,
    pub district: Option<String>,
    pub station: Option<String>,
    pub category: Option<String>,
    /// Planning-mode cap-counted quantity.
    pub tokens: i32,
    /// Planning-mode estimate, not cap-counted.
    pub expected_tokens: i32,
    /// Planning-mode free text, e.g. "3.5L".
    pub avg_sale: String,
    /// Real-mode informational capacity figure.
    pub total_tokens: i32,
    /// Real-mode comma-separated token identifiers; the parsed segment count
    /// is the cap-counted quantity for this record.
    pub allocated_tokens: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

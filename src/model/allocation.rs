use entity::allocation_shop::AllocationMode;
use serde::{Deserialize, Deserializer, Serialize};

/// An allocation record as served to the presentation layer.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AllocationShopDto {
    pub id: i32,
    #[schema(value_type = String)]
    pub mode: AllocationMode,
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

impl From<entity::allocation_shop::Model> for AllocationShopDto {
    fn from(shop: entity::allocation_shop::Model) -> Self {
        Self {
            id: shop.id,
            mode: shop.mode,
            name: shop.name,
            gazette_code: shop.gazette_code,
            district: shop.district,
            station: shop.station,
            category: shop.category,
            tokens: shop.tokens,
            expected_tokens: shop.expected_tokens,
            avg_sale: shop.avg_sale,
            total_tokens: shop.total_tokens,
            allocated_tokens: shop.allocated_tokens,
        }
    }
}

/// Request body for creating an allocation record.
///
/// Numeric fields follow the lenient-parse policy: numbers, numeric strings,
/// or anything else, where anything non-numeric coerces to 0.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateShopDto {
    pub name: String,
    #[serde(default)]
    pub gazette_code: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub station: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    #[schema(value_type = i32)]
    pub tokens: i32,
    #[serde(default, deserialize_with = "lenient_int")]
    #[schema(value_type = i32)]
    pub expected_tokens: i32,
    #[serde(default)]
    pub avg_sale: String,
    #[serde(default, deserialize_with = "lenient_int")]
    #[schema(value_type = i32)]
    pub total_tokens: i32,
    #[serde(default)]
    pub allocated_tokens: String,
}

/// Request body for a partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateShopDto {
    #[serde(default, deserialize_with = "lenient_int_opt")]
    #[schema(value_type = Option<i32>)]
    pub tokens: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int_opt")]
    #[schema(value_type = Option<i32>)]
    pub expected_tokens: Option<i32>,
    #[serde(default)]
    pub avg_sale: Option<String>,
    #[serde(default, deserialize_with = "lenient_int_opt")]
    #[schema(value_type = Option<i32>)]
    pub total_tokens: Option<i32>,
    #[serde(default)]
    pub allocated_tokens: Option<String>,
}

/// Request body for the atomic replace-all operation.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BulkReplaceDto {
    pub shops: Vec<CreateShopDto>,
}

/// Result of a planning-to-real synchronization run.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SyncResultDto {
    /// Number of newly created real-mode records.
    pub created: u32,
}

/// Result of a catalog backfill run over legacy code-less records.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BackfillResultDto {
    /// Records that received catalog fields.
    pub updated: u32,
    /// Legacy records examined.
    pub total: u32,
    /// Records left untouched, each with the reason.
    pub skipped: Vec<BackfillSkipDto>,
}

/// One record the backfill could not resolve.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BackfillSkipDto {
    pub id: i32,
    pub name: String,
    pub reason: String,
}

fn coerce_int(value: &serde_json::Value) -> i32 {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .unwrap_or(0)
            .clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_int(&value))
}

fn lenient_int_opt<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(coerce_int(&value)))
}

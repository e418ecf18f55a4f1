use serde::{Deserialize, Serialize};

/// A master catalog entry as served to the presentation layer.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MasterShopDto {
    pub id: i32,
    pub gazette_code: String,
    pub locality: String,
    pub annual_excise_tax: Option<String>,
    pub category: Option<String>,
    pub district: String,
    pub excise_station: String,
}

impl From<entity::master_shop::Model> for MasterShopDto {
    fn from(shop: entity::master_shop::Model) -> Self {
        Self {
            id: shop.id,
            gazette_code: shop.gazette_code,
            locality: shop.locality,
            annual_excise_tax: shop.annual_excise_tax,
            category: shop.category,
            district: shop.district,
            excise_station: shop.excise_station,
        }
    }
}

/// Aggregate counts over the master catalog.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatalogStatsDto {
    pub total_shops: u64,
    pub total_districts: u64,
    pub total_stations: u64,
    pub total_categories: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DistrictDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StationDto {
    pub name: String,
    pub district: String,
}

/// One entry of the master catalog seed file (JSON array).
#[derive(Debug, Clone, Deserialize)]
pub struct MasterShopSeed {
    pub gazette_code: String,
    pub locality: String,
    #[serde(default)]
    pub annual_excise_tax: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub district: String,
    pub excise_station: String,
}

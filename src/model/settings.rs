use serde::{Deserialize, Serialize};

/// The global token cap, read and written via the settings endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenCapDto {
    pub token_cap: i32,
}

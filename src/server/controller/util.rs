use entity::allocation_shop::AllocationMode;

use crate::server::error::{allocation::AllocationError, Error};

/// Treats an empty string or the literal "all" as no filter
pub fn normalize_filter(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

/// Parses the mode path segment, rejecting anything but "planning" or "real"
pub fn parse_mode(mode: &str) -> Result<AllocationMode, Error> {
    mode.parse()
        .map_err(|message: String| AllocationError::Validation(message).into())
}

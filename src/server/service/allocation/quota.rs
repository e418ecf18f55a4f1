//! Cap-counted quantity derivation and clamping.
//!
//! Planning records count their `tokens` field directly; real records derive
//! their quantity from the number of entries in the free-text
//! `allocated_tokens` list. The clamp is the single write path for
//! cap-counted quantities, which is what keeps the running total under the
//! configured cap.

use entity::allocation_shop::AllocationMode;

/// Number of token identifiers in a comma-separated list.
///
/// Entries are trimmed and empty segments are dropped; duplicates still
/// count, the list is not deduplicated.
pub fn token_count(allocated_tokens: &str) -> i64 {
    allocated_tokens
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .count() as i64
}

/// The quantity a record contributes toward the cap
pub fn counted_quantity(shop: &entity::allocation_shop::Model) -> i64 {
    match shop.mode {
        AllocationMode::Planning => shop.tokens as i64,
        AllocationMode::Real => token_count(&shop.allocated_tokens),
    }
}

/// Clamps a proposed quantity so the collection total never exceeds the cap.
///
/// `others_sum` is the sum of cap-counted quantities over every record
/// except the one being written. Negative proposals floor at 0, and when the
/// rest of the collection already meets or exceeds the cap the result is 0.
pub fn clamp(others_sum: i64, proposed: i32, cap: i32) -> i32 {
    let proposed = i64::from(proposed).max(0);
    let max_allowed = (i64::from(cap) - others_sum).max(0);

    proposed.min(max_allowed) as i32
}

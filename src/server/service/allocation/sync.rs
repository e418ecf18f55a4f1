//! Planning-to-real synchronization planning.
//!
//! Sync is additive-only: planning records missing from the real collection
//! are copied over with zeroed quantities, and existing real records are
//! never updated or deleted. Records without a gazette code cannot be
//! matched and are skipped entirely; the [`backfill`](super::backfill)
//! planner exists to link such legacy records to the catalog first.

use std::collections::HashSet;

use crate::server::data::allocation::NewAllocation;

/// Computes the real-mode inserts a sync run would perform.
///
/// Pure with respect to its inputs; the caller persists the result. Calling
/// again with the refreshed real collection yields no further inserts.
pub fn plan_sync(
    planning: &[entity::allocation_shop::Model],
    real: &[entity::allocation_shop::Model],
) -> Vec<NewAllocation> {
    let existing_codes: HashSet<&str> = real
        .iter()
        .filter_map(|shop| shop.gazette_code.as_deref())
        .collect();

    planning
        .iter()
        .filter_map(|shop| {
            let code = shop.gazette_code.as_deref()?;
            if existing_codes.contains(code) {
                return None;
            }

            Some(NewAllocation {
                name: shop.name.clone(),
                gazette_code: Some(code.to_string()),
                district: shop.district.clone(),
                station: shop.station.clone(),
                category: shop.category.clone(),
                tokens: 0,
                expected_tokens: 0,
                avg_sale: String::new(),
                total_tokens: 0,
                allocated_tokens: String::new(),
            })
        })
        .collect()
}

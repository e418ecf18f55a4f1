//! Catalog backfill planner.
//!
//! Planning records created before the master catalog linkage carry no
//! gazette code, so they never participate in cross-mode sync. This planner
//! matches them against the catalog by name and proposes the catalog fields
//! for each match.

use std::collections::HashSet;

/// Catalog fields proposed for one legacy record.
#[derive(Debug, Clone)]
pub struct BackfillAssignment {
    pub id: i32,
    pub gazette_code: String,
    pub district: String,
    pub station: String,
    pub category: Option<String>,
}

/// A legacy record the planner could not resolve, with the reason.
#[derive(Debug, Clone)]
pub struct BackfillSkip {
    pub id: i32,
    pub name: String,
    pub reason: String,
}

/// What a backfill run did: `total` legacy records examined, `updated` of
/// them resolved, the rest listed in `skipped`.
#[derive(Debug)]
pub struct BackfillOutcome {
    pub updated: u32,
    pub total: u32,
    pub skipped: Vec<BackfillSkip>,
}

/// Plans the backfill for one mode's records against the master catalog.
///
/// Only records without a gazette code are considered. A record matches when
/// its name equals a catalog entry's locality case-insensitively. A match
/// whose code is already present in the collection, or already claimed by an
/// earlier record in the same run, is skipped so per-mode code uniqueness
/// holds.
pub fn plan_backfill(
    shops: &[entity::allocation_shop::Model],
    catalog: &[entity::master_shop::Model],
) -> (Vec<BackfillAssignment>, Vec<BackfillSkip>) {
    let mut taken: HashSet<String> = shops
        .iter()
        .filter_map(|shop| shop.gazette_code.clone())
        .filter(|code| !code.is_empty())
        .collect();

    let mut assignments = Vec::new();
    let mut skipped = Vec::new();

    for shop in shops {
        if shop
            .gazette_code
            .as_deref()
            .is_some_and(|code| !code.is_empty())
        {
            continue;
        }

        let name = shop.name.to_lowercase();
        let Some(entry) = catalog
            .iter()
            .find(|entry| entry.locality.to_lowercase() == name)
        else {
            skipped.push(BackfillSkip {
                id: shop.id,
                name: shop.name.clone(),
                reason: "No matching master shop found".to_string(),
            });
            continue;
        };

        if !taken.insert(entry.gazette_code.clone()) {
            skipped.push(BackfillSkip {
                id: shop.id,
                name: shop.name.clone(),
                reason: format!("Gazette code {:?} already assigned", entry.gazette_code),
            });
            continue;
        }

        assignments.push(BackfillAssignment {
            id: shop.id,
            gazette_code: entry.gazette_code.clone(),
            district: entry.district.clone(),
            station: entry.excise_station.clone(),
            category: entry.category.clone(),
        });
    }

    (assignments, skipped)
}

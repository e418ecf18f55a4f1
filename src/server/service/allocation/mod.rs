//! Allocation service layer.
//!
//! Coordinates the allocation repository with cap enforcement and
//! cross-mode synchronization. All writes to cap-counted quantities go
//! through this service so the clamp in [`quota`] remains the single write
//! path.

pub mod backfill;
pub mod quota;
pub mod sync;

use std::collections::HashMap;

use entity::allocation_shop::AllocationMode;
use sea_orm::DatabaseConnection;

use crate::{
    model::allocation::{CreateShopDto, UpdateShopDto},
    server::{
        data::{
            allocation::{AllocationRepository, AllocationUpdate, NewAllocation},
            master_shop::{MasterShopFilter, MasterShopRepository},
        },
        error::{allocation::AllocationError, Error},
        service::settings::SettingsService,
    },
};

pub struct AllocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllocationService<'a> {
    /// Creates a new instance of [`AllocationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one mode's records, optionally filtered by district and station
    pub async fn list(
        &self,
        mode: AllocationMode,
        district: Option<&str>,
        station: Option<&str>,
    ) -> Result<Vec<entity::allocation_shop::Model>, Error> {
        let repository = AllocationRepository::new(self.db);

        Ok(repository.list(mode, district, station).await?)
    }

    /// Sum of cap-counted quantities across one mode's collection
    pub async fn allocated_total(&self, mode: AllocationMode) -> Result<i64, Error> {
        let repository = AllocationRepository::new(self.db);
        let shops = repository.list(mode, None, None).await?;

        Ok(shops.iter().map(quota::counted_quantity).sum())
    }

    /// Creates a record in one mode.
    ///
    /// Rejects a gazette code already present in that mode. In planning mode
    /// the token quantity is clamped against the cap before persisting; real
    /// mode stores the submitted fields as-is since its quantity is derived
    /// from the allocated token list.
    pub async fn create(
        &self,
        mode: AllocationMode,
        shop: CreateShopDto,
    ) -> Result<entity::allocation_shop::Model, Error> {
        let repository = AllocationRepository::new(self.db);

        if let Some(code) = shop.gazette_code.as_deref().filter(|code| !code.is_empty()) {
            if repository.find_by_code(mode, code).await?.is_some() {
                return Err(AllocationError::DuplicateCode(code.to_string()).into());
            }
        }

        let tokens = match mode {
            AllocationMode::Planning => {
                let cap = SettingsService::new(self.db).get_cap().await?;
                let others_sum = self.allocated_total(mode).await?;

                quota::clamp(others_sum, shop.tokens, cap)
            }
            AllocationMode::Real => shop.tokens,
        };

        let created = repository
            .create(
                mode,
                NewAllocation {
                    name: shop.name,
                    gazette_code: shop.gazette_code.filter(|code| !code.is_empty()),
                    district: shop.district,
                    station: shop.station,
                    category: shop.category,
                    tokens,
                    expected_tokens: shop.expected_tokens,
                    avg_sale: shop.avg_sale,
                    total_tokens: shop.total_tokens,
                    allocated_tokens: shop.allocated_tokens,
                },
            )
            .await?;

        Ok(created)
    }

    /// Applies a partial update to a record in one mode.
    ///
    /// An id that does not exist, or that belongs to the other mode, is
    /// reported as not found. A planning token change is clamped against the
    /// cap minus the rest of the collection.
    pub async fn update(
        &self,
        mode: AllocationMode,
        id: i32,
        update: UpdateShopDto,
    ) -> Result<entity::allocation_shop::Model, Error> {
        let repository = AllocationRepository::new(self.db);

        let existing = repository
            .find_by_id(id)
            .await?
            .filter(|shop| shop.mode == mode)
            .ok_or(AllocationError::NotFound(id))?;

        let tokens = match (mode, update.tokens) {
            (AllocationMode::Planning, Some(proposed)) => {
                let cap = SettingsService::new(self.db).get_cap().await?;
                let others_sum = self.allocated_total(AllocationMode::Planning).await?
                    - quota::counted_quantity(&existing);

                Some(quota::clamp(others_sum, proposed, cap))
            }
            (_, proposed) => proposed,
        };

        let updated = repository
            .update(
                existing,
                AllocationUpdate {
                    tokens,
                    expected_tokens: update.expected_tokens,
                    avg_sale: update.avg_sale,
                    total_tokens: update.total_tokens,
                    allocated_tokens: update.allocated_tokens,
                    ..Default::default()
                },
            )
            .await?;

        Ok(updated)
    }

    /// Deletes a record in one mode, returning the removed record. Fails if
    /// the id is unknown or belongs to the other mode.
    pub async fn delete(
        &self,
        mode: AllocationMode,
        id: i32,
    ) -> Result<entity::allocation_shop::Model, Error> {
        let repository = AllocationRepository::new(self.db);

        let exists = repository
            .find_by_id(id)
            .await?
            .is_some_and(|shop| shop.mode == mode);
        if !exists {
            return Err(AllocationError::NotFound(id).into());
        }

        let deleted = repository
            .delete(id)
            .await?
            .ok_or(AllocationError::NotFound(id))?;

        Ok(deleted)
    }

    /// Atomically replaces one mode's entire collection.
    ///
    /// Duplicate gazette codes within the payload are rejected up front. In
    /// planning mode the quantities are clamped sequentially in payload
    /// order, each against the running total of those already accepted.
    pub async fn replace_all(
        &self,
        mode: AllocationMode,
        shops: Vec<CreateShopDto>,
    ) -> Result<Vec<entity::allocation_shop::Model>, Error> {
        let mut seen = std::collections::HashSet::new();
        for shop in &shops {
            if let Some(code) = shop.gazette_code.as_deref().filter(|code| !code.is_empty()) {
                if !seen.insert(code.to_string()) {
                    return Err(AllocationError::DuplicateCode(code.to_string()).into());
                }
            }
        }

        let cap = SettingsService::new(self.db).get_cap().await?;

        let mut running_total: i64 = 0;
        let inserts = shops
            .into_iter()
            .map(|shop| {
                let tokens = match mode {
                    AllocationMode::Planning => {
                        let clamped = quota::clamp(running_total, shop.tokens, cap);
                        running_total += i64::from(clamped);
                        clamped
                    }
                    AllocationMode::Real => shop.tokens,
                };

                NewAllocation {
                    name: shop.name,
                    gazette_code: shop.gazette_code.filter(|code| !code.is_empty()),
                    district: shop.district,
                    station: shop.station,
                    category: shop.category,
                    tokens,
                    expected_tokens: shop.expected_tokens,
                    avg_sale: shop.avg_sale,
                    total_tokens: shop.total_tokens,
                    allocated_tokens: shop.allocated_tokens,
                }
            })
            .collect();

        let repository = AllocationRepository::new(self.db);
        let inserted = repository.replace_all(mode, inserts).await?;

        Ok(inserted)
    }

    /// Backfills catalog fields onto legacy planning records that lack a
    /// gazette code, matching record names against master catalog localities.
    ///
    /// Records the planner cannot resolve are reported in the outcome rather
    /// than failing the run.
    pub async fn backfill_from_catalog(&self) -> Result<backfill::BackfillOutcome, Error> {
        let repository = AllocationRepository::new(self.db);

        let planning = repository
            .list(AllocationMode::Planning, None, None)
            .await?;
        let catalog = MasterShopRepository::new(self.db)
            .list(&MasterShopFilter::default())
            .await?;

        let (assignments, skipped) = backfill::plan_backfill(&planning, &catalog);
        let total = (assignments.len() + skipped.len()) as u32;

        let mut models: HashMap<i32, entity::allocation_shop::Model> =
            planning.into_iter().map(|shop| (shop.id, shop)).collect();

        let mut updated: u32 = 0;
        for assignment in assignments {
            if let Some(model) = models.remove(&assignment.id) {
                repository
                    .update(
                        model,
                        AllocationUpdate {
                            gazette_code: Some(Some(assignment.gazette_code)),
                            district: Some(Some(assignment.district)),
                            station: Some(Some(assignment.station)),
                            category: Some(assignment.category),
                            ..Default::default()
                        },
                    )
                    .await?;
                updated += 1;
            }
        }

        Ok(backfill::BackfillOutcome {
            updated,
            total,
            skipped,
        })
    }

    /// Copies planning records missing from the real collection, matched by
    /// gazette code. Returns the number of records created.
    pub async fn sync_planning_to_real(&self) -> Result<u32, Error> {
        let repository = AllocationRepository::new(self.db);

        let planning = repository.list(AllocationMode::Planning, None, None).await?;
        let real = repository.list(AllocationMode::Real, None, None).await?;

        let inserts = sync::plan_sync(&planning, &real);
        let created = inserts.len() as u32;

        for insert in inserts {
            repository.create(AllocationMode::Real, insert).await?;
        }

        Ok(created)
    }
}

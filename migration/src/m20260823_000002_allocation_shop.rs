use sea_orm_migration::{prelude::*, schema::*};

static IDX_ALLOCATION_SHOP_MODE: &str = "idx-allocation_shop-mode";
static IDX_ALLOCATION_SHOP_MODE_CODE: &str = "idx-allocation_shop-mode-gazette_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AllocationShop::Table)
                    .if_not_exists()
                    .col(pk_auto(AllocationShop::Id))
                    .col(string_len(AllocationShop::Mode, 16))
                    .col(string(AllocationShop::Name))
                    .col(string_null(AllocationShop::GazetteCode))
                    .col(string_null(AllocationShop::District))
                    .col(string_null(AllocationShop::Station))
                    .col(string_null(AllocationShop::Category))
                    .col(integer(AllocationShop::Tokens).default(0))
                    .col(integer(AllocationShop::ExpectedTokens).default(0))
                    .col(string(AllocationShop::AvgSale).default(""))
                    .col(integer(AllocationShop::TotalTokens).default(0))
                    .col(string(AllocationShop::AllocatedTokens).default(""))
                    .col(timestamp(AllocationShop::CreatedAt))
                    .col(timestamp(AllocationShop::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLOCATION_SHOP_MODE)
                    .table(AllocationShop::Table)
                    .col(AllocationShop::Mode)
                    .to_owned(),
            )
            .await?;

        // A gazette code may appear at most once per mode; NULL codes are
        // exempt (legacy records).
        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLOCATION_SHOP_MODE_CODE)
                    .table(AllocationShop::Table)
                    .col(AllocationShop::Mode)
                    .col(AllocationShop::GazetteCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLOCATION_SHOP_MODE_CODE)
                    .table(AllocationShop::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLOCATION_SHOP_MODE)
                    .table(AllocationShop::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AllocationShop::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AllocationShop {
    Table,
    Id,
    Mode,
    Name,
    GazetteCode,
    District,
    Station,
    Category,
    Tokens,
    ExpectedTokens,
    AvgSale,
    TotalTokens,
    AllocatedTokens,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

static IDX_MASTER_SHOP_DISTRICT: &str = "idx-master_shop-district";
static IDX_MASTER_SHOP_STATION: &str = "idx-master_shop-excise_station";
static IDX_MASTER_SHOP_CATEGORY: &str = "idx-master_shop-category";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MasterShop::Table)
                    .if_not_exists()
                    .col(pk_auto(MasterShop::Id))
                    .col(string_uniq(MasterShop::GazetteCode))
                    .col(string(MasterShop::Locality))
                    .col(string_null(MasterShop::AnnualExciseTax))
                    .col(string_null(MasterShop::Category))
                    .col(string(MasterShop::District))
                    .col(string(MasterShop::ExciseStation))
                    .col(timestamp(MasterShop::CreatedAt))
                    .col(timestamp(MasterShop::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MASTER_SHOP_DISTRICT)
                    .table(MasterShop::Table)
                    .col(MasterShop::District)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MASTER_SHOP_STATION)
                    .table(MasterShop::Table)
                    .col(MasterShop::ExciseStation)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MASTER_SHOP_CATEGORY)
                    .table(MasterShop::Table)
                    .col(MasterShop::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MASTER_SHOP_CATEGORY)
                    .table(MasterShop::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MASTER_SHOP_STATION)
                    .table(MasterShop::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MASTER_SHOP_DISTRICT)
                    .table(MasterShop::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MasterShop::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MasterShop {
    Table,
    Id,
    GazetteCode,
    Locality,
    AnnualExciseTax,
    Category,
    District,
    ExciseStation,
    CreatedAt,
    UpdatedAt,
}

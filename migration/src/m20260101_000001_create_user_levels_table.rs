use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserLevels::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(big_integer(UserLevels::Xp).default(0))
                    .col(big_integer(UserLevels::Level).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLevels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserLevels {
    Table,
    UserId,
    Xp,
    Level,
}

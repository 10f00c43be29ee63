use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMemory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserMemory::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_null(UserMemory::Username))
                    .col(string_null(UserMemory::Vibe))
                    .col(text_null(UserMemory::Summary))
                    .col(string_null(UserMemory::LastUpdated).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMemory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserMemory {
    Table,
    UserId,
    Username,
    Vibe,
    Summary,
    LastUpdated,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeletedMessages::Table)
                    .if_not_exists()
                    .col(pk_auto(DeletedMessages::Id))
                    .col(big_integer_null(DeletedMessages::ChannelId))
                    .col(big_integer_null(DeletedMessages::UserId))
                    .col(string_null(DeletedMessages::Username))
                    .col(text_null(DeletedMessages::Content))
                    .col(string_null(DeletedMessages::Timestamp).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeletedMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeletedMessages {
    Table,
    Id,
    ChannelId,
    UserId,
    Username,
    Content,
    Timestamp,
}

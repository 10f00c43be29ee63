use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserNotes::Table)
                    .if_not_exists()
                    .col(pk_auto(UserNotes::Id))
                    .col(big_integer(UserNotes::UserId))
                    .col(text(UserNotes::Note))
                    .col(string_null(UserNotes::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_notes_user_id")
                    .table(UserNotes::Table)
                    .col(UserNotes::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserNotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserNotes {
    Table,
    Id,
    UserId,
    Note,
    CreatedAt,
}

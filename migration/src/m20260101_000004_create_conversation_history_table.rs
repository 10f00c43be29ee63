use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConversationHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(ConversationHistory::Id))
                    .col(big_integer(ConversationHistory::UserId))
                    .col(string(ConversationHistory::Role))
                    .col(text(ConversationHistory::Content))
                    .col(
                        string_null(ConversationHistory::Timestamp)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_conversation_history_user_id")
                    .table(ConversationHistory::Table)
                    .col(ConversationHistory::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConversationHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConversationHistory {
    Table,
    Id,
    UserId,
    Role,
    Content,
    Timestamp,
}

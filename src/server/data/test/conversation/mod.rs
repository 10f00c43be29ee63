use crate::server::{data::conversation::ConversationRepository, model::conversation::Role};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod append;
mod count_commands;
mod count_model_replies;
mod get_recent_by_user;

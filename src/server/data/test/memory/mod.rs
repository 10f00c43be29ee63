use crate::server::data::memory::UserMemoryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user_memory::UserMemoryFactory};

mod find_by_user_id;
mod get_recently_updated;
mod get_vibe_distribution;

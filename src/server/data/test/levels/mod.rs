use crate::server::data::levels::UserLevelsRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod find_by_user_id;

use crate::server::data::notes::UserNotesRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_user_id;

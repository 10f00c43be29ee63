use crate::server::data::deleted_message::DeletedMessageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_recent;

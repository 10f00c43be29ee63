mod conversation;
mod deleted_message;
mod levels;
mod memory;
mod notes;

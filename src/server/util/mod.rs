//! Small helpers shared across layers.

pub mod fallback;
pub mod parse;
pub mod time;

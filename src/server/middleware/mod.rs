//! Request-scoped helpers layered over tower-sessions.

pub mod session;

#[cfg(test)]
mod test;

use std::{fmt::Display, future::Future};

/// Awaits a fallible fetch and substitutes the default on failure.
///
/// The failure is logged with `label` so degraded fields can still be traced server
/// side while the caller receives a complete value.
///
/// # Arguments
/// - `label` - Name of the value being fetched, used in the log line
/// - `fetch` - Future producing the value
///
/// # Returns
/// - The fetched value, or `T::default()` if the fetch failed
pub async fn or_default<T, E, F>(label: &str, fetch: F) -> T
where
    T: Default,
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    match fetch.await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to fetch {} from the database: {}", label, e);
            T::default()
        }
    }
}

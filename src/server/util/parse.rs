use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Converts a Discord snowflake into the signed form the bot's tables key rows by.
///
/// # Returns
/// - `Ok(i64)` - Snowflake fits the signed range
/// - `Err(AppError::InternalErr(SnowflakeOutOfRange))` - Snowflake is above `i64::MAX`
pub fn snowflake_to_i64(value: u64) -> Result<i64, AppError> {
    let result = i64::try_from(value).map_err(|_| InternalError::SnowflakeOutOfRange(value))?;

    Ok(result)
}

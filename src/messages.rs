//! User-facing strings returned by the API.
//!
//! Keep all of them in this module so they stay in one place and are easy to
//! update or translate.

pub const ERROR_MESSAGE_REQUIRED: &str = "Message is required";
pub const ERROR_NOT_ENOUGH_BEVERAGES: &str = "At least 2 beverages are required";
pub const ERROR_TOO_MANY_BEVERAGES: &str = "At most 10 beverages can be compared at once";
pub const ERROR_NO_API_KEY: &str = "LLM API key not configured";
pub const ERROR_UPSTREAM: &str = "Failed to get a response from the LLM API";
pub const ERROR_RATE_LIMITED: &str = "Too many requests, slow down";

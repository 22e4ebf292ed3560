/// Listing limit used by tests, matching the default `--limit`
pub const TEST_LISTING_LIMIT: u32 = 4000;

/// `Retry-After` value, in seconds, sent by rate-limited mock endpoints
pub const TEST_RETRY_AFTER_SECS: u64 = 0;

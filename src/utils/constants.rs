//! Shared constants and invariants

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_BASE_URL: &str = "https://api.rade.ir/api";
pub const DEFAULT_TOKEN_CACHE_PATH: &str = "cache/token_cache.json";

/// Query marker appended to every business call.
pub const APPLICANT_QUERY_KEY: &str = "applicant";
pub const APPLICANT_QUERY_VALUE: &str = "rust_package_sdk";

pub const TOKEN_ENDPOINT: &str = "/token";

/// Retries allowed after a 401 from a business endpoint.
pub const MAX_AUTH_RETRIES: u32 = 1;

pub const INVALID_INPUT_CODE: u16 = 422;

// Environment variables
pub const ENV_USERNAME: &str = "RADE_USERNAME";
pub const ENV_PASSWORD: &str = "RADE_PASSWORD";
pub const ENV_SCOPES: &str = "RADE_SCOPES";
pub const ENV_BASE_URL: &str = "RADE_BASE_URL";
pub const ENV_TOKEN_CACHE: &str = "RADE_TOKEN_CACHE";

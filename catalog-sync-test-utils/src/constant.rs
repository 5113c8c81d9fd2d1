//! Placeholder values used when pointing a catalog client at the mock server.

/// API key the mock listing endpoints require in the `X-API-Key` header.
pub static TEST_API_KEY: &str = "test_api_key";

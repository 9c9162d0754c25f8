/// Bearer credential extraction
pub mod auth;
/// Error to HTTP response mapping
pub mod error_handling;

//! # SIHRA Core
//!
//! Domain types and the pure timetable layout used by the SIHRA front end.
//!
//! - **Models**: wire records coming from the SIHRA REST API, the session
//!   context passed to the client, and the response envelope decode step
//! - **Schedule**: day normalization, the hourly time grid and the weekly
//!   timetable built on top of them
//!
//! Nothing in this crate performs I/O.

/// Error type shared across the workspace
pub mod errors;
/// Wire and session models
pub mod models;
/// Day normalization and timetable layout
pub mod schedule;

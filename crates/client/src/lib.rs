//! # SIHRA Client
//!
//! Talks to the remote SIHRA REST API and assembles a teacher's week.
//!
//! - [`api::SihraApi`]: typed reqwest client, one per credential
//! - [`source::ScheduleSource`]: the seam the aggregation is written against
//! - [`aggregate`]: concurrent per-group fetching and timetable assembly
//! - [`config`]: environment configuration

pub mod aggregate;
pub mod api;
pub mod config;
pub mod source;

pub use aggregate::{FailedGroup, TeacherSchedule, TeacherTimetable, build_teacher_timetable, fetch_teacher_schedule};
pub use api::SihraApi;
pub use config::ClientConfig;
pub use source::ScheduleSource;

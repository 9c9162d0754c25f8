//! Weekly schedule layout.
//!
//! Raw session records flow one way through this module:
//! day name normalization ([`day`]), `HH:MM` parsing ([`clock`]), hourly
//! bucketing and pixel geometry ([`grid`]), and finally the six-column week
//! ([`timetable`]).

pub mod clock;
pub mod day;
pub mod grid;
pub mod timetable;

pub use clock::ClockTime;
pub use day::{CanonicalDay, DayMatch, normalize_day, normalize_day_label};
pub use grid::{GridConfig, HiddenReason, HourRow, Placement, SlotGeometry};
pub use timetable::{DayColumn, HiddenSlot, PlacedSlot, WeeklyTimetable, layout_slot};

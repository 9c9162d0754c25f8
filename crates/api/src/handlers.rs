/// Teacher timetable and day normalization handlers
pub mod timetable;

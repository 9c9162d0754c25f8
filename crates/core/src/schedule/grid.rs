//! Hourly time grid.
//!
//! A day column spans a fixed window (07:00 to 19:00 by default) split into
//! one-hour rows of equal pixel height. A session is bucketed into the row
//! containing its start and positioned absolutely inside the column, so a
//! two-hour session visually covers two rows while belonging to one.

use serde::Serialize;

use crate::errors::{SihraError, SihraResult};
use crate::schedule::clock::ClockTime;

pub const DEFAULT_WINDOW_START: ClockTime = ClockTime::from_hm(7, 0);
pub const DEFAULT_WINDOW_END: ClockTime = ClockTime::from_hm(19, 0);
pub const DEFAULT_ROW_HEIGHT_PX: f64 = 60.0;
pub const DEFAULT_MIN_VISIBLE_HEIGHT_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    window_start: ClockTime,
    window_end: ClockTime,
    row_height_px: f64,
    /// Sessions rendering shorter than this are not placed.
    min_visible_height_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            window_start: DEFAULT_WINDOW_START,
            window_end: DEFAULT_WINDOW_END,
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
            min_visible_height_px: DEFAULT_MIN_VISIBLE_HEIGHT_PX,
        }
    }
}

/// One horizontal band of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourRow {
    pub index: usize,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl HourRow {
    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time < self.end
    }
}

/// Absolute position of a session inside its day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotGeometry {
    pub top_px: f64,
    pub height_px: f64,
}

/// Why a session was left out of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum HiddenReason {
    UnmatchedDay { day: String },
    InvalidTime { value: String },
    EmptyRange,
    OutsideWindow,
    BelowMinimumHeight {
        #[serde(rename = "heightPx")]
        height_px: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Visible { row: usize, geometry: SlotGeometry },
    Hidden(HiddenReason),
}

impl GridConfig {
    /// Build a validated configuration over the default window.
    pub fn new(row_height_px: f64, min_visible_height_px: f64) -> SihraResult<Self> {
        Self::with_window(
            DEFAULT_WINDOW_START,
            DEFAULT_WINDOW_END,
            row_height_px,
            min_visible_height_px,
        )
    }

    pub fn with_window(
        window_start: ClockTime,
        window_end: ClockTime,
        row_height_px: f64,
        min_visible_height_px: f64,
    ) -> SihraResult<Self> {
        if window_end <= window_start {
            return Err(SihraError::Validation(format!(
                "Grid window must end after it starts ({} - {})",
                window_start, window_end
            )));
        }
        if !row_height_px.is_finite() || row_height_px <= 0.0 {
            return Err(SihraError::Validation(format!(
                "Row height must be a positive number of pixels, got {}",
                row_height_px
            )));
        }
        if !min_visible_height_px.is_finite() || min_visible_height_px < 0.0 {
            return Err(SihraError::Validation(format!(
                "Minimum visible height cannot be negative, got {}",
                min_visible_height_px
            )));
        }

        Ok(Self {
            window_start,
            window_end,
            row_height_px,
            min_visible_height_px,
        })
    }

    pub fn window_start(&self) -> ClockTime {
        self.window_start
    }

    pub fn window_end(&self) -> ClockTime {
        self.window_end
    }

    pub fn row_height_px(&self) -> f64 {
        self.row_height_px
    }

    pub fn min_visible_height_px(&self) -> f64 {
        self.min_visible_height_px
    }

    pub fn pixels_per_minute(&self) -> f64 {
        self.row_height_px / 60.0
    }

    /// Total height of one day column.
    pub fn column_height_px(&self) -> f64 {
        f64::from(self.window_end.minutes() - self.window_start.minutes()) * self.pixels_per_minute()
    }

    /// Hourly rows covering the window. The last row is cut short when the
    /// window does not end on the hour.
    pub fn rows(&self) -> Vec<HourRow> {
        let mut rows = Vec::new();
        let mut start = self.window_start.minutes();
        let end = self.window_end.minutes();

        while start < end {
            let row_end = (start + 60).min(end);
            rows.push(HourRow {
                index: rows.len(),
                start: ClockTime::from_minutes(start),
                end: ClockTime::from_minutes(row_end),
            });
            start = row_end;
        }

        rows
    }

    /// Index of the row whose `[start, end)` contains `time`.
    pub fn row_index(&self, time: ClockTime) -> Option<usize> {
        if time < self.window_start || time >= self.window_end {
            return None;
        }
        Some(usize::from((time.minutes() - self.window_start.minutes()) / 60))
    }

    /// Pixel geometry for `[start, end)`. The end is clipped to the window.
    pub fn geometry(&self, start: ClockTime, end: ClockTime) -> SlotGeometry {
        let ppm = self.pixels_per_minute();
        let end = end.min(self.window_end);
        let offset = f64::from(start.minutes()) - f64::from(self.window_start.minutes());
        let duration = f64::from(end.minutes()) - f64::from(start.minutes());

        SlotGeometry {
            top_px: offset * ppm,
            height_px: duration.max(0.0) * ppm,
        }
    }

    /// Decide whether and where a session is drawn.
    pub fn place(&self, start: ClockTime, end: ClockTime) -> Placement {
        if end <= start {
            return Placement::Hidden(HiddenReason::EmptyRange);
        }

        let Some(row) = self.row_index(start) else {
            return Placement::Hidden(HiddenReason::OutsideWindow);
        };

        let geometry = self.geometry(start, end);
        if geometry.height_px < self.min_visible_height_px {
            return Placement::Hidden(HiddenReason::BelowMinimumHeight {
                height_px: geometry.height_px,
            });
        }

        Placement::Visible { row, geometry }
    }
}

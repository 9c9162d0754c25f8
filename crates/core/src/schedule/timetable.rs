use serde::Serialize;

use crate::models::time_slot::TimeSlot;
use crate::schedule::clock::ClockTime;
use crate::schedule::day::{CanonicalDay, DayMatch};
use crate::schedule::grid::{GridConfig, HiddenReason, HourRow, Placement, SlotGeometry};

/// A session drawn in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedSlot {
    pub slot: TimeSlot,
    pub day: CanonicalDay,
    pub start: ClockTime,
    pub end: ClockTime,
    pub row: usize,
    pub geometry: SlotGeometry,
}

/// A session left out of the grid, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenSlot {
    pub slot: TimeSlot,
    #[serde(flatten)]
    pub reason: HiddenReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayColumn {
    pub day: CanonicalDay,
    /// One entry per hourly row.
    pub cells: Vec<Vec<PlacedSlot>>,
}

/// Monday to Saturday grid of a set of sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTimetable {
    pub config: GridConfig,
    pub rows: Vec<HourRow>,
    pub columns: Vec<DayColumn>,
    pub hidden: Vec<HiddenSlot>,
}

/// Lay out one session against the grid.
pub fn layout_slot(slot: TimeSlot, config: &GridConfig) -> Result<PlacedSlot, HiddenSlot> {
    let day = match slot.day_match() {
        DayMatch::Canonical(day) => day,
        DayMatch::Unmatched(raw) => {
            return Err(HiddenSlot {
                slot,
                reason: HiddenReason::UnmatchedDay { day: raw },
            });
        }
    };

    let times = ClockTime::parse(&slot.start_time)
        .map_err(|_| slot.start_time.clone())
        .and_then(|start| {
            ClockTime::parse(&slot.end_time)
                .map(|end| (start, end))
                .map_err(|_| slot.end_time.clone())
        });
    let (start, end) = match times {
        Ok(times) => times,
        Err(value) => {
            return Err(HiddenSlot {
                slot,
                reason: HiddenReason::InvalidTime { value },
            });
        }
    };

    match config.place(start, end) {
        Placement::Visible { row, geometry } => Ok(PlacedSlot {
            slot,
            day,
            start,
            end,
            row,
            geometry,
        }),
        Placement::Hidden(reason) => Err(HiddenSlot { slot, reason }),
    }
}

impl WeeklyTimetable {
    /// Build the week. Never fails: sessions that cannot be drawn end up in
    /// [`WeeklyTimetable::hidden`].
    pub fn build(slots: impl IntoIterator<Item = TimeSlot>, config: GridConfig) -> Self {
        let rows = config.rows();
        let mut columns: Vec<DayColumn> = CanonicalDay::ALL
            .iter()
            .map(|day| DayColumn {
                day: *day,
                cells: vec![Vec::new(); rows.len()],
            })
            .collect();
        let mut hidden = Vec::new();

        for slot in slots {
            match layout_slot(slot, &config) {
                Ok(placed) => {
                    let (column, row) = (placed.day.index(), placed.row);
                    columns[column].cells[row].push(placed);
                }
                Err(skipped) => hidden.push(skipped),
            }
        }

        for column in &mut columns {
            for cell in &mut column.cells {
                cell.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.slot.id.cmp(&b.slot.id)));
            }
        }

        Self {
            config,
            rows,
            columns,
            hidden,
        }
    }

    pub fn column(&self, day: CanonicalDay) -> &DayColumn {
        &self.columns[day.index()]
    }

    pub fn cell(&self, day: CanonicalDay, row: usize) -> &[PlacedSlot] {
        self.column(day)
            .cells
            .get(row)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sessions of one day, earliest first.
    pub fn slots_for(&self, day: CanonicalDay) -> impl Iterator<Item = &PlacedSlot> {
        self.column(day).cells.iter().flatten()
    }

    pub fn placed_count(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.cells.iter().map(Vec::len).sum::<usize>())
            .sum()
    }

    /// Minutes of drawn sessions on `day`, clipped to the grid window.
    pub fn scheduled_minutes(&self, day: CanonicalDay) -> u32 {
        let window_end = self.config.window_end();
        self.slots_for(day)
            .map(|placed| u32::from(placed.end.min(window_end).minutes() - placed.start.minutes()))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time_slot::RecordId;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn slot(id: &str, day: &str, start: &str, end: &str) -> TimeSlot {
        TimeSlot {
            id: RecordId::from(id),
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            room: Some("A-101".to_string()),
            group_id: None,
            group_name: None,
        }
    }

    #[rstest]
    #[case("Mon")]
    #[case("lunes")]
    #[case("LUNES")]
    #[case("Monday")]
    fn test_monday_slot_only_in_monday_column(#[case] raw_day: &str) {
        let week = WeeklyTimetable::build(
            vec![slot("1", raw_day, "08:00", "10:00")],
            GridConfig::default(),
        );

        assert_eq!(week.placed_count(), 1);
        assert_eq!(week.cell(CanonicalDay::Lunes, 1).len(), 1);
        for day in CanonicalDay::ALL.iter().filter(|d| **d != CanonicalDay::Lunes) {
            assert_eq!(week.slots_for(*day).count(), 0, "unexpected slot on {}", day);
        }
    }

    #[test]
    fn test_multi_hour_slot_bucketed_by_start() {
        let week = WeeklyTimetable::build(
            vec![slot("1", "Wed", "09:30", "12:00")],
            GridConfig::default(),
        );

        let placed = &week.cell(CanonicalDay::Miercoles, 2)[0];
        assert_eq!(placed.geometry.top_px, 150.0);
        assert_eq!(placed.geometry.height_px, 150.0);
        assert!(week.cell(CanonicalDay::Miercoles, 3).is_empty());
    }

    #[test]
    fn test_hidden_slots_carry_reasons() {
        let week = WeeklyTimetable::build(
            vec![
                slot("1", "Domingo", "09:00", "10:00"),
                slot("2", "Fri", "09:00", "09:05"),
                slot("3", "Thu", "nine", "10:00"),
                slot("4", "Tue", "05:00", "06:00"),
                slot("5", "Sat", "10:00", "10:00"),
            ],
            GridConfig::default(),
        );

        let reasons: Vec<HiddenReason> = week.hidden.iter().map(|h| h.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                HiddenReason::UnmatchedDay {
                    day: "Domingo".to_string()
                },
                HiddenReason::BelowMinimumHeight { height_px: 5.0 },
                HiddenReason::InvalidTime {
                    value: "nine".to_string()
                },
                HiddenReason::OutsideWindow,
                HiddenReason::EmptyRange,
            ]
        );
        assert!(week.is_empty());
    }

    #[test]
    fn test_cells_sorted_by_start() {
        let week = WeeklyTimetable::build(
            vec![
                slot("b", "Tue", "10:45", "11:45"),
                slot("a", "Tue", "10:00", "10:45"),
            ],
            GridConfig::default(),
        );

        let ids: Vec<&str> = week
            .cell(CanonicalDay::Martes, 3)
            .iter()
            .map(|p| p.slot.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_scheduled_minutes_per_day() {
        let week = WeeklyTimetable::build(
            vec![
                slot("1", "Thu", "08:00", "10:00"),
                slot("2", "jueves", "18:00", "20:00"),
                slot("3", "Fri", "08:00", "09:00"),
            ],
            GridConfig::default(),
        );

        assert_eq!(week.scheduled_minutes(CanonicalDay::Jueves), 180);
        assert_eq!(week.scheduled_minutes(CanonicalDay::Viernes), 60);
        assert_eq!(week.scheduled_minutes(CanonicalDay::Sabado), 0);
    }

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let week = WeeklyTimetable::build(Vec::new(), GridConfig::default());
        assert!(week.cell(CanonicalDay::Lunes, 99).is_empty());
        assert_eq!(week.rows.len(), 12);
        assert_eq!(week.columns.len(), 6);
    }

    #[test]
    fn test_hidden_slot_json_is_flat() {
        let week = WeeklyTimetable::build(
            vec![slot("7", "xyz", "09:00", "10:00")],
            GridConfig::default(),
        );

        let json = serde_json::to_value(&week.hidden[0]).unwrap();
        assert_eq!(json["reason"], "unmatchedDay");
        assert_eq!(json["day"], "xyz");
        assert_eq!(json["slot"]["id"], "7");
    }

    #[test]
    fn test_week_json_uses_camel_case() {
        let week = WeeklyTimetable::build(
            vec![
                slot("1", "Mon", "09:00", "10:00"),
                slot("2", "Tue", "09:00", "09:05"),
            ],
            GridConfig::default(),
        );

        let json = serde_json::to_value(&week).unwrap();
        let placed = &json["columns"][0]["cells"][2][0];
        assert_eq!(placed["geometry"]["topPx"], 120.0);
        assert_eq!(placed["geometry"]["heightPx"], 60.0);
        assert_eq!(placed["slot"]["startTime"], "09:00");
        assert_eq!(json["config"]["rowHeightPx"], 60.0);
        assert_eq!(json["config"]["minVisibleHeightPx"], 40.0);
        assert_eq!(json["hidden"][0]["reason"], "belowMinimumHeight");
        assert_eq!(json["hidden"][0]["heightPx"], 5.0);
    }
}

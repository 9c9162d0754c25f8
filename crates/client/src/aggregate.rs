//! # Teacher schedule aggregation
//!
//! A teacher's week is the union of the schedules of every group they
//! teach. Group schedules are requested all at once; a group whose request
//! fails is logged and reported but does not take the rest of the week
//! down with it. Only failing to list the groups is fatal.

use futures_util::future::join_all;
use serde::Serialize;
use sihra_core::errors::SihraResult;
use sihra_core::models::{group::GroupRef, time_slot::TimeSlot};
use sihra_core::schedule::{GridConfig, HiddenReason, WeeklyTimetable};
use tracing::{debug, error, info, warn};

use crate::source::ScheduleSource;

/// A group whose schedule could not be fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedGroup {
    pub group: GroupRef,
    pub error: String,
}

/// Raw sessions of every group a teacher teaches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSchedule {
    pub teacher_id: String,
    pub groups: Vec<GroupRef>,
    pub slots: Vec<TimeSlot>,
    pub failed_groups: Vec<FailedGroup>,
}

/// A teacher's week laid out on the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherTimetable {
    pub teacher_id: String,
    pub groups: Vec<GroupRef>,
    pub timetable: WeeklyTimetable,
    pub failed_groups: Vec<FailedGroup>,
}

/// Fetch the schedules of `groups` concurrently.
///
/// Returns the sessions of the groups that answered, each tagged with its
/// group, in group order, plus the groups that did not.
pub async fn collect_group_slots<S>(source: &S, groups: &[GroupRef]) -> (Vec<TimeSlot>, Vec<FailedGroup>)
where
    S: ScheduleSource + ?Sized,
{
    let results = join_all(groups.iter().map(|group| async move {
        (group, source.group_schedule(&group.id).await)
    }))
    .await;

    let mut slots = Vec::new();
    let mut failed = Vec::new();

    for (group, result) in results {
        match result {
            Ok(group_slots) => {
                debug!("Group {} ({}) has {} sessions", group.name, group.id, group_slots.len());
                slots.extend(group_slots.into_iter().map(|slot| slot.with_group(group)));
            }
            Err(e) => {
                error!("Error loading schedule for group {} ({}): {}", group.name, group.id, e);
                failed.push(FailedGroup {
                    group: group.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    (slots, failed)
}

/// All sessions of the groups taught by `teacher_id`.
pub async fn fetch_teacher_schedule<S>(source: &S, teacher_id: &str) -> SihraResult<TeacherSchedule>
where
    S: ScheduleSource + ?Sized,
{
    let groups: Vec<GroupRef> = source
        .teacher_groups(teacher_id)
        .await?
        .iter()
        .map(|group| group.reference())
        .collect();

    info!("Teacher {} teaches {} groups", teacher_id, groups.len());

    let (slots, failed_groups) = collect_group_slots(source, &groups).await;

    Ok(TeacherSchedule {
        teacher_id: teacher_id.to_string(),
        groups,
        slots,
        failed_groups,
    })
}

/// Fetch a teacher's sessions and lay them out on `grid`.
pub async fn build_teacher_timetable<S>(
    source: &S,
    teacher_id: &str,
    grid: GridConfig,
) -> SihraResult<TeacherTimetable>
where
    S: ScheduleSource + ?Sized,
{
    let schedule = fetch_teacher_schedule(source, teacher_id).await?;
    let timetable = WeeklyTimetable::build(schedule.slots, grid);

    for hidden in &timetable.hidden {
        match &hidden.reason {
            HiddenReason::UnmatchedDay { day } => {
                warn!("Session {} has unrecognised day {:?}; not shown", hidden.slot.id, day)
            }
            HiddenReason::InvalidTime { value } => {
                warn!("Session {} has invalid time {:?}; not shown", hidden.slot.id, value)
            }
            reason => debug!("Session {} not shown: {:?}", hidden.slot.id, reason),
        }
    }

    Ok(TeacherTimetable {
        teacher_id: schedule.teacher_id,
        groups: schedule.groups,
        timetable,
        failed_groups: schedule.failed_groups,
    })
}

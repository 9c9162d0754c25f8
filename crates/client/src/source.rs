use async_trait::async_trait;
use sihra_core::errors::SihraResult;
use sihra_core::models::{group::Group, time_slot::{RecordId, TimeSlot}};

/// Where teacher groups and group schedules come from.
///
/// [`crate::SihraApi`] is the production implementation; tests substitute
/// mocks.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Groups taught by `teacher_id`.
    async fn teacher_groups(&self, teacher_id: &str) -> SihraResult<Vec<Group>>;

    /// Sessions of one group.
    async fn group_schedule(&self, group_id: &RecordId) -> SihraResult<Vec<TimeSlot>>;
}

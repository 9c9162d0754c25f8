use serde::{Deserialize, Serialize};

use crate::models::group::GroupRef;
use crate::schedule::day::{DayMatch, normalize_day};

/// Opaque identifier as sent by the SIHRA API.
///
/// Upstream is inconsistent about ids: some endpoints send `"42"`, others
/// send `42`. Both decode to the same value and always serialize as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Integer(i64),
}

impl From<WireId> for RecordId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(text) => RecordId(text),
            WireId::Integer(n) => RecordId(n.to_string()),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id.to_string())
    }
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled class session as returned by `GET /groups/{id}/schedules`.
///
/// Fields are kept as received; day and times are interpreted by the
/// schedule layout, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: RecordId,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, alias = "location")]
    pub room: Option<String>,
    #[serde(default)]
    pub group_id: Option<RecordId>,
    #[serde(default)]
    pub group_name: Option<String>,
}

impl TimeSlot {
    /// Normalized day of this session.
    pub fn day_match(&self) -> DayMatch {
        normalize_day(&self.day)
    }

    /// Fill the group back-reference from the group the record was fetched for.
    ///
    /// Values already present on the record win.
    pub fn with_group(mut self, group: &GroupRef) -> Self {
        if self.group_id.is_none() {
            self.group_id = Some(group.id.clone());
        }
        if self.group_name.is_none() {
            self.group_name = Some(group.name.clone());
        }
        self
    }
}

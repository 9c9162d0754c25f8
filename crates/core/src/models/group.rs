use serde::{Deserialize, Serialize};

use crate::models::time_slot::RecordId;

/// A subject offering taught by one teacher, as listed by
/// `GET /teachers/{id}/groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: RecordId,
    #[serde(alias = "groupName")]
    pub name: String,
    #[serde(default, alias = "subject")]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<RecordId>,
}

/// Weak reference to a group, carried by slots and failure reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    pub id: RecordId,
    pub name: String,
}

impl Group {
    pub fn reference(&self) -> GroupRef {
        GroupRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

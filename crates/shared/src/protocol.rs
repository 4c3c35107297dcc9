use serde::{Deserialize, Serialize};

use crate::domain::EmployeeId;

/// A persisted employee record as returned by the server.
///
/// The id is server-assigned; a value of this type always refers to a row
/// that exists remotely. Wire field names are camelCase to match the
/// collection resource's JSON schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request payload for create and update. Never carries an id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
}

impl EmployeeDraft {
    /// Snapshot of a record's field values, dropping its identity.
    pub fn from_record(record: &Employee) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email_id: record.email_id.clone(),
        }
    }

    /// Presence check used to gate submission; no further validation.
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email_id.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty() && self.email_id.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// A scheduled or completed interview for a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub interview_id: i64, // ⇔ Interviews.interviewID
    pub role_id: i64,      // ⇔ Interviews.roleID (NOT NULL, FK)
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub notes: Option<String>,
    pub kind: Option<String>, // ⇔ Interviews.type (phone, onsite, panel, ...)
}

impl Interview {
    pub fn new(role_id: i64) -> Self {
        Self {
            role_id,
            ..Self::default()
        }
    }
}

use serde::{Deserialize, Serialize};

/// A company being tracked.
///
/// `company_id` is store-assigned: 0 means "not yet persisted". Every other
/// attribute except `name` is optional and round-trips as NULL, never as an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub company_id: i64,          // ⇔ Companies.companyID
    pub name: String,             // ⇔ Companies.name (NOT NULL)
    pub description: Option<String>,
    pub url: Option<String>,
    pub hq_city: Option<String>,  // ⇔ Companies.hqCity
    pub hq_state: Option<String>, // ⇔ Companies.hqState
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

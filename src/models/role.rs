use serde::{Deserialize, Serialize};

/// An open (or closed) position at a company.
///
/// The widest entity in the schema: everything past `name` is optional.
/// Salary bounds stay integers, `equity`/`referral` are tri-state
/// (yes / no / unknown), date fields are free-form TEXT like the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: i64,    // ⇔ Roles.roleID
    pub company_id: i64, // ⇔ Roles.companyID (NOT NULL, FK)
    pub name: String,    // ⇔ Roles.name (NOT NULL)
    pub url: Option<String>,
    pub description: Option<String>,
    pub cover_letter: Option<String>, // ⇔ Roles.coverLetter
    pub applied: Option<String>,      // where the application was submitted
    pub applied_date: Option<String>, // ⇔ Roles.appliedDate
    pub closed_date: Option<String>,  // ⇔ Roles.closedDate
    pub posted_range_min: Option<i64>,
    pub posted_range_max: Option<i64>,
    pub equity: Option<bool>,
    pub work_city: Option<String>,
    pub work_state: Option<String>,
    pub location: Option<String>, // onsite / hybrid / remote
    pub status: Option<String>,
    pub discovery: Option<String>, // how the role was found
    pub referral: Option<bool>,
    pub notes: Option<String>,
}

impl Role {
    pub fn new(company_id: i64, name: impl Into<String>) -> Self {
        Self {
            company_id,
            name: name.into(),
            ..Self::default()
        }
    }
}

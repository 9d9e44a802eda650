use serde::{Deserialize, Serialize};

/// A person at a company (recruiter, hiring manager, interviewer, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub contact_id: i64, // ⇔ Contacts.contactID
    pub company_id: i64, // ⇔ Contacts.companyID (NOT NULL, FK)
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub notes: Option<String>,
}

impl Contact {
    pub fn new(company_id: i64) -> Self {
        Self {
            company_id,
            ..Self::default()
        }
    }

    /// "First Last" with whichever halves are present.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(f), Some(l)) => format!("{f} {l}"),
            (Some(f), None) => f.clone(),
            (None, Some(l)) => l.clone(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_handles_missing_halves() {
        let mut c = Contact::new(1);
        assert_eq!(c.display_name(), "");
        c.first_name = Some("Ada".into());
        assert_eq!(c.display_name(), "Ada");
        c.last_name = Some("Lovelace".into());
        assert_eq!(c.display_name(), "Ada Lovelace");
    }
}

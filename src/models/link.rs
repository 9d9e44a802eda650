use serde::{Deserialize, Serialize};

/// Join row linking an interview to a contact (many-to-many).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewContact {
    pub interview_contact_id: i64, // ⇔ InterviewsContacts.interviewContactId
    pub interview_id: i64,         // ⇔ InterviewsContacts.interviewId (NOT NULL, FK)
    pub contact_id: i64,           // ⇔ InterviewsContacts.contactId (NOT NULL, FK)
}

impl InterviewContact {
    pub fn new(interview_id: i64, contact_id: i64) -> Self {
        Self {
            interview_contact_id: 0,
            interview_id,
            contact_id,
        }
    }
}

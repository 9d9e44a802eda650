pub mod company;
pub mod contact;
pub mod interview;
pub mod link;
pub mod role;

pub use company::Company;
pub use contact::Contact;
pub use interview::Interview;
pub use link::InterviewContact;
pub use role::Role;

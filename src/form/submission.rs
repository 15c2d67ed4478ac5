use serde::Serialize;

/// JSON body posted to the mail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub company: String,
    pub contact: String,
    pub about: String,
    pub budget: u32,
}

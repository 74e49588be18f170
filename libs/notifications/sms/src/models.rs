use serde::{Deserialize, Serialize};

/// Text message to be sent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sms {
    /// Unique identifier for the message
    pub id: String,
    /// Destination number, including the country code
    pub to: String,
    pub body: String,
}

impl Sms {
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            to: to.into(),
            body: body.into(),
        }
    }
}

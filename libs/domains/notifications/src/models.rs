use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Contact form submission.
///
/// Missing keys deserialize as empty strings so they are reported with the
/// same message as blank ones.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct Enquiry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub query: String,
}

impl Enquiry {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.phone, &self.query]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    /// Customer phone number, with or without the country code
    #[serde(default)]
    pub phone_number: String,
}

/// `{"message": ...}` acknowledgement body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

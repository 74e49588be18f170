use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Description stored when the client sends none
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Image path stored when the client sends none or an empty one
pub const DEFAULT_IMAGE_URL: &str = "/images/default-medicine.jpg";

/// Medicine entity as stored in the `records` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Server-assigned display ordering, unique across the catalog
    #[serde(rename = "sno")]
    pub sequence_number: i64,
    pub name: String,
    #[serde(rename = "mrp")]
    pub price: f64,
    pub category: String,
    #[serde(rename = "mfg")]
    pub manufacture_date: String,
    #[serde(rename = "exp")]
    pub expiry_date: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(rename = "imageUrl", default = "default_image_url")]
    pub image_url: String,
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

impl Medicine {
    /// Build a new record from validated input. `image_url` must already be normalized.
    pub fn new(input: CreateMedicine, sequence_number: i64, image_url: String) -> Self {
        Self {
            id: ObjectId::new(),
            sequence_number,
            name: input.name,
            price: input.price,
            category: input.category,
            manufacture_date: input.manufacture_date,
            expiry_date: input.expiry_date,
            description: input.description.unwrap_or_else(default_description),
            image_url,
        }
    }
}

/// Payload for creating a medicine.
///
/// Unknown keys are ignored, which drops any client-sent `sno` and the legacy
/// `image_url` alias.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMedicine {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Maximum retail price
    #[serde(rename = "mrp", alias = "price")]
    #[validate(range(min = 0.0, message = "mrp must not be negative"))]
    pub price: f64,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    #[serde(rename = "mfg", alias = "manufactureDate")]
    #[validate(length(min = 1, message = "mfg must not be empty"))]
    pub manufacture_date: String,
    #[serde(rename = "exp", alias = "expiryDate")]
    #[validate(length(min = 1, message = "exp must not be empty"))]
    pub expiry_date: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absolute URL, or a path relative to the public base URL
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Medicine as returned to clients, with the id rendered as a hex string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MedicineResponse {
    #[serde(rename = "_id")]
    #[schema(example = "665f1c2e9b1e8a3d4c5b6a79")]
    pub id: String,
    #[serde(rename = "sno")]
    pub sequence_number: i64,
    pub name: String,
    #[serde(rename = "mrp")]
    pub price: f64,
    pub category: String,
    #[serde(rename = "mfg")]
    pub manufacture_date: String,
    #[serde(rename = "exp")]
    pub expiry_date: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl From<Medicine> for MedicineResponse {
    fn from(m: Medicine) -> Self {
        Self {
            id: m.id.to_hex(),
            sequence_number: m.sequence_number,
            name: m.name,
            price: m.price,
            category: m.category,
            manufacture_date: m.manufacture_date,
            expiry_date: m.expiry_date,
            description: m.description,
            image_url: m.image_url,
        }
    }
}

/// `{"message": ...}` acknowledgement body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Resolve the image URL stored for a new record.
///
/// Absolute URLs (anything starting with `http`) pass through. Relative
/// values are joined onto `base_url` with exactly one `/`. Missing or empty
/// values become [`DEFAULT_IMAGE_URL`], left relative.
pub fn normalize_image_url(base_url: &str, image_url: Option<&str>) -> String {
    match image_url {
        None | Some("") => DEFAULT_IMAGE_URL.to_string(),
        Some(url) if url.starts_with("http") => url.to_string(),
        Some(path) => {
            let base = base_url.trim_end_matches('/');
            if path.starts_with('/') {
                format!("{}{}", base, path)
            } else {
                format!("{}/{}", base, path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:9000";

    #[test]
    fn test_relative_path_gets_base_url() {
        assert_eq!(
            normalize_image_url(BASE, Some("/images/foo.jpg")),
            "http://localhost:9000/images/foo.jpg"
        );
        assert_eq!(
            normalize_image_url(BASE, Some("images/foo.jpg")),
            "http://localhost:9000/images/foo.jpg"
        );
    }

    #[test]
    fn test_absolute_url_unchanged() {
        assert_eq!(
            normalize_image_url(BASE, Some("http://example.com/x.jpg")),
            "http://example.com/x.jpg"
        );
        assert_eq!(
            normalize_image_url(BASE, Some("https://cdn.example.com/x.jpg")),
            "https://cdn.example.com/x.jpg"
        );
    }

    #[test]
    fn test_missing_or_empty_uses_default() {
        assert_eq!(normalize_image_url(BASE, None), DEFAULT_IMAGE_URL);
        assert_eq!(normalize_image_url(BASE, Some("")), DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        assert_eq!(
            normalize_image_url("https://shop.example.com/", Some("/images/a.png")),
            "https://shop.example.com/images/a.png"
        );
    }

    #[test]
    fn test_create_payload_accepts_aliases_and_ignores_extras() {
        let input: CreateMedicine = serde_json::from_value(serde_json::json!({
            "name": "Paracetamol",
            "price": 20.5,
            "category": "Analgesic",
            "manufactureDate": "2024-01",
            "expiryDate": "2026-01",
            "sno": 99,
            "image_url": "/images/legacy.jpg"
        }))
        .unwrap();

        assert_eq!(input.price, 20.5);
        assert_eq!(input.manufacture_date, "2024-01");
        assert!(input.image_url.is_none());
        assert!(input.description.is_none());
    }

    #[test]
    fn test_validation_rejects_empty_name_and_negative_price() {
        let input: CreateMedicine = serde_json::from_value(serde_json::json!({
            "name": "",
            "mrp": -1.0,
            "category": "Analgesic",
            "mfg": "2024-01",
            "exp": "2026-01"
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("mrp") || fields.contains_key("price"));
    }

    #[test]
    fn test_new_applies_description_default() {
        let input: CreateMedicine = serde_json::from_value(serde_json::json!({
            "name": "Cetirizine",
            "mrp": 35.0,
            "category": "Antihistamine",
            "mfg": "2024-03",
            "exp": "2026-03"
        }))
        .unwrap();

        let medicine = Medicine::new(input, 4, DEFAULT_IMAGE_URL.to_string());
        assert_eq!(medicine.sequence_number, 4);
        assert_eq!(medicine.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_response_uses_wire_names() {
        let medicine = Medicine {
            id: ObjectId::new(),
            sequence_number: 1,
            name: "Paracetamol".to_string(),
            price: 20.5,
            category: "Analgesic".to_string(),
            manufacture_date: "2024-01".to_string(),
            expiry_date: "2026-01".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        };
        let hex = medicine.id.to_hex();

        let json = serde_json::to_value(MedicineResponse::from(medicine)).unwrap();
        assert_eq!(json["_id"], hex);
        assert_eq!(json["sno"], 1);
        assert_eq!(json["mrp"], 20.5);
        assert_eq!(json["mfg"], "2024-01");
        assert_eq!(json["exp"], "2026-01");
        assert_eq!(json["imageUrl"], DEFAULT_IMAGE_URL);
    }
}

//! Medicines Domain
//!
//! The medicine catalog: records with a server-assigned sequence number,
//! stored in the MongoDB `records` collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/records)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, sequence numbers, image URLs
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + MongoDB and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_medicines::{handlers, MedicineService, MongoMedicineRepository};
//!
//! let repository = MongoMedicineRepository::new(db);
//! repository.init_indexes().await?;
//! let service = MedicineService::new(repository, "http://localhost:9000");
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{MedicineError, MedicineResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryMedicineRepository;
pub use models::{
    CreateMedicine, DEFAULT_DESCRIPTION, DEFAULT_IMAGE_URL, Medicine, MedicineResponse,
    normalize_image_url,
};
pub use self::mongodb::MongoMedicineRepository;
pub use repository::MedicineRepository;
pub use service::MedicineService;

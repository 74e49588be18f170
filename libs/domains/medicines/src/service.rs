//! Medicine Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{MedicineError, MedicineResult};
use crate::models::{CreateMedicine, Medicine, normalize_image_url};
use crate::repository::MedicineRepository;

/// Catalog operations on top of a [`MedicineRepository`].
///
/// Sequence numbers are read-then-assigned without locking, so two creates
/// racing on the same `max + 1` are separated only by the unique index: the
/// loser fails with [`MedicineError::DuplicateSequenceNumber`].
pub struct MedicineService<R: MedicineRepository> {
    repository: Arc<R>,
    public_base_url: Arc<str>,
}

impl<R: MedicineRepository> MedicineService<R> {
    /// `public_base_url` prefixes relative image paths, e.g. `http://localhost:9000`
    pub fn new(repository: R, public_base_url: impl Into<String>) -> Self {
        Self {
            repository: Arc::new(repository),
            public_base_url: Arc::from(public_base_url.into()),
        }
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_medicine(&self, input: CreateMedicine) -> MedicineResult<Medicine> {
        input
            .validate()
            .map_err(|e| MedicineError::Validation(e.to_string()))?;

        let next = self
            .repository
            .max_sequence_number()
            .await?
            .map_or(1, |max| max + 1);

        let image_url = normalize_image_url(&self.public_base_url, input.image_url.as_deref());
        let medicine = Medicine::new(input, next, image_url);

        self.repository.create(medicine).await
    }

    #[instrument(skip(self))]
    pub async fn list_medicines(&self) -> MedicineResult<Vec<Medicine>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_medicine(&self, id: &str) -> MedicineResult<Medicine> {
        let oid = parse_id(id)?;
        self.repository
            .get_by_id(oid)
            .await?
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete_medicine(&self, id: &str) -> MedicineResult<()> {
        let oid = parse_id(id)?;
        if self.repository.delete(oid).await? {
            Ok(())
        } else {
            Err(MedicineError::NotFound(id.to_string()))
        }
    }
}

impl<R: MedicineRepository> Clone for MedicineService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            public_base_url: Arc::clone(&self.public_base_url),
        }
    }
}

/// A malformed id can never match a record, so it reads as not found
fn parse_id(id: &str) -> MedicineResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| MedicineError::NotFound(id.to_string()))
}

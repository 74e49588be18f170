use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::MedicineResult;
use crate::models::Medicine;

/// Repository trait for medicine persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MedicineRepository: Send + Sync {
    /// Insert a fully built record.
    ///
    /// Fails with `DuplicateSequenceNumber` when its `sno` is already taken.
    async fn create(&self, medicine: Medicine) -> MedicineResult<Medicine>;

    /// Highest sequence number in the catalog, `None` when it is empty
    async fn max_sequence_number(&self) -> MedicineResult<Option<i64>>;

    /// All records ordered by ascending sequence number
    async fn list(&self) -> MedicineResult<Vec<Medicine>>;

    async fn get_by_id(&self, id: ObjectId) -> MedicineResult<Option<Medicine>>;

    /// Delete a record, returning whether one was removed
    async fn delete(&self, id: ObjectId) -> MedicineResult<bool>;
}

//! MongoDB implementation of MedicineRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::{FindOneOptions, FindOptions, IndexOptions},
};
use tracing::instrument;

use crate::error::{MedicineError, MedicineResult, is_duplicate_key};
use crate::models::Medicine;
use crate::repository::MedicineRepository;

/// Collection holding the catalog
pub const COLLECTION_NAME: &str = "records";

pub struct MongoMedicineRepository {
    collection: Collection<Medicine>,
}

impl MongoMedicineRepository {
    /// ```ignore
    /// let db = client.database("medikart");
    /// let repo = MongoMedicineRepository::new(db);
    /// repo.init_indexes().await?;
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Medicine>(COLLECTION_NAME);
        Self { collection }
    }

    /// Ensure the unique `sno` index exists. Safe to call on every startup.
    pub async fn init_indexes(&self) -> MedicineResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "sno": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_sno_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Medicine indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl MedicineRepository for MongoMedicineRepository {
    #[instrument(skip(self, medicine), fields(sno = medicine.sequence_number, name = %medicine.name))]
    async fn create(&self, medicine: Medicine) -> MedicineResult<Medicine> {
        match self.collection.insert_one(&medicine).await {
            Ok(_) => {
                tracing::info!(medicine_id = %medicine.id, "Medicine created successfully");
                Ok(medicine)
            }
            Err(e) if is_duplicate_key(&e) => {
                tracing::warn!(sno = medicine.sequence_number, "Sequence number collision");
                Err(MedicineError::DuplicateSequenceNumber(
                    medicine.sequence_number,
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn max_sequence_number(&self) -> MedicineResult<Option<i64>> {
        let options = FindOneOptions::builder().sort(doc! { "sno": -1 }).build();
        let last = self
            .collection
            .find_one(doc! {})
            .with_options(options)
            .await?;
        Ok(last.map(|m| m.sequence_number))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> MedicineResult<Vec<Medicine>> {
        use futures_util::TryStreamExt;

        let options = FindOptions::builder().sort(doc! { "sno": 1 }).build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let medicines: Vec<Medicine> = cursor.try_collect().await?;

        Ok(medicines)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> MedicineResult<Option<Medicine>> {
        let medicine = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(medicine)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> MedicineResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(medicine_id = %id, "Medicine deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}

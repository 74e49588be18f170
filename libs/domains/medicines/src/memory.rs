//! In-memory implementation of MedicineRepository for tests and local runs

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{MedicineError, MedicineResult};
use crate::models::Medicine;
use crate::repository::MedicineRepository;

#[derive(Clone, Default)]
pub struct InMemoryMedicineRepository {
    records: Arc<RwLock<HashMap<ObjectId, Medicine>>>,
}

impl InMemoryMedicineRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MedicineRepository for InMemoryMedicineRepository {
    async fn create(&self, medicine: Medicine) -> MedicineResult<Medicine> {
        let mut records = self.records.write().await;

        if records
            .values()
            .any(|m| m.sequence_number == medicine.sequence_number)
        {
            return Err(MedicineError::DuplicateSequenceNumber(
                medicine.sequence_number,
            ));
        }

        records.insert(medicine.id, medicine.clone());
        Ok(medicine)
    }

    async fn max_sequence_number(&self) -> MedicineResult<Option<i64>> {
        let records = self.records.read().await;
        Ok(records.values().map(|m| m.sequence_number).max())
    }

    async fn list(&self) -> MedicineResult<Vec<Medicine>> {
        let records = self.records.read().await;
        let mut result: Vec<Medicine> = records.values().cloned().collect();
        result.sort_by_key(|m| m.sequence_number);
        Ok(result)
    }

    async fn get_by_id(&self, id: ObjectId) -> MedicineResult<Option<Medicine>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn delete(&self, id: ObjectId) -> MedicineResult<bool> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_DESCRIPTION, DEFAULT_IMAGE_URL};

    fn medicine(sno: i64) -> Medicine {
        Medicine {
            id: ObjectId::new(),
            sequence_number: sno,
            name: format!("medicine-{}", sno),
            price: 10.0,
            category: "General".to_string(),
            manufacture_date: "2024-01".to_string(),
            expiry_date: "2026-01".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_sorted_by_sequence_number() {
        let repo = InMemoryMedicineRepository::new();
        for sno in [3, 1, 2] {
            repo.create(medicine(sno)).await.unwrap();
        }

        let snos: Vec<i64> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|m| m.sequence_number)
            .collect();
        assert_eq!(snos, vec![1, 2, 3]);
        assert_eq!(repo.max_sequence_number().await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_duplicate_sequence_number_rejected() {
        let repo = InMemoryMedicineRepository::new();
        repo.create(medicine(1)).await.unwrap();

        let err = repo.create(medicine(1)).await.unwrap_err();
        assert!(matches!(err, MedicineError::DuplicateSequenceNumber(1)));
    }

    #[tokio::test]
    async fn test_delete_and_get() {
        let repo = InMemoryMedicineRepository::new();
        let created = repo.create(medicine(1)).await.unwrap();

        assert!(repo.get_by_id(created.id).await.unwrap().is_some());
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert_eq!(repo.max_sequence_number().await.unwrap(), None);
    }
}

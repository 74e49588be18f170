//! MongoDB repository integration tests
//!
//! Require Docker; run with `cargo test -- --ignored`.

use domain_medicines::*;
use ::mongodb::bson::oid::ObjectId;
use test_utils::{TestDataBuilder, TestMongo};

fn medicine(builder: &TestDataBuilder, sno: i64) -> Medicine {
    Medicine {
        id: ObjectId::new(),
        sequence_number: sno,
        name: builder.name("medicine", &sno.to_string()),
        price: builder.price(),
        category: "Antibiotic".to_string(),
        manufacture_date: "2024-05".to_string(),
        expiry_date: "2026-05".to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        image_url: DEFAULT_IMAGE_URL.to_string(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unique_index_rejects_duplicate_sno() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_duplicate_sno");
    let repo = MongoMedicineRepository::new(mongo.database(&builder.database_name()));
    repo.init_indexes().await.unwrap();

    repo.create(medicine(&builder, 1)).await.unwrap();
    let err = repo.create(medicine(&builder, 1)).await.unwrap_err();

    assert!(matches!(err, MedicineError::DuplicateSequenceNumber(1)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_is_sorted_and_max_tracks_sno() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_sorted");
    let repo = MongoMedicineRepository::new(mongo.database(&builder.database_name()));
    repo.init_indexes().await.unwrap();

    assert_eq!(repo.max_sequence_number().await.unwrap(), None);

    for sno in [2, 3, 1] {
        repo.create(medicine(&builder, sno)).await.unwrap();
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
#[ignore = "requires Docker"]
async fn test_service_round_trip_against_mongo() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_service");
    let repo = MongoMedicineRepository::new(mongo.database(&builder.database_name()));
    repo.init_indexes().await.unwrap();
    let service = MedicineService::new(repo, "http://localhost:9000");

    let input: CreateMedicine = serde_json::from_value(serde_json::json!({
        "name": builder.name("medicine", "svc"),
        "mrp": 12.5,
        "category": "Antacid",
        "mfg": "2024-02",
        "exp": "2025-02",
        "imageUrl": "images/antacid.png"
    }))
    .unwrap();

    let created = service.create_medicine(input).await.unwrap();
    assert_eq!(created.sequence_number, 1);
    assert_eq!(created.image_url, "http://localhost:9000/images/antacid.png");

    let fetched = service.get_medicine(&created.id.to_hex()).await.unwrap();
    assert_eq!(fetched, created);

    service.delete_medicine(&created.id.to_hex()).await.unwrap();
    assert!(matches!(
        service.get_medicine(&created.id.to_hex()).await,
        Err(MedicineError::NotFound(_))
    ));
}

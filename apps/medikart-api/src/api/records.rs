//! Records API routes
//!
//! Wires the medicines domain to its MongoDB collection.

use axum::Router;
use domain_medicines::{MedicineService, MongoMedicineRepository, handlers};
use mongodb::Database;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoMedicineRepository::new(state.db.clone());
    let service = MedicineService::new(repository, state.config.public_base_url.clone());

    handlers::router(service)
}

/// Create the unique `sno` index before serving
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoMedicineRepository::new(db.clone())
        .init_indexes()
        .await?;
    Ok(())
}

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, NotFoundResponse, StorageErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::MedicineResult;
use crate::models::{CreateMedicine, MedicineResponse, MessageResponse};
use crate::repository::MedicineRepository;
use crate::service::MedicineService;

/// OpenAPI documentation for the Records API
#[derive(OpenApi)]
#[openapi(
    paths(list_medicines, create_medicine, get_medicine, delete_medicine),
    components(
        schemas(MedicineResponse, CreateMedicine, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            StorageErrorResponse
        )
    ),
    tags(
        (name = "Records", description = "Medicine catalog (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the records router with all HTTP endpoints
pub fn router<R: MedicineRepository + 'static>(service: MedicineService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_medicines).post(create_medicine))
        .route("/{id}", get(get_medicine).delete(delete_medicine))
        .with_state(shared_service)
}

/// List all medicines ordered by sequence number
#[utoipa::path(
    get,
    path = "",
    tag = "Records",
    responses(
        (status = 200, description = "All medicines, ascending by sno", body = Vec<MedicineResponse>),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn list_medicines<R: MedicineRepository>(
    State(service): State<Arc<MedicineService<R>>>,
) -> MedicineResult<Json<Vec<MedicineResponse>>> {
    let medicines = service.list_medicines().await?;
    Ok(Json(medicines.into_iter().map(Into::into).collect()))
}

/// Add a medicine; the server assigns its sequence number
#[utoipa::path(
    post,
    path = "",
    tag = "Records",
    request_body = CreateMedicine,
    responses(
        (status = 201, description = "Medicine created", body = MedicineResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn create_medicine<R: MedicineRepository>(
    State(service): State<Arc<MedicineService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateMedicine>,
) -> MedicineResult<impl IntoResponse> {
    let medicine = service.create_medicine(input).await?;
    Ok((StatusCode::CREATED, Json(MedicineResponse::from(medicine))))
}

/// Get a medicine by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Records",
    params(
        ("id" = String, Path, description = "Record id (24-character hex)")
    ),
    responses(
        (status = 200, description = "Medicine found", body = MedicineResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn get_medicine<R: MedicineRepository>(
    State(service): State<Arc<MedicineService<R>>>,
    Path(id): Path<String>,
) -> MedicineResult<Json<MedicineResponse>> {
    let medicine = service.get_medicine(&id).await?;
    Ok(Json(medicine.into()))
}

/// Delete a medicine by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Records",
    params(
        ("id" = String, Path, description = "Record id (24-character hex)")
    ),
    responses(
        (status = 200, description = "Medicine deleted", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn delete_medicine<R: MedicineRepository>(
    State(service): State<Arc<MedicineService<R>>>,
    Path(id): Path<String>,
) -> MedicineResult<Json<MessageResponse>> {
    service.delete_medicine(&id).await?;
    Ok(Json(MessageResponse {
        message: "Medicine deleted successfully".to_string(),
    }))
}

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use axum_helpers::{
    AppError,
    errors::responses::{BadRequestValidationResponse, NotificationErrorResponse},
};
use email::EmailProvider;
use sms::SmsProvider;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::enquiry::EnquiryService;
use crate::models::{Enquiry, MessageResponse, PlaceOrder};
use crate::order::OrderService;

pub const ENQUIRY_RECEIVED: &str = "Enquiry received! We'll get back to you soon.";
pub const ORDER_PLACED: &str = "Order placed successfully! SMS sent.";

/// OpenAPI documentation for the form endpoints
#[derive(OpenApi)]
#[openapi(
    paths(submit_enquiry, place_order),
    components(
        schemas(Enquiry, PlaceOrder, MessageResponse),
        responses(BadRequestValidationResponse, NotificationErrorResponse)
    ),
    tags(
        (name = "Notifications", description = "Enquiry email and order SMS")
    )
)]
pub struct ApiDoc;

/// `POST /se` and `POST /place-order`, mounted at the root
pub fn router<P, S>(enquiries: EnquiryService<P>, orders: OrderService<S>) -> Router
where
    P: EmailProvider + 'static,
    S: SmsProvider + 'static,
{
    enquiry_router(enquiries).merge(order_router(orders))
}

pub fn enquiry_router<P: EmailProvider + 'static>(service: EnquiryService<P>) -> Router {
    Router::new()
        .route("/se", post(submit_enquiry))
        .with_state(Arc::new(service))
}

pub fn order_router<S: SmsProvider + 'static>(service: OrderService<S>) -> Router {
    Router::new()
        .route("/place-order", post(place_order))
        .with_state(Arc::new(service))
}

/// Send the contact form to the shop owner
#[utoipa::path(
    post,
    path = "/se",
    tag = "Notifications",
    request_body = Enquiry,
    responses(
        (status = 200, description = "Enquiry emailed", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = NotificationErrorResponse)
    )
)]
async fn submit_enquiry<P: EmailProvider + 'static>(
    State(service): State<Arc<EnquiryService<P>>>,
    payload: Result<Json<Enquiry>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(enquiry) = payload?;
    service.submit(enquiry).await?;
    Ok(Json(MessageResponse::new(ENQUIRY_RECEIVED)))
}

/// Text the customer an order confirmation
#[utoipa::path(
    post,
    path = "/place-order",
    tag = "Notifications",
    request_body = PlaceOrder,
    responses(
        (status = 200, description = "Confirmation SMS sent", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = NotificationErrorResponse)
    )
)]
async fn place_order<S: SmsProvider + 'static>(
    State(service): State<Arc<OrderService<S>>>,
    payload: Result<Json<PlaceOrder>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(order) = payload?;
    service.notify_order_placed(&order.phone_number).await?;
    Ok(Json(MessageResponse::new(ORDER_PLACED)))
}

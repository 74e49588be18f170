//! OpenAPI documentation configuration

use utoipa::{Modify, OpenApi, openapi};

use crate::api::images::{self, ImageListResponse};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medikart API",
        version = "0.1.0",
        description = "Medicine storefront backend: catalog records, enquiries, order SMS and product images",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:9000", description = "Local development server")
    ),
    paths(images::list_images),
    components(schemas(ImageListResponse)),
    nest(
        (path = "/api/records", api = domain_medicines::ApiDoc)
    ),
    modifiers(&RootPaths),
    tags(
        (name = "Records", description = "Medicine catalog (MongoDB)"),
        (name = "Images", description = "Product images")
    )
)]
pub struct ApiDoc;

/// Notification endpoints live at the root, so they are merged rather than nested
struct RootPaths;

impl Modify for RootPaths {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        openapi.merge(domain_notifications::ApiDoc::openapi());
    }
}

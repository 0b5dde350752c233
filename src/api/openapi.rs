//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, persons};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shelf API",
        version = "1.0.0",
        description = "In-memory book and person records REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::replace_book,
        books::patch_book,
        books::delete_book,
        // Persons
        persons::list_persons,
        persons::create_person,
        persons::get_person,
        persons::replace_person,
        persons::patch_person,
        persons::delete_person,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::BookPatch,
            crate::models::Person,
            crate::models::PersonPatch,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book records"),
        (name = "persons", description = "Person records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

//! Persons API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{Person, PersonPatch},
    AppState,
};

use super::{JsonBody, RecordId};

/// List all persons
#[utoipa::path(
    get,
    path = "/persons",
    tag = "persons",
    responses(
        (status = 200, description = "Persons in creation order", body = Vec<Person>)
    )
)]
pub async fn list_persons(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.services.persons.list().await)
}

/// Create a person
#[utoipa::path(
    post,
    path = "/persons",
    tag = "persons",
    request_body = Person,
    responses(
        (status = 201, description = "Person created", body = Person),
        (status = 400, description = "Invalid body")
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    JsonBody(person): JsonBody<Person>,
) -> (StatusCode, Json<Person>) {
    let person = state.services.persons.create(person).await;
    (StatusCode::CREATED, Json(person))
}

/// Get person by ID
#[utoipa::path(
    get,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person details", body = Person),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Person>> {
    let person = state.services.persons.get_by_id(id).await?;
    Ok(Json(person))
}

/// Replace a person's fields
#[utoipa::path(
    put,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person ID")),
    request_body = Person,
    responses(
        (status = 200, description = "Person updated", body = Person),
        (status = 400, description = "Invalid ID or body"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn replace_person(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(person): JsonBody<Person>,
) -> AppResult<Json<Person>> {
    let person = state.services.persons.replace(id, person).await?;
    Ok(Json(person))
}

/// Update the fields present in the body
#[utoipa::path(
    patch,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person ID")),
    request_body = PersonPatch,
    responses(
        (status = 200, description = "Person updated", body = Person),
        (status = 400, description = "Invalid ID or body"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn patch_person(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(patch): JsonBody<PersonPatch>,
) -> AppResult<Json<Person>> {
    let person = state.services.persons.patch(id, patch).await?;
    Ok(Json(person))
}

/// Delete a person
#[utoipa::path(
    delete,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn delete_person(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<StatusCode> {
    state.services.persons.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use crate::application::donors::create::{CreateDonorRequest, CreateDonorUseCase};
use crate::application::donors::delete::DeleteDonorUseCase;
use crate::application::donors::list::ListDonorsUseCase;
use crate::application::donors::reset::ResetDonorsUseCase;
use crate::application::donors::update::{UpdateDonorRequest, UpdateDonorUseCase};
use crate::domain::donors::Donor;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// List every donor in insertion order
#[utoipa::path(
    get,
    path = "/api/donors",
    responses(
        (status = 200, description = "All donor records", body = Vec<Donor>)
    ),
    tag = "donors"
)]
pub async fn list_donors(State(state): State<AppState>) -> impl IntoResponse {
    let use_case = ListDonorsUseCase::new(state.donors.clone());
    Json(use_case.execute().await)
}

/// Register a new donor
#[utoipa::path(
    post,
    path = "/api/donors",
    request_body = CreateDonorRequest,
    responses(
        (status = 201, description = "Donor stored", body = Donor),
        (status = 400, description = "Missing or invalid donor fields", body = ErrorResponse)
    ),
    tag = "donors"
)]
pub async fn create_donor(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateDonorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateDonorUseCase::new(state.donors.clone());
    let donor = use_case.execute(req).await?;

    Ok((StatusCode::CREATED, Json(donor)))
}

/// Merge fields into an existing donor; the id never changes
#[utoipa::path(
    put,
    path = "/api/donors/{id}",
    params(("id" = String, Path, description = "Donor id")),
    request_body = UpdateDonorRequest,
    responses(
        (status = 200, description = "Merged donor record", body = Donor),
        (status = 400, description = "Invalid donor fields", body = ErrorResponse),
        (status = 404, description = "Donor not found", body = ErrorResponse)
    ),
    tag = "donors"
)]
pub async fn update_donor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateDonorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateDonorUseCase::new(state.donors.clone());
    let donor = use_case.execute(&id, req).await?;

    Ok(Json(donor))
}

/// Delete a single donor
#[utoipa::path(
    delete,
    path = "/api/donors/{id}",
    params(("id" = String, Path, description = "Donor id")),
    responses(
        (status = 204, description = "Donor deleted"),
        (status = 404, description = "Donor not found", body = ErrorResponse)
    ),
    tag = "donors"
)]
pub async fn delete_donor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = DeleteDonorUseCase::new(state.donors.clone());
    use_case.execute(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove every donor. Cannot be undone.
#[utoipa::path(
    delete,
    path = "/api/donors/reset",
    responses(
        (status = 204, description = "Donor collection cleared")
    ),
    tag = "donors"
)]
pub async fn reset_donors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let use_case = ResetDonorsUseCase::new(state.donors.clone());
    use_case.execute().await?;

    Ok(StatusCode::NO_CONTENT)
}

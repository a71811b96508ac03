use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::AuthUser, error::ApiError, state::AppState};

use super::{
    dto::{CreateCompany, UpdateCompany},
    repo::Company,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies))
        .route("/companies/:id", get(get_company))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", post(create_company))
        .route("/companies/:id", put(update_company))
        .route("/companies/:id", delete(delete_company))
}

#[instrument(skip(state))]
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = Company::list(&state.db).await?;
    Ok(Json(companies))
}

#[instrument(skip(state))]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Company>, ApiError> {
    let company = Company::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("company"))?;
    Ok(Json(company))
}

#[instrument(skip(state, _user, body))]
pub async fn create_company(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(body): Json<CreateCompany>,
) -> Result<Json<Company>, ApiError> {
    let company = Company::create(&state.db, &body).await?;
    info!(company_id = company.id, "company created");
    Ok(Json(company))
}

#[instrument(skip(state, _user, body))]
pub async fn update_company(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateCompany>,
) -> Result<Json<Company>, ApiError> {
    let company = Company::update(&state.db, id, &body)
        .await?
        .ok_or(ApiError::NotFound("company"))?;
    Ok(Json(company))
}

#[instrument(skip(state, _user))]
pub async fn delete_company(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !Company::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("company"));
    }
    info!(company_id = id, "company deleted");
    Ok(Json(serde_json::json!({})))
}

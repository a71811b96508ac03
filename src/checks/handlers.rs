use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{auth::AuthUser, error::ApiError, integrity, state::AppState};

use super::{
    dto::{CreateProductCheck, UpdateProductCheck},
    repo::ProductCheck,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products/check", get(list_checks))
        .route("/products/check/:id", get(get_check))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products/check", post(create_check))
        .route("/products/check/:id", put(update_check))
        .route("/products/check/:id", delete(delete_check))
}

#[instrument(skip(state))]
pub async fn list_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductCheck>>, ApiError> {
    let checks = ProductCheck::list(&state.db).await?;
    Ok(Json(checks))
}

#[instrument(skip(state))]
pub async fn get_check(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductCheck>, ApiError> {
    let check = ProductCheck::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("product check"))?;
    Ok(Json(check))
}

#[instrument(skip(state, _user, body))]
pub async fn create_check(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(body): Json<CreateProductCheck>,
) -> Result<Json<ProductCheck>, ApiError> {
    if !integrity::parent_exists(&state.db, "products", "id", body.product_id).await? {
        warn!(product_id = body.product_id, "check names a missing product");
        return Err(ApiError::MissingParent { parent: "product" });
    }

    let check = ProductCheck::create(&state.db, &body).await?;
    info!(check_id = check.id, product_id = check.product_id, "product check created");
    Ok(Json(check))
}

#[instrument(skip(state, _user, body))]
pub async fn update_check(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateProductCheck>,
) -> Result<Json<ProductCheck>, ApiError> {
    let check = ProductCheck::update(&state.db, id, &body)
        .await?
        .ok_or(ApiError::NotFound("product check"))?;
    Ok(Json(check))
}

#[instrument(skip(state, _user))]
pub async fn delete_check(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !ProductCheck::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("product check"));
    }
    info!(check_id = id, "product check deleted");
    Ok(Json(serde_json::json!({})))
}

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{auth::AuthUser, error::ApiError, integrity, state::AppState};

use super::{
    dto::{CreateProduct, UpdateProduct},
    repo::Product,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", put(update_product))
        .route("/products/:id", delete(delete_product))
}

#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = Product::list(&state.db).await?;
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, ApiError> {
    let product = Product::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("product"))?;
    Ok(Json(product))
}

#[instrument(skip(state, _user, body))]
pub async fn create_product(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(body): Json<CreateProduct>,
) -> Result<Json<Product>, ApiError> {
    if !integrity::parent_exists(&state.db, "companies", "id", body.company_id).await? {
        warn!(company_id = body.company_id, "product names a missing company");
        return Err(ApiError::MissingParent { parent: "company" });
    }

    let product = Product::create(&state.db, &body).await?;
    info!(product_id = product.id, company_id = product.company_id, "product created");
    Ok(Json(product))
}

#[instrument(skip(state, _user, body))]
pub async fn update_product(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateProduct>,
) -> Result<Json<Product>, ApiError> {
    let product = Product::update(&state.db, id, &body)
        .await?
        .ok_or(ApiError::NotFound("product"))?;
    Ok(Json(product))
}

#[instrument(skip(state, _user))]
pub async fn delete_product(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !Product::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("product"));
    }
    info!(product_id = id, "product deleted");
    Ok(Json(serde_json::json!({})))
}

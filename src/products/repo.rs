use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::dto::{CreateProduct, UpdateProduct};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub company_id: i32,
}

impl Product {
    pub async fn list(db: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, description, company_id
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, description, company_id
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &PgPool, body: &CreateProduct) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (title, description, company_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, company_id
            "#,
        )
        .bind(&body.title)
        .bind(&body.description)
        .bind(body.company_id)
        .fetch_one(db)
        .await
    }

    /// Merge-patch: absent fields keep their stored value.
    pub async fn update(
        db: &PgPool,
        id: i32,
        body: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET title       = COALESCE($2, title),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING id, title, description, company_id
            "#,
        )
        .bind(id)
        .bind(&body.title)
        .bind(&body.description)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

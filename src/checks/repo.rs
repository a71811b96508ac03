use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::Date;

use super::dto::{CheckCategory, CreateProductCheck, UpdateProductCheck};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductCheck {
    pub id: i32,
    pub category: CheckCategory,
    pub date: Date,
    pub product_id: i32,
}

impl ProductCheck {
    pub async fn list(db: &PgPool) -> Result<Vec<ProductCheck>, sqlx::Error> {
        sqlx::query_as::<_, ProductCheck>(
            r#"
            SELECT id, category, date, product_id
            FROM product_checks
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<ProductCheck>, sqlx::Error> {
        sqlx::query_as::<_, ProductCheck>(
            r#"
            SELECT id, category, date, product_id
            FROM product_checks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &PgPool, body: &CreateProductCheck) -> Result<ProductCheck, sqlx::Error> {
        sqlx::query_as::<_, ProductCheck>(
            r#"
            INSERT INTO product_checks (category, date, product_id)
            VALUES ($1, $2, $3)
            RETURNING id, category, date, product_id
            "#,
        )
        .bind(body.category)
        .bind(body.date)
        .bind(body.product_id)
        .fetch_one(db)
        .await
    }

    /// Merge-patch: absent fields keep their stored value.
    pub async fn update(
        db: &PgPool,
        id: i32,
        body: &UpdateProductCheck,
    ) -> Result<Option<ProductCheck>, sqlx::Error> {
        sqlx::query_as::<_, ProductCheck>(
            r#"
            UPDATE product_checks
            SET category = COALESCE($2, category),
                date     = COALESCE($3, date)
            WHERE id = $1
            RETURNING id, category, date, product_id
            "#,
        )
        .bind(id)
        .bind(body.category)
        .bind(body.date)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_checks WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::dto::{CreateCompany, UpdateCompany};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i32,
    pub title: String,
    pub category: Option<String>,
    pub address: Option<String>,
}

impl Company {
    pub async fn list(db: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        sqlx::query_as::<_, Company>(
            r#"
            SELECT id, title, category, address
            FROM companies
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<Company>, sqlx::Error> {
        sqlx::query_as::<_, Company>(
            r#"
            SELECT id, title, category, address
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &PgPool, body: &CreateCompany) -> Result<Company, sqlx::Error> {
        sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (title, category, address)
            VALUES ($1, $2, $3)
            RETURNING id, title, category, address
            "#,
        )
        .bind(&body.title)
        .bind(&body.category)
        .bind(&body.address)
        .fetch_one(db)
        .await
    }

    /// Merge-patch: absent fields keep their stored value.
    pub async fn update(
        db: &PgPool,
        id: i32,
        body: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET title    = COALESCE($2, title),
                category = COALESCE($3, category),
                address  = COALESCE($4, address)
            WHERE id = $1
            RETURNING id, title, category, address
            "#,
        )
        .bind(id)
        .bind(&body.title)
        .bind(&body.category)
        .bind(&body.address)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

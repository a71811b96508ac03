use sqlx::PgPool;

/// Single-field existence check against a parent table, run before a child
/// insert. `table` and `column` are always static identifiers from the
/// calling repo, never user input.
pub async fn parent_exists(
    db: &PgPool,
    table: &'static str,
    column: &'static str,
    value: i32,
) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(&exists_query(table, column))
        .bind(value)
        .fetch_one(db)
        .await?;
    Ok(exists)
}

fn exists_query(table: &str, column: &str) -> String {
    format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE {column} = $1)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_targets_the_parent_table() {
        assert_eq!(
            exists_query("companies", "id"),
            "SELECT EXISTS (SELECT 1 FROM companies WHERE id = $1)"
        );
    }
}

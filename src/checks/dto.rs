use serde::{Deserialize, Serialize};
use time::Date;

/// Closed set of inspection categories. Stored as the `check_category`
/// Postgres enum; anything outside the set fails deserialization before any
/// database work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "check_category", rename_all = "lowercase")]
pub enum CheckCategory {
    Sugar,
    Alcohol,
    Water,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductCheck {
    pub category: CheckCategory,
    pub date: Date,
    pub product_id: i32,
}

/// Merge-patch body. `product_id` is deliberately absent: the inspected
/// product cannot change after creation.
#[derive(Debug, Deserialize)]
pub struct UpdateProductCheck {
    #[serde(default)]
    pub category: Option<CheckCategory>,
    #[serde(default)]
    pub date: Option<Date>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_the_closed_set() {
        for (raw, expected) in [
            ("\"sugar\"", CheckCategory::Sugar),
            ("\"alcohol\"", CheckCategory::Alcohol),
            ("\"water\"", CheckCategory::Water),
        ] {
            let parsed: CheckCategory = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn category_rejects_values_outside_the_set() {
        assert!(serde_json::from_str::<CheckCategory>("\"meat\"").is_err());
        assert!(serde_json::from_str::<CheckCategory>("\"Sugar\"").is_err());
    }

    #[test]
    fn create_parses_iso_date() {
        let body: CreateProductCheck = serde_json::from_str(
            r#"{"category":"water","date":"2024-03-01","product_id":2}"#,
        )
        .unwrap();
        assert_eq!(body.category, CheckCategory::Water);
        assert_eq!(body.product_id, 2);
        assert_eq!(body.date, time::macros::date!(2024 - 03 - 01));
    }

    #[test]
    fn create_rejects_bad_category_before_anything_else() {
        let err = serde_json::from_str::<CreateProductCheck>(
            r#"{"category":"meat","date":"2024-03-01","product_id":2}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn update_with_partial_body() {
        let body: UpdateProductCheck = serde_json::from_str(r#"{"category":"sugar"}"#).unwrap();
        assert_eq!(body.category, Some(CheckCategory::Sugar));
        assert!(body.date.is_none());
    }
}

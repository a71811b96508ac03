use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub company_id: i32,
}

/// Merge-patch body. `company_id` is deliberately absent: the owning company
/// cannot change after creation.
#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_title_and_company() {
        let body: CreateProduct =
            serde_json::from_str(r#"{"title":"Widget","company_id":1}"#).unwrap();
        assert_eq!(body.title, "Widget");
        assert_eq!(body.company_id, 1);
        assert!(body.description.is_none());

        assert!(serde_json::from_str::<CreateProduct>(r#"{"title":"Widget"}"#).is_err());
    }

    #[test]
    fn update_ignores_company_id() {
        let body: UpdateProduct =
            serde_json::from_str(r#"{"title":"X","company_id":99}"#).unwrap();
        assert_eq!(body.title.as_deref(), Some("X"));
    }

    #[test]
    fn update_with_partial_body() {
        let body: UpdateProduct = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert_eq!(body.title.as_deref(), Some("X"));
        assert!(body.description.is_none());
    }
}

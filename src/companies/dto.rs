use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCompany {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Merge-patch body: only the fields present in the request change.
#[derive(Debug, Deserialize)]
pub struct UpdateCompany {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_title_only() {
        let body: CreateCompany = serde_json::from_str(r#"{"title":"Acme"}"#).unwrap();
        assert_eq!(body.title, "Acme");
        assert!(body.category.is_none());
        assert!(body.address.is_none());

        assert!(serde_json::from_str::<CreateCompany>(r#"{"category":"food"}"#).is_err());
    }

    #[test]
    fn update_with_empty_body_touches_nothing() {
        let body: UpdateCompany = serde_json::from_str("{}").unwrap();
        assert!(body.title.is_none());
        assert!(body.category.is_none());
        assert!(body.address.is_none());
    }

    #[test]
    fn update_with_one_field_leaves_the_rest_unset() {
        let body: UpdateCompany = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert_eq!(body.title.as_deref(), Some("X"));
        assert!(body.category.is_none());
        assert!(body.address.is_none());
    }
}

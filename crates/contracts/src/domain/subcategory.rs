use serde::{Deserialize, Serialize, Serializer};

use crate::domain::category::CategoryStatus;
use crate::shared::validation::{check_required, check_slug, FieldError};

// ============================================================================
// Record
// ============================================================================

/// Subcategory belongs to exactly one category; `categoryId` is fixed at
/// creation and the update form keeps the field disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "metaTitle", default)]
    pub meta_title: String,
    #[serde(rename = "metaDescription", default)]
    pub meta_description: String,
    #[serde(default)]
    pub status: CategoryStatus,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "isHomepage", default)]
    pub is_homepage: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubcategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,
    pub description: String,
    #[serde(rename = "metaTitle")]
    pub meta_title: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
    pub status: CategoryStatus,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "isHomepage")]
    pub is_homepage: bool,
}

impl SubcategoryPayload {
    pub fn from_record(record: &Subcategory) -> Self {
        Self {
            name: record.name.clone(),
            slug: record.slug.clone(),
            description: record.description.clone(),
            meta_title: record.meta_title.clone(),
            meta_description: record.meta_description.clone(),
            status: record.status,
            category_id: record.category_id.clone(),
            is_homepage: record.is_homepage,
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "name", &self.name, "Name");
        check_required(&mut errors, "categoryId", &self.category_id, "Category");
        check_slug(&mut errors, "slug", &self.slug);
        errors
    }

    pub fn finalize(mut self) -> Self {
        if self.meta_title.trim().is_empty() {
            self.meta_title = self.name.trim().to_string();
        }
        if self.meta_description.trim().is_empty() {
            self.meta_description = self.description.trim().to_string();
        }
        self.name = self.name.trim().to_string();
        self.slug = self.slug.trim().to_string();
        self
    }

    pub fn into_update(self) -> SubcategoryUpdatePayload {
        SubcategoryUpdatePayload {
            name: self.name,
            slug: self.slug,
            description: self.description,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            status: self.status,
            is_homepage: self.is_homepage,
        }
    }
}

fn bool_as_string<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}

/// Update body. `categoryId` is omitted (immutable), and the update endpoint
/// expects `isHomepage` as the string `"true"`/`"false"`.
#[derive(Debug, Clone, Serialize)]
pub struct SubcategoryUpdatePayload {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,
    pub description: String,
    #[serde(rename = "metaTitle")]
    pub meta_title: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
    pub status: CategoryStatus,
    #[serde(rename = "isHomepage", serialize_with = "bool_as_string")]
    pub is_homepage: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SubcategoryPayload {
        SubcategoryPayload {
            name: "Annual Returns".into(),
            category_id: "64aa00000000000000000001".into(),
            is_homepage: true,
            ..Default::default()
        }
    }

    #[test]
    fn category_is_required() {
        let mut p = payload();
        p.category_id.clear();
        let errors = p.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "categoryId");
    }

    #[test]
    fn update_serializes_homepage_flag_as_string() {
        let body = serde_json::to_value(payload().into_update()).unwrap();
        assert_eq!(body["isHomepage"], serde_json::json!("true"));
        assert!(body.get("categoryId").is_none());
    }

    #[test]
    fn create_keeps_homepage_flag_boolean() {
        let body = serde_json::to_value(payload()).unwrap();
        assert_eq!(body["isHomepage"], serde_json::json!(true));
    }
}

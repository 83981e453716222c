use serde::{Deserialize, Serialize};

use crate::shared::validation::{check_required, check_slug, FieldError};

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "archived")]
    Archived,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Archived => "archived",
        }
    }
}

impl Default for CategoryStatus {
    fn default() -> Self {
        CategoryStatus::Active
    }
}

/// Category as stored by the backend. Timestamps stay ISO strings on the
/// wire; the frontend formats them for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
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
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

// ============================================================================
// Payload
// ============================================================================

/// Create/update body. The same shape serves both operations; update is
/// addressed by id in the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,
    pub description: String,
    #[serde(rename = "metaTitle")]
    pub meta_title: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
    pub status: CategoryStatus,
}

impl CategoryPayload {
    pub fn from_record(record: &Category) -> Self {
        Self {
            name: record.name.clone(),
            slug: record.slug.clone(),
            description: record.description.clone(),
            meta_title: record.meta_title.clone(),
            meta_description: record.meta_description.clone(),
            status: record.status,
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "name", &self.name, "Name");
        check_slug(&mut errors, "slug", &self.slug);
        errors
    }

    /// Apply fallback defaults at submit time: blank meta fields inherit the
    /// visible ones. The record at rest keeps whatever the user typed.
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let payload = CategoryPayload::default();
        let errors = payload.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "name");
    }

    #[test]
    fn finalize_fills_meta_from_visible_fields() {
        let payload = CategoryPayload {
            name: "Company Law".into(),
            description: "Filings under the Companies Act".into(),
            ..Default::default()
        }
        .finalize();
        assert_eq!(payload.meta_title, "Company Law");
        assert_eq!(payload.meta_description, "Filings under the Companies Act");
    }

    #[test]
    fn finalize_keeps_explicit_meta() {
        let payload = CategoryPayload {
            name: "Company Law".into(),
            meta_title: "Company Law | Filings".into(),
            ..Default::default()
        }
        .finalize();
        assert_eq!(payload.meta_title, "Company Law | Filings");
    }
}

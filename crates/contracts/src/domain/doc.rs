use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    DEFAULT_MEDIA_ID, DRAFT_CATEGORY_ID, EXCERPT_MAX_LEN, EXCERPT_MIN_LEN, MAX_DOC_TAGS,
    TITLE_MAX_LEN, TITLE_MIN_LEN,
};
use crate::shared::validation::{check_bounded, check_required, check_slug, FieldError};

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocStatus {
    #[serde(rename = "draft")]
    Draft,
    #[serde(rename = "published")]
    Published,
    #[serde(rename = "archived")]
    Archived,
}

impl DocStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocStatus::Draft => "draft",
            DocStatus::Published => "published",
            DocStatus::Archived => "archived",
        }
    }
}

impl Default for DocStatus {
    fn default() -> Self {
        DocStatus::Draft
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doc {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    /// Opaque HTML; editing happens in a plain textarea here.
    #[serde(default)]
    pub content: String,
    #[serde(rename = "categoryId", default)]
    pub category_id: String,
    #[serde(rename = "subcategoryId", default)]
    pub subcategory_id: Option<String>,
    #[serde(rename = "metaTitle", default)]
    pub meta_title: String,
    #[serde(rename = "metaDescription", default)]
    pub meta_description: String,
    #[serde(rename = "headerImageId", default)]
    pub header_image_id: Option<String>,
    #[serde(rename = "thumbnailId", default)]
    pub thumbnail_id: Option<String>,
    #[serde(rename = "isFeatured", default)]
    pub is_featured: bool,
    #[serde(rename = "tagIds", default)]
    pub tag_ids: Vec<String>,
    #[serde(default)]
    pub status: DocStatus,
    #[serde(rename = "isHomepage", default)]
    pub is_homepage: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

// ============================================================================
// Payload
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocPayload {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "subcategoryId", skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    #[serde(rename = "metaTitle")]
    pub meta_title: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
    #[serde(rename = "headerImageId", skip_serializing_if = "Option::is_none")]
    pub header_image_id: Option<String>,
    #[serde(rename = "thumbnailId", skip_serializing_if = "Option::is_none")]
    pub thumbnail_id: Option<String>,
    #[serde(rename = "isFeatured")]
    pub is_featured: bool,
    #[serde(rename = "tagIds")]
    pub tag_ids: Vec<String>,
    pub status: DocStatus,
    #[serde(rename = "isHomepage")]
    pub is_homepage: bool,
}

impl DocPayload {
    pub fn from_record(record: &Doc) -> Self {
        Self {
            title: record.title.clone(),
            slug: record.slug.clone(),
            excerpt: record.excerpt.clone(),
            content: record.content.clone(),
            category_id: record.category_id.clone(),
            subcategory_id: record.subcategory_id.clone(),
            meta_title: record.meta_title.clone(),
            meta_description: record.meta_description.clone(),
            header_image_id: record.header_image_id.clone(),
            thumbnail_id: record.thumbnail_id.clone(),
            is_featured: record.is_featured,
            tag_ids: record.tag_ids.clone(),
            status: record.status,
            is_homepage: record.is_homepage,
        }
    }

    /// Draft docs may be saved half-finished; everything else must be
    /// complete. The slug shape and tag cap hold in every status.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_slug(&mut errors, "slug", &self.slug);
        if self.tag_ids.len() > MAX_DOC_TAGS {
            errors.push(FieldError::new(
                "tagIds",
                format!("A doc can carry at most {} tags", MAX_DOC_TAGS),
            ));
        }

        if self.status == DocStatus::Draft {
            return errors;
        }

        check_bounded(
            &mut errors,
            "title",
            &self.title,
            "Title",
            TITLE_MIN_LEN,
            TITLE_MAX_LEN,
        );
        if self.category_id.trim().is_empty() || self.category_id == DRAFT_CATEGORY_ID {
            errors.push(FieldError::new("categoryId", "Category is required"));
        }
        check_bounded(
            &mut errors,
            "excerpt",
            &self.excerpt,
            "Excerpt",
            EXCERPT_MIN_LEN,
            EXCERPT_MAX_LEN,
        );
        check_required(&mut errors, "content", &self.content, "Content");
        if self.tag_ids.is_empty() {
            errors.push(FieldError::new("tagIds", "Select at least one tag"));
        }

        errors
    }

    /// Submit-time defaults: blank meta fields inherit title/excerpt, and
    /// missing images fall back to the shared placeholder media record.
    pub fn finalize(mut self) -> Self {
        if self.meta_title.trim().is_empty() {
            self.meta_title = self.title.trim().to_string();
        }
        if self.meta_description.trim().is_empty() {
            self.meta_description = self.excerpt.trim().to_string();
        }
        let blank = |id: &Option<String>| id.as_deref().map_or(true, |v| v.trim().is_empty());
        if blank(&self.header_image_id) {
            self.header_image_id = Some(DEFAULT_MEDIA_ID.to_string());
        }
        if blank(&self.thumbnail_id) {
            self.thumbnail_id = Some(DEFAULT_MEDIA_ID.to_string());
        }
        self.title = self.title.trim().to_string();
        self.slug = self.slug.trim().to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn published() -> DocPayload {
        DocPayload {
            title: "Understanding Form MGT-7".into(),
            excerpt: "Annual return filing explained".into(),
            content: "<p>Every company files MGT-7...</p>".into(),
            category_id: "64aa00000000000000000002".into(),
            tag_ids: vec!["t1".into()],
            status: DocStatus::Published,
            ..Default::default()
        }
    }

    #[test]
    fn draft_bypasses_required_fields() {
        let p = DocPayload {
            status: DocStatus::Draft,
            ..Default::default()
        };
        assert!(p.validate().is_empty());
    }

    #[test]
    fn published_requires_title() {
        let mut p = published();
        p.title.clear();
        let errors = p.validate();
        assert_eq!(errors[0].path, "title");
        assert_eq!(errors[0].message, "Title is required");
    }

    #[test]
    fn published_rejects_sentinel_category() {
        let mut p = published();
        p.category_id = DRAFT_CATEGORY_ID.to_string();
        let errors = p.validate();
        assert!(errors.iter().any(|e| e.path == "categoryId"));
    }

    #[test]
    fn published_requires_one_to_five_tags() {
        let mut p = published();
        p.tag_ids.clear();
        assert!(p.validate().iter().any(|e| e.path == "tagIds"));

        p.tag_ids = (0..6).map(|i| format!("t{}", i)).collect();
        assert!(p.validate().iter().any(|e| e.path == "tagIds"));

        p.tag_ids.truncate(5);
        assert!(p.validate().is_empty());
    }

    #[test]
    fn tag_cap_applies_to_drafts_too() {
        let p = DocPayload {
            status: DocStatus::Draft,
            tag_ids: (0..6).map(|i| format!("t{}", i)).collect(),
            ..Default::default()
        };
        assert!(p.validate().iter().any(|e| e.path == "tagIds"));
    }

    #[test]
    fn title_bounds() {
        let mut p = published();
        p.title = "Four".into();
        assert!(p
            .validate()
            .iter()
            .any(|e| e.path == "title" && e.message.contains("at least 5")));
        p.title = "x".repeat(161);
        assert!(p
            .validate()
            .iter()
            .any(|e| e.path == "title" && e.message.contains("at most 160")));
    }

    #[test]
    fn finalize_applies_meta_and_image_fallbacks() {
        let p = published().finalize();
        assert_eq!(p.meta_title, "Understanding Form MGT-7");
        assert_eq!(p.meta_description, "Annual return filing explained");
        assert_eq!(p.header_image_id.as_deref(), Some(DEFAULT_MEDIA_ID));
        assert_eq!(p.thumbnail_id.as_deref(), Some(DEFAULT_MEDIA_ID));
    }

    #[test]
    fn finalize_keeps_uploaded_image_ids() {
        let mut p = published();
        p.header_image_id = Some("media-123".into());
        let p = p.finalize();
        assert_eq!(p.header_image_id.as_deref(), Some("media-123"));
        assert_eq!(p.thumbnail_id.as_deref(), Some(DEFAULT_MEDIA_ID));
    }
}

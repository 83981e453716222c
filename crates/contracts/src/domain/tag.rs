use serde::{Deserialize, Serialize};

use crate::shared::validation::{check_required, check_slug, FieldError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagPayload {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,
}

impl TagPayload {
    pub fn from_record(record: &Tag) -> Self {
        Self {
            name: record.name.clone(),
            slug: record.slug.clone(),
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_required(&mut errors, "name", &self.name, "Name");
        check_slug(&mut errors, "slug", &self.slug);
        errors
    }

    pub fn finalize(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.slug = self.slug.trim().to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_shape_is_checked_when_present() {
        let p = TagPayload {
            name: "Strike Off".into(),
            slug: "Strike Off".into(),
        };
        let errors = p.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "slug");
    }
}

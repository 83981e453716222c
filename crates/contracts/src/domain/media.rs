use serde::{Deserialize, Serialize};

/// Media record created by the upload endpoint and referenced by id from
/// doc image fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
}

use contracts::companies::public_document::{CompanyKind, PublicDocument};
use contracts::shared::list::ListResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the full public-document set for one registry entity. Fetched once
/// per CIN; all filtering afterwards is client-side.
pub async fn fetch_public_documents(
    cin: &str,
    kind: CompanyKind,
) -> Result<Vec<PublicDocument>, String> {
    let cin = urlencoding::encode(cin);
    let path = match kind {
        CompanyKind::CompanyV2 => {
            format!("/companies/company-public-documents?cin={}&version=v2", cin)
        }
        CompanyKind::CompanyV3 => {
            format!("/companies/company-public-documents?cin={}&version=v3", cin)
        }
        CompanyKind::Llp => format!("/companies/llp-public-documents?cin={}", cin),
    };

    let response = Request::get(&api_url(&path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch public documents: {}",
            response.status()
        ));
    }

    response
        .json::<ListResponse<PublicDocument>>()
        .await
        .map(|body| body.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

//! Public filing documents served by the companies API, read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which registry entity the documents belong to. Companies exist in two
/// filing-system versions; only v3 filings carry a form id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyKind {
    CompanyV2,
    CompanyV3,
    Llp,
}

impl CompanyKind {
    pub fn has_form_ids(&self) -> bool {
        matches!(self, CompanyKind::CompanyV3)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanyKind::CompanyV2 => "Company (V2)",
            CompanyKind::CompanyV3 => "Company (V3)",
            CompanyKind::Llp => "LLP",
        }
    }
}

/// Category label used for documents bucketed by attachment keyword.
pub const OTHER_ATTACHMENTS_CATEGORY: &str = "Other Attachments";

/// Normalized label for the several source spellings of director-change
/// filings.
pub const CHANGE_IN_DIRECTORS_CATEGORY: &str = "Change in Directors";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicDocument {
    #[serde(rename = "fileName", default)]
    pub file_name: String,
    #[serde(rename = "documentCategory", default)]
    pub document_category: String,
    #[serde(rename = "attachmentLabel", default)]
    pub attachment_label: Option<String>,
    /// Wire format varies between `DD-MM-YYYY`, `DD/MM/YYYY` and ISO.
    #[serde(rename = "filingDate", default)]
    pub filing_date: String,
    /// Present for v3 company filings only.
    #[serde(rename = "formId", default)]
    pub form_id: Option<String>,
    #[serde(rename = "fileUrl", default)]
    pub file_url: String,
}

impl PublicDocument {
    /// Facet label for the category filter. Attachment-flavoured rows are
    /// bucketed together, and the various "Change in Directors" source
    /// strings collapse to one label.
    pub fn normalized_category(&self) -> String {
        if let Some(label) = &self.attachment_label {
            let label = label.to_lowercase();
            if label.contains("optional") || label.contains("attachment") {
                return OTHER_ATTACHMENTS_CATEGORY.to_string();
            }
        }
        if self
            .document_category
            .to_lowercase()
            .contains("change in directors")
        {
            return CHANGE_IN_DIRECTORS_CATEGORY.to_string();
        }
        self.document_category.clone()
    }

    pub fn parse_filing_date(&self) -> Option<NaiveDate> {
        parse_filing_date(&self.filing_date)
    }

    pub fn filing_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.parse_filing_date().map(|d| d.year())
    }
}

pub fn parse_filing_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // ISO timestamps keep only the date part
    let date_part = value.split('T').next().unwrap_or(value);
    for format in ["%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(category: &str, attachment: Option<&str>) -> PublicDocument {
        PublicDocument {
            file_name: "x.pdf".into(),
            document_category: category.into(),
            attachment_label: attachment.map(Into::into),
            filing_date: "01-04-2023".into(),
            form_id: None,
            file_url: String::new(),
        }
    }

    #[test]
    fn attachment_rows_bucket_into_other_attachments() {
        let d = doc("Annual Returns", Some("Optional Attachment - 1"));
        assert_eq!(d.normalized_category(), OTHER_ATTACHMENTS_CATEGORY);
    }

    #[test]
    fn director_change_spellings_collapse() {
        for source in [
            "Change in Directors",
            "Change in Directors/Designated Partners",
            "CHANGE IN DIRECTORS (DIR-12)",
        ] {
            assert_eq!(
                doc(source, None).normalized_category(),
                CHANGE_IN_DIRECTORS_CATEGORY
            );
        }
    }

    #[test]
    fn plain_categories_pass_through() {
        assert_eq!(
            doc("Incorporation Documents", None).normalized_category(),
            "Incorporation Documents"
        );
    }

    #[test]
    fn filing_dates_parse_in_all_wire_formats() {
        for (raw, expected) in [
            ("01-04-2023", (2023, 4, 1)),
            ("15/08/2019", (2019, 8, 15)),
            ("2021-12-31", (2021, 12, 31)),
            ("2021-12-31T10:20:30.000Z", (2021, 12, 31)),
        ] {
            let date = parse_filing_date(raw).unwrap();
            assert_eq!(
                date,
                NaiveDate::from_ymd_opt(expected.0, expected.1, expected.2).unwrap()
            );
        }
        assert!(parse_filing_date("n/a").is_none());
    }
}

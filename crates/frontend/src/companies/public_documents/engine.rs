//! Client-side filter/sort/pagination engine for the public-documents table.
//!
//! The server hands over the complete document set once; everything after
//! that -- faceted filtering, global search, ordering, paging, column
//! visibility -- is computed here, synchronously, with no further requests.
//! The struct lives in one `RwSignal`; the UI calls reducer methods through
//! `update` and reads derived views.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use contracts::companies::public_document::{CompanyKind, PublicDocument};
use contracts::shared::list::SortOrder;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 30, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Column {
    FileName,
    Category,
    FilingDate,
    FormId,
}

impl Column {
    pub fn label(&self) -> &'static str {
        match self {
            Column::FileName => "File name",
            Column::Category => "Category",
            Column::FilingDate => "Filing date",
            Column::FormId => "Form",
        }
    }
}

/// One document with its derived facet values, computed once per data load.
#[derive(Clone, Debug)]
pub struct Row {
    pub doc: PublicDocument,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
}

#[derive(Clone, Debug)]
pub struct VpdTable {
    rows: Vec<Row>,
    pub kind: CompanyKind,

    /// Facet counts over the whole data set, not the filtered view.
    pub category_counts: BTreeMap<String, usize>,
    pub form_id_counts: BTreeMap<String, usize>,

    // Category/form facets commit in two steps: checkboxes mutate the temp
    // set, Apply promotes it, Cancel discards it.
    pub selected_categories: BTreeSet<String>,
    pub temp_categories: BTreeSet<String>,
    pub category_menu_open: bool,

    pub selected_form_ids: BTreeSet<String>,
    pub temp_form_ids: BTreeSet<String>,
    pub form_id_menu_open: bool,

    pub selected_years: BTreeSet<i32>,
    pub search: String,
    /// User sort on the filing-date column; `None` keeps the natural
    /// newest-first order.
    pub date_sort: Option<SortOrder>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub hidden_columns: BTreeSet<Column>,
}

impl VpdTable {
    pub fn new(kind: CompanyKind, docs: Vec<PublicDocument>) -> Self {
        let rows: Vec<Row> = docs
            .into_iter()
            .map(|doc| Row {
                category: doc.normalized_category(),
                date: doc.parse_filing_date(),
                year: doc.filing_year(),
                doc,
            })
            .collect();

        let mut category_counts = BTreeMap::new();
        let mut form_id_counts = BTreeMap::new();
        for row in &rows {
            *category_counts.entry(row.category.clone()).or_insert(0) += 1;
            if let Some(form_id) = &row.doc.form_id {
                *form_id_counts.entry(form_id.clone()).or_insert(0) += 1;
            }
        }

        Self {
            rows,
            kind,
            category_counts,
            form_id_counts,
            selected_categories: BTreeSet::new(),
            temp_categories: BTreeSet::new(),
            category_menu_open: false,
            selected_form_ids: BTreeSet::new(),
            temp_form_ids: BTreeSet::new(),
            form_id_menu_open: false,
            selected_years: BTreeSet::new(),
            search: String::new(),
            date_sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            hidden_columns: BTreeSet::new(),
        }
    }

    /// Years present in the data, newest first.
    pub fn year_options(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.rows.iter().filter_map(|r| r.year).collect();
        years.into_iter().rev().collect()
    }

    // ------------------------------------------------------------------
    // Staged category facet
    // ------------------------------------------------------------------

    pub fn open_category_menu(&mut self) {
        self.temp_categories = self.selected_categories.clone();
        self.category_menu_open = true;
    }

    pub fn toggle_temp_category(&mut self, category: &str) {
        if !self.temp_categories.remove(category) {
            self.temp_categories.insert(category.to_string());
        }
    }

    pub fn apply_category_filter(&mut self) {
        self.selected_categories = self.temp_categories.clone();
        self.category_menu_open = false;
        self.page = 1;
    }

    pub fn cancel_category_filter(&mut self) {
        self.temp_categories = self.selected_categories.clone();
        self.category_menu_open = false;
    }

    // ------------------------------------------------------------------
    // Staged form-id facet (v3 filings only)
    // ------------------------------------------------------------------

    pub fn open_form_id_menu(&mut self) {
        self.temp_form_ids = self.selected_form_ids.clone();
        self.form_id_menu_open = true;
    }

    pub fn toggle_temp_form_id(&mut self, form_id: &str) {
        if !self.temp_form_ids.remove(form_id) {
            self.temp_form_ids.insert(form_id.to_string());
        }
    }

    pub fn apply_form_id_filter(&mut self) {
        self.selected_form_ids = self.temp_form_ids.clone();
        self.form_id_menu_open = false;
        self.page = 1;
    }

    pub fn cancel_form_id_filter(&mut self) {
        self.temp_form_ids = self.selected_form_ids.clone();
        self.form_id_menu_open = false;
    }

    // ------------------------------------------------------------------
    // Immediate facets and state
    // ------------------------------------------------------------------

    pub fn toggle_year(&mut self, year: i32) {
        if !self.selected_years.remove(&year) {
            self.selected_years.insert(year);
        }
        self.page = 1;
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.page = 1;
    }

    pub fn toggle_date_sort(&mut self) {
        // natural order is already newest-first, so the first click asks for
        // the inverse
        self.date_sort = match self.date_sort {
            None | Some(SortOrder::Desc) => Some(SortOrder::Asc),
            Some(SortOrder::Asc) => Some(SortOrder::Desc),
        };
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = if PAGE_SIZE_OPTIONS.contains(&size) {
            size
        } else {
            DEFAULT_PAGE_SIZE
        };
        self.page = 1;
    }

    pub fn toggle_column(&mut self, column: Column) {
        if !self.hidden_columns.remove(&column) {
            self.hidden_columns.insert(column);
        }
    }

    pub fn is_column_visible(&self, column: Column) -> bool {
        if column == Column::FormId && !self.kind.has_form_ids() {
            return false;
        }
        !self.hidden_columns.contains(&column)
    }

    /// One action back to defaults: facets, staged temps, search, sort, page.
    pub fn reset_filters(&mut self) {
        self.selected_categories.clear();
        self.temp_categories.clear();
        self.selected_form_ids.clear();
        self.temp_form_ids.clear();
        self.selected_years.clear();
        self.search.clear();
        self.date_sort = None;
        self.page = 1;
    }

    pub fn active_filter_count(&self) -> usize {
        let mut count = self.selected_categories.len() + self.selected_years.len();
        if self.kind.has_form_ids() {
            count += self.selected_form_ids.len();
        }
        if !self.search.trim().is_empty() {
            count += 1;
        }
        count
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// A row passes only if every active facet accepts it; an empty facet
    /// imposes no constraint.
    fn matches(&self, row: &Row) -> bool {
        if !self.selected_categories.is_empty() && !self.selected_categories.contains(&row.category)
        {
            return false;
        }
        if self.kind.has_form_ids() && !self.selected_form_ids.is_empty() {
            match &row.doc.form_id {
                Some(form_id) if self.selected_form_ids.contains(form_id) => {}
                _ => return false,
            }
        }
        if !self.selected_years.is_empty() {
            match row.year {
                Some(year) if self.selected_years.contains(&year) => {}
                _ => return false,
            }
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let mut haystacks = vec![
            row.doc.file_name.to_lowercase(),
            row.category.to_lowercase(),
            row.doc.filing_date.to_lowercase(),
        ];
        if self.kind.has_form_ids() {
            if let Some(form_id) = &row.doc.form_id {
                haystacks.push(form_id.to_lowercase());
            }
        }
        haystacks.iter().any(|value| value.contains(&needle))
    }

    /// Filtered rows, always sorted by filing date descending first; an
    /// explicit column sort only re-orders this set. Stable sorts keep ties
    /// in arrival order, undated rows sink to the end.
    pub fn filtered(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = self.rows.iter().filter(|r| self.matches(r)).cloned().collect();
        rows.sort_by_key(|r| Reverse(r.date.unwrap_or(NaiveDate::MIN)));
        if self.date_sort == Some(SortOrder::Asc) {
            rows.sort_by_key(|r| r.date.unwrap_or(NaiveDate::MAX));
        }
        rows
    }

    pub fn total_filtered(&self) -> usize {
        self.rows.iter().filter(|r| self.matches(r)).count()
    }

    pub fn total_pages(&self) -> usize {
        let total = self.total_filtered();
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// The visible page slice; an out-of-range page clamps to the last one.
    pub fn page_rows(&self) -> Vec<Row> {
        let rows = self.filtered();
        let page = self.page.min(self.total_pages());
        let start = (page - 1) * self.page_size;
        rows.into_iter().skip(start).take(self.page_size).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(
        name: &str,
        category: &str,
        date: &str,
        form_id: Option<&str>,
        attachment: Option<&str>,
    ) -> PublicDocument {
        PublicDocument {
            file_name: name.into(),
            document_category: category.into(),
            attachment_label: attachment.map(Into::into),
            filing_date: date.into(),
            form_id: form_id.map(Into::into),
            file_url: format!("https://files.example/{}", name),
        }
    }

    fn sample() -> Vec<PublicDocument> {
        vec![
            doc("aoc4-2021.pdf", "Annual Returns", "30-09-2021", Some("AOC-4"), None),
            doc("mgt7-2023.pdf", "Annual Returns", "01-04-2023", Some("MGT-7"), None),
            doc("dir12-2019.pdf", "Change in Directors (DIR-12)", "15/08/2019", Some("DIR-12"), None),
            doc("moa.pdf", "Incorporation Documents", "2017-01-05", Some("SPICe"), None),
            doc("extra.pdf", "Annual Returns", "02-04-2023", None, Some("Optional Attachment - 2")),
        ]
    }

    fn table() -> VpdTable {
        VpdTable::new(CompanyKind::CompanyV3, sample())
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.doc.file_name.as_str()).collect()
    }

    #[test]
    fn unfiltered_rows_come_newest_first() {
        let rows = table().filtered();
        assert_eq!(
            names(&rows),
            vec![
                "extra.pdf",
                "mgt7-2023.pdf",
                "aoc4-2021.pdf",
                "dir12-2019.pdf",
                "moa.pdf"
            ]
        );
        for pair in rows.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn date_ordering_survives_every_filter_state() {
        let mut t = table();
        t.set_search("2");
        t.toggle_year(2023);
        t.toggle_year(2019);
        let rows = t.filtered();
        assert!(!rows.is_empty());
        for pair in rows.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn explicit_ascending_sort_reorders_the_date_sorted_set() {
        let mut t = table();
        t.toggle_date_sort();
        assert_eq!(t.date_sort, Some(SortOrder::Asc));
        let rows = t.filtered();
        assert_eq!(names(&rows).first(), Some(&"moa.pdf"));
        t.toggle_date_sort();
        assert_eq!(t.date_sort, Some(SortOrder::Desc));
        assert_eq!(names(&t.filtered()).first(), Some(&"extra.pdf"));
    }

    #[test]
    fn category_counts_use_normalized_labels() {
        let t = table();
        assert_eq!(t.category_counts.get("Annual Returns"), Some(&2));
        assert_eq!(t.category_counts.get("Change in Directors"), Some(&1));
        assert_eq!(t.category_counts.get("Other Attachments"), Some(&1));
        assert_eq!(t.category_counts.get("Incorporation Documents"), Some(&1));
        assert_eq!(t.form_id_counts.get("MGT-7"), Some(&1));
    }

    #[test]
    fn empty_facets_impose_no_constraint() {
        assert_eq!(table().total_filtered(), 5);
    }

    #[test]
    fn facets_intersect() {
        let mut t = table();
        t.open_category_menu();
        t.toggle_temp_category("Annual Returns");
        t.apply_category_filter();
        assert_eq!(t.total_filtered(), 3);

        t.open_form_id_menu();
        t.toggle_temp_form_id("MGT-7");
        t.apply_form_id_filter();
        assert_eq!(names(&t.filtered()), vec!["mgt7-2023.pdf"]);

        t.toggle_year(2021);
        assert_eq!(t.total_filtered(), 0);
    }

    #[test]
    fn cancel_discards_staged_selection() {
        let mut t = table();
        t.open_category_menu();
        t.toggle_temp_category("Annual Returns");
        t.toggle_temp_category("Other Attachments");
        t.cancel_category_filter();
        assert!(t.selected_categories.is_empty());
        assert!(!t.category_menu_open);
        // reopening starts from the committed (empty) selection
        t.open_category_menu();
        assert!(t.temp_categories.is_empty());
    }

    #[test]
    fn apply_commits_staged_selection_and_closes() {
        let mut t = table();
        t.set_page(3);
        t.open_category_menu();
        t.toggle_temp_category("Annual Returns");
        t.apply_category_filter();
        assert!(t.selected_categories.contains("Annual Returns"));
        assert!(!t.category_menu_open);
        assert_eq!(t.page, 1);
    }

    #[test]
    fn checkbox_toggle_is_reversible_within_the_stage() {
        let mut t = table();
        t.open_category_menu();
        t.toggle_temp_category("Annual Returns");
        t.toggle_temp_category("Annual Returns");
        t.apply_category_filter();
        assert_eq!(t.total_filtered(), 5);
    }

    #[test]
    fn search_is_case_insensitive_over_column_values() {
        let mut t = table();
        t.set_search("ANNUAL");
        assert_eq!(t.total_filtered(), 2); // the attachment row left the category
        t.set_search("dir12");
        assert_eq!(names(&t.filtered()), vec!["dir12-2019.pdf"]);
        t.set_search("30-09-2021");
        assert_eq!(names(&t.filtered()), vec!["aoc4-2021.pdf"]);
        t.set_search("no such thing");
        assert_eq!(t.total_filtered(), 0);
    }

    #[test]
    fn form_id_search_and_facet_only_count_for_v3() {
        let mut v3 = table();
        v3.set_search("mgt-7");
        assert_eq!(v3.total_filtered(), 1);

        let mut v2 = VpdTable::new(CompanyKind::CompanyV2, sample());
        v2.set_search("mgt-7");
        assert_eq!(v2.total_filtered(), 0);

        // a committed form facet is ignored outside v3
        let mut llp = VpdTable::new(CompanyKind::Llp, sample());
        llp.open_form_id_menu();
        llp.toggle_temp_form_id("MGT-7");
        llp.apply_form_id_filter();
        assert_eq!(llp.total_filtered(), 5);
    }

    #[test]
    fn pagination_slices_locally() {
        let t = table();
        assert_eq!(t.page_rows().len(), 5);

        let many: Vec<PublicDocument> = (0..25)
            .map(|i| doc(&format!("f{i}.pdf"), "Annual Returns", "01-01-2020", None, None))
            .collect();
        let mut t = VpdTable::new(CompanyKind::CompanyV2, many);
        assert_eq!(t.total_pages(), 3);
        assert_eq!(t.page_rows().len(), 10);
        t.set_page(3);
        assert_eq!(t.page_rows().len(), 5);

        t.set_page_size(30);
        assert_eq!(t.page, 1);
        assert_eq!(t.page_rows().len(), 25);
    }

    #[test]
    fn out_of_range_page_clamps() {
        let mut t = table();
        t.set_page(99);
        assert_eq!(t.page_rows().len(), 5);
    }

    #[test]
    fn unknown_page_size_falls_back_to_default() {
        let mut t = table();
        t.set_page_size(17);
        assert_eq!(t.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn year_options_are_newest_first() {
        assert_eq!(table().year_options(), vec![2023, 2021, 2019, 2017]);
    }

    #[test]
    fn reset_clears_everything_in_one_action() {
        let mut t = table();
        t.open_category_menu();
        t.toggle_temp_category("Annual Returns");
        t.apply_category_filter();
        t.toggle_year(2023);
        t.set_search("mgt");
        t.toggle_date_sort();
        t.set_page(2);

        t.reset_filters();
        assert!(t.selected_categories.is_empty());
        assert!(t.selected_years.is_empty());
        assert!(t.search.is_empty());
        assert_eq!(t.date_sort, None);
        assert_eq!(t.page, 1);
        assert_eq!(t.total_filtered(), 5);
    }

    #[test]
    fn form_column_hidden_outside_v3() {
        let t = VpdTable::new(CompanyKind::Llp, sample());
        assert!(!t.is_column_visible(Column::FormId));

        let mut t = table();
        assert!(t.is_column_visible(Column::FormId));
        t.toggle_column(Column::Category);
        assert!(!t.is_column_visible(Column::Category));
        t.toggle_column(Column::Category);
        assert!(t.is_column_visible(Column::Category));
    }

    #[test]
    fn active_filter_count_tracks_committed_state() {
        let mut t = table();
        assert_eq!(t.active_filter_count(), 0);
        t.open_category_menu();
        t.toggle_temp_category("Annual Returns");
        // staged but not applied -- not active yet
        assert_eq!(t.active_filter_count(), 0);
        t.apply_category_filter();
        t.toggle_year(2023);
        t.set_search("mgt");
        assert_eq!(t.active_filter_count(), 3);
    }
}

use contracts::shared::list::{SortField, SortOrder};

/// Indicator for a sortable column header.
pub fn sort_indicator(active_field: SortField, order: SortOrder, field: SortField) -> &'static str {
    if active_field == field {
        match order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_only_the_active_field() {
        assert_eq!(
            sort_indicator(SortField::CreatedAt, SortOrder::Desc, SortField::CreatedAt),
            " ▼"
        );
        assert_eq!(
            sort_indicator(SortField::CreatedAt, SortOrder::Asc, SortField::CreatedAt),
            " ▲"
        );
        assert_eq!(
            sort_indicator(SortField::CreatedAt, SortOrder::Desc, SortField::UpdatedAt),
            " ⇅"
        );
    }
}

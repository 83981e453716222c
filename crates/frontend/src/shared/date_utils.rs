//! Date formatting for list columns.
//!
//! Timestamps arrive as ISO strings; formatting is plain string slicing so
//! malformed values pass through unchanged instead of erroring a whole row.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_name(number: &str) -> Option<&'static str> {
    let idx: usize = number.parse().ok()?;
    MONTHS.get(idx.checked_sub(1)?).copied()
}

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024"
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            if let Some(name) = month_name(month) {
                return format!("{} {} {}", day, name, year);
            }
        }
    }
    value.to_string()
}

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024, 14:02"
pub fn format_datetime(value: &str) -> String {
    let Some((date_part, time_part)) = value.split_once('T') else {
        return format_date(value);
    };
    let time: String = time_part.chars().take(5).collect();
    format!("{}, {}", format_date(date_part), time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_timestamps() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
        assert_eq!(format_date("2024-12-01"), "01 Dec 2024");
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15 Mar 2024, 14:02"
        );
    }

    #[test]
    fn malformed_values_pass_through() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_datetime("yesterday"), "yesterday");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
    }
}

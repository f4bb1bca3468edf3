use chrono::{NaiveDate, Utc};

/// Format an ISO `YYYY-MM-DD` date (or the date part of an ISO 8601
/// timestamp) as `dd/mm/yyyy`. Unparseable input is shown as-is.
pub fn format_iso_date(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Today's date in the wire format used by date inputs and the API.
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2025-03-09"), "09/03/2025");
        assert_eq!(format_iso_date("2025-03-09T16:52:58Z"), "09/03/2025");
        assert_eq!(format_iso_date("not a date"), "not a date");
        assert_eq!(format_iso_date(""), "");
    }
}

use chrono::{DateTime, Local, NaiveDate, Utc};

/// dd/mm/yyyy
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// dd/mm/yyyy HH:MM in the browser's time zone
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

/// "2024-05" → "05/2024"
pub fn format_month(period: &str) -> String {
    match period.split_once('-') {
        Some((year, month)) => format!("{}/{}", month, year),
        None => period.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2024");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2024-05"), "05/2024");
        assert_eq!(format_month("mayo"), "mayo");
    }
}

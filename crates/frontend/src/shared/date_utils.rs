/// Utilities for date and time formatting
///
/// Backend dates arrive as ISO strings; the UI shows them as DD-MM-YYYY.

/// Format ISO datetime string to DD-MM-YYYY HH:MM format
/// Example: "2025-03-15T14:02:26.123Z" -> "15-03-2025 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                let hhmm = time.rsplit_once(':').map(|(hm, _)| hm).unwrap_or(time);
                return format!("{}-{}-{} {}", day, month, year, hhmm);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD-MM-YYYY format
/// Example: "2025-03-15" or "2025-03-15T14:02:26Z" -> "15-03-2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}-{}-{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Current date as YYYY-MM-DD, for `<input type="date">` defaults.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Current year and 1-based month.
pub fn current_year_month() -> (i32, u32) {
    let now = js_sys::Date::new_0();
    (now.get_full_year() as i32, now.get_month() + 1)
}

/// Spanish month names, indexed by 1-based month.
pub fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ];
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2025-03-15T14:02:26.123Z"),
            "15-03-2025 14:02"
        );
        assert_eq!(format_datetime("2025-12-31T23:59:59Z"), "31-12-2025 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-15"), "15-03-2025");
        assert_eq!(format_date("2025-03-15T14:02:26.123Z"), "15-03-2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "Enero");
        assert_eq!(month_name(12), "Diciembre");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}

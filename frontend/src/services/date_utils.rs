use chrono::{Datelike, NaiveDate};
use shared::subscription::parse_date;
use shared::Language;

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// "January 15, 2025" or "15 janvier 2025"
pub fn format_long_date(date: NaiveDate, lang: Language) -> String {
    let index = date.month0() as usize;
    match lang {
        Language::En => format!("{} {}, {}", MONTHS_EN[index], date.day(), date.year()),
        Language::Fr => format!("{} {} {}", date.day(), MONTHS_FR[index], date.year()),
    }
}

/// Formats a backend date or timestamp; unparseable input is shown as is,
/// missing input as "N/A"
pub fn display_date(raw: Option<&str>, lang: Language) -> String {
    match raw {
        Some(raw) if !raw.trim().is_empty() => parse_date(raw)
            .map(|date| format_long_date(date, lang))
            .unwrap_or_else(|| raw.to_string()),
        _ => "N/A".to_string(),
    }
}

/// Age as "2 years 3 months" (or "7 months" under a year)
pub fn age_label(date_of_birth: NaiveDate, today: NaiveDate, lang: Language) -> String {
    let mut months = (today.year() - date_of_birth.year()) * 12
        + today.month() as i32
        - date_of_birth.month() as i32;
    if today.day() < date_of_birth.day() {
        months -= 1;
    }
    let months = months.max(0);
    let (years, rest) = (months / 12, months % 12);

    let (year_word, years_word, month_word, months_word) = match lang {
        Language::En => ("year", "years", "month", "months"),
        Language::Fr => ("an", "ans", "mois", "mois"),
    };
    let plural = |n: i32, one: &str, many: &str| format!("{} {}", n, if n == 1 { one } else { many });

    match (years, rest) {
        (0, m) => plural(m, month_word, months_word),
        (y, 0) => plural(y, year_word, years_word),
        (y, m) => format!("{} {}", plural(y, year_word, years_word), plural(m, month_word, months_word)),
    }
}

/// Backend age string when present, otherwise computed from the birth date
pub fn child_age(age: Option<&str>, date_of_birth: Option<&str>, lang: Language) -> String {
    if let Some(age) = age.filter(|a| !a.trim().is_empty()) {
        return age.to_string();
    }
    date_of_birth
        .and_then(parse_date)
        .map(|dob| age_label(dob, today(), lang))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_long_dates() {
        assert_eq!(format_long_date(day(2025, 1, 15), Language::En), "January 15, 2025");
        assert_eq!(format_long_date(day(2025, 8, 1), Language::Fr), "1 août 2025");
    }

    #[wasm_bindgen_test]
    fn test_display_date_fallbacks() {
        assert_eq!(display_date(None, Language::En), "N/A");
        assert_eq!(display_date(Some("soon"), Language::En), "soon");
        assert_eq!(display_date(Some("2024-12-25T08:00:00Z"), Language::En), "December 25, 2024");
    }

    #[wasm_bindgen_test]
    fn test_age_labels() {
        let today = day(2025, 6, 15);
        assert_eq!(age_label(day(2023, 3, 10), today, Language::En), "2 years 3 months");
        assert_eq!(age_label(day(2024, 6, 15), today, Language::En), "1 year");
        assert_eq!(age_label(day(2024, 11, 20), today, Language::En), "6 months");
        assert_eq!(age_label(day(2022, 6, 1), today, Language::Fr), "3 ans");
        assert_eq!(age_label(day(2026, 1, 1), today, Language::En), "0 months");
    }

    #[wasm_bindgen_test]
    fn test_backend_age_wins() {
        assert_eq!(child_age(Some("3 years"), Some("2020-01-01"), Language::En), "3 years");
        assert_eq!(child_age(None, None, Language::En), "");
    }

    #[wasm_bindgen_test]
    fn test_today_is_sane() {
        assert!(today().year() >= 2024);
    }
}

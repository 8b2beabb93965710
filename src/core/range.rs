use chrono::{Duration, Local, NaiveDate};

/// Computes the fetch window: end = today, start = end minus years * 365
/// days. No leap-year correction.
pub fn date_range(years: u32) -> (NaiveDate, NaiveDate) {
    let end = Local::now().date_naive();
    let start = end - Duration::days(i64::from(years) * 365);
    (start, end)
}

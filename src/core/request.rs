use crate::core::ConfigProvider;
use chrono::NaiveDate;

/// Builds the archive query URL. Column order follows the configured list;
/// the timezone's path separators are percent-encoded as the archive API
/// expects.
pub fn build_url<C: ConfigProvider>(config: &C, start: NaiveDate, end: NaiveDate) -> String {
    let daily = config.daily_columns().join(",");
    let timezone = config.timezone().replace('/', "%2F");

    format!(
        "{}?latitude={}&longitude={}&start_date={}&end_date={}&daily={}&timezone={}",
        config.api_endpoint(),
        config.latitude(),
        config.longitude(),
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
        daily,
        timezone
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use clap::Parser;

    fn config() -> CliConfig {
        CliConfig::parse_from(["weather-etl"])
    }

    #[test]
    fn test_url_contains_iso_dates_and_coordinates() {
        let start = NaiveDate::from_ymd_opt(2019, 8, 24).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 8, 22).unwrap();

        let url = build_url(&config(), start, end);

        assert!(url.starts_with("https://archive-api.open-meteo.com/v1/archive?"));
        assert!(url.contains("latitude=0.5143"));
        assert!(url.contains("longitude=35.2698"));
        assert!(url.contains("start_date=2019-08-24"));
        assert!(url.contains("end_date=2024-08-22"));
    }

    #[test]
    fn test_timezone_slash_is_percent_encoded() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let url = build_url(&config(), start, start);

        assert!(url.contains("timezone=Africa%2FNairobi"));
        assert!(!url.contains("Africa/Nairobi"));
    }

    #[test]
    fn test_daily_parameter_preserves_column_order() {
        let mut config = config();
        config.daily_columns = vec![
            "windspeed_10m_max".to_string(),
            "temperature_2m_min".to_string(),
            "precipitation_sum".to_string(),
        ];

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let url = build_url(&config, start, start);

        assert!(url.contains("daily=windspeed_10m_max,temperature_2m_min,precipitation_sum"));
    }
}

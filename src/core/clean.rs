use crate::domain::model::{RawColumn, RawTable, WeatherColumn, WeatherTable};
use crate::utils::error::{EtlError, Result};
use chrono::NaiveDate;
use serde_json::Value;

/// Validates the response envelope and pulls the requested columns out of
/// the `daily` parallel arrays. `null` entries become missing values; any
/// non-numeric entry is a schema error.
pub fn parse_response(raw: &Value, columns: &[String]) -> Result<RawTable> {
    let daily = raw
        .get("daily")
        .and_then(Value::as_object)
        .ok_or_else(|| EtlError::schema("missing 'daily' object in response"))?;

    let time = daily
        .get("time")
        .and_then(Value::as_array)
        .ok_or_else(|| EtlError::schema("missing 'time' array in daily data"))?;

    let dates = time
        .iter()
        .map(|entry| {
            let text = entry
                .as_str()
                .ok_or_else(|| EtlError::schema("non-string entry in 'time' array"))?;
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|e| EtlError::schema(format!("unparseable date '{}': {}", text, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut parsed = Vec::with_capacity(columns.len());
    for name in columns {
        let entries = daily
            .get(name)
            .and_then(Value::as_array)
            .ok_or_else(|| EtlError::schema(format!("missing '{}' array in daily data", name)))?;

        if entries.len() != dates.len() {
            return Err(EtlError::schema(format!(
                "column '{}' has {} entries, expected {}",
                name,
                entries.len(),
                dates.len()
            )));
        }

        let values = entries
            .iter()
            .map(|entry| match entry {
                Value::Null => Ok(None),
                Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| {
                    EtlError::schema(format!("unrepresentable number in '{}'", name))
                }),
                other => Err(EtlError::schema(format!(
                    "non-numeric entry {} in '{}'",
                    other, name
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        parsed.push(RawColumn {
            name: name.clone(),
            values,
        });
    }

    Ok(RawTable {
        dates,
        columns: parsed,
    })
}

/// Replaces missing entries with the per-column mean of the non-missing
/// values. A column with no observations at all has no defined mean and is
/// rejected as a schema error.
pub fn fill_missing(table: RawTable) -> Result<WeatherTable> {
    let missing: Vec<(String, usize)> = table
        .columns
        .iter()
        .map(|c| (c.name.clone(), c.values.iter().filter(|v| v.is_none()).count()))
        .filter(|(_, count)| *count > 0)
        .collect();

    if !missing.is_empty() {
        let report = missing
            .iter()
            .map(|(name, count)| format!("{}: {}", name, count))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!("Missing values found ({})", report);
    }

    let mut columns = Vec::with_capacity(table.columns.len());
    for column in table.columns {
        let present: Vec<f64> = column.values.iter().flatten().copied().collect();
        if present.is_empty() {
            return Err(EtlError::schema(format!(
                "column '{}' has no observations to compute a fill value from",
                column.name
            )));
        }

        let mean = present.iter().sum::<f64>() / present.len() as f64;
        let values = column
            .values
            .into_iter()
            .map(|v| v.unwrap_or(mean))
            .collect();

        columns.push(WeatherColumn {
            name: column.name,
            values,
        });
    }

    if !missing.is_empty() {
        tracing::info!("Filled missing values with column means");
    }

    Ok(WeatherTable {
        dates: table.dates,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_response_is_schema_error() {
        let err = parse_response(&json!({}), &columns(&["temperature_2m_max"])).unwrap_err();
        assert!(matches!(err, EtlError::Schema { .. }));
    }

    #[test]
    fn test_daily_must_be_an_object() {
        let raw = json!({"daily": [1, 2, 3]});
        let err = parse_response(&raw, &columns(&["temperature_2m_max"])).unwrap_err();
        assert!(matches!(err, EtlError::Schema { .. }));
    }

    #[test]
    fn test_missing_time_array_is_schema_error() {
        let raw = json!({"daily": {"temperature_2m_max": [1.0]}});
        let err = parse_response(&raw, &columns(&["temperature_2m_max"])).unwrap_err();
        assert!(matches!(err, EtlError::Schema { .. }));
    }

    #[test]
    fn test_missing_requested_column_is_schema_error() {
        let raw = json!({"daily": {"time": ["2024-01-01"]}});
        let err = parse_response(&raw, &columns(&["precipitation_sum"])).unwrap_err();
        assert!(matches!(err, EtlError::Schema { .. }));
    }

    #[test]
    fn test_length_mismatch_is_schema_error() {
        let raw = json!({"daily": {
            "time": ["2024-01-01", "2024-01-02"],
            "precipitation_sum": [1.0]
        }});
        let err = parse_response(&raw, &columns(&["precipitation_sum"])).unwrap_err();
        assert!(matches!(err, EtlError::Schema { .. }));
    }

    #[test]
    fn test_unparseable_date_is_schema_error() {
        let raw = json!({"daily": {
            "time": ["01/01/2024"],
            "precipitation_sum": [1.0]
        }});
        let err = parse_response(&raw, &columns(&["precipitation_sum"])).unwrap_err();
        assert!(matches!(err, EtlError::Schema { .. }));
    }

    #[test]
    fn test_non_numeric_entry_is_schema_error() {
        let raw = json!({"daily": {
            "time": ["2024-01-01"],
            "precipitation_sum": ["wet"]
        }});
        let err = parse_response(&raw, &columns(&["precipitation_sum"])).unwrap_err();
        assert!(matches!(err, EtlError::Schema { .. }));
    }

    #[test]
    fn test_null_becomes_missing_value() {
        let raw = json!({"daily": {
            "time": ["2024-01-01", "2024-01-02"],
            "temperature_2m_max": [20.0, null]
        }});

        let table = parse_response(&raw, &columns(&["temperature_2m_max"])).unwrap();

        assert_eq!(table.dates.len(), 2);
        assert_eq!(table.columns[0].values, vec![Some(20.0), None]);
    }

    #[test]
    fn test_fill_uses_mean_of_observed_values() {
        let raw = json!({"daily": {
            "time": ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"],
            "temperature_2m_max": [1.0, 2.0, null, 3.0]
        }});

        let parsed = parse_response(&raw, &columns(&["temperature_2m_max"])).unwrap();
        let table = fill_missing(parsed).unwrap();

        assert_eq!(table.row_count(), 4);
        assert!((table.columns[0].values[2] - 2.0).abs() < 1e-9);
        assert_eq!(table.columns[0].values[0], 1.0);
    }

    #[test]
    fn test_single_observation_fills_its_own_value() {
        // {"time": [d1, d2], "temperature_2m_max": [20.0, null]} -> both rows 20.0
        let raw = json!({"daily": {
            "time": ["2024-01-01", "2024-01-02"],
            "temperature_2m_max": [20.0, null]
        }});

        let parsed = parse_response(&raw, &columns(&["temperature_2m_max"])).unwrap();
        let table = fill_missing(parsed).unwrap();

        assert_eq!(table.row_count(), 2);
        assert!((table.columns[0].values[1] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_columns_are_filled_independently() {
        let raw = json!({"daily": {
            "time": ["2024-01-01", "2024-01-02"],
            "temperature_2m_max": [10.0, null],
            "precipitation_sum": [null, 4.0]
        }});

        let names = columns(&["temperature_2m_max", "precipitation_sum"]);
        let table = fill_missing(parse_response(&raw, &names).unwrap()).unwrap();

        assert!((table.columns[0].values[1] - 10.0).abs() < 1e-9);
        assert!((table.columns[1].values[0] - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_fully_missing_column_is_schema_error() {
        let raw = json!({"daily": {
            "time": ["2024-01-01", "2024-01-02"],
            "temperature_2m_max": [null, null]
        }});

        let parsed = parse_response(&raw, &columns(&["temperature_2m_max"])).unwrap();
        let err = fill_missing(parsed).unwrap_err();
        assert!(matches!(err, EtlError::Schema { .. }));
    }

    #[test]
    fn test_column_order_follows_request_order() {
        let raw = json!({"daily": {
            "time": ["2024-01-01"],
            "precipitation_sum": [0.0],
            "temperature_2m_max": [20.0]
        }});

        let names = columns(&["temperature_2m_max", "precipitation_sum"]);
        let table = fill_missing(parse_response(&raw, &names).unwrap()).unwrap();

        assert_eq!(
            table.column_names(),
            vec!["temperature_2m_max", "precipitation_sum"]
        );
    }

    #[test]
    fn test_integer_entries_are_accepted() {
        let raw = json!({"daily": {
            "time": ["2024-01-01"],
            "precipitation_sum": [3]
        }});

        let table = parse_response(&raw, &columns(&["precipitation_sum"])).unwrap();
        assert_eq!(table.columns[0].values, vec![Some(3.0)]);
    }
}

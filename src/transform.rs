//! Reshaping of the raw hourly series into chart labels and values

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::ClimaplotError;
use crate::models::{ChartSeries, HourlySeries, Location};

/// Format string of the timestamps Open-Meteo returns with `timezone=auto`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Convert a raw hourly series into its display-ready form.
///
/// Labels follow the widget's axis format `day/month hour:00` - 24-hour
/// clock, no leading zeros, no year (`2024-03-05T14:00` becomes `5/3 14:00`).
/// Values are copied through unchanged and stay index-aligned with the
/// input; nothing is filtered, windowed or reordered here. Thinning the
/// full 7x24 range down to readable axis ticks is the renderer's job.
pub fn to_chart_series(series: &HourlySeries, location: &Location) -> crate::Result<ChartSeries> {
    let mut labels = Vec::with_capacity(series.time.len());
    for stamp in &series.time {
        labels.push(format_label(stamp)?);
    }

    Ok(ChartSeries {
        labels,
        values: series.temperature.clone(),
        title: location.display_title(),
    })
}

fn format_label(stamp: &str) -> crate::Result<String> {
    let parsed = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .map_err(|e| ClimaplotError::data_shape(format!("bad timestamp {stamp}: {e}")))?;
    Ok(format!(
        "{}/{} {}:00",
        parsed.day(),
        parsed.month(),
        parsed.hour()
    ))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn madrid() -> Location {
        Location::new(40.4168, -3.7038, "Madrid".to_string(), "España".to_string())
    }

    #[rstest]
    #[case("2024-03-05T14:00", "5/3 14:00")]
    #[case("2024-12-31T09:00", "31/12 9:00")]
    #[case("2024-01-01T00:00", "1/1 0:00")]
    #[case("2024-10-07T23:00", "7/10 23:00")]
    fn test_label_format(#[case] stamp: &str, #[case] expected: &str) {
        assert_eq!(format_label(stamp).unwrap(), expected);
    }

    #[test]
    fn test_output_is_index_aligned_with_input() {
        let series = HourlySeries {
            time: vec![
                "2024-03-05T14:00".to_string(),
                "2024-03-05T15:00".to_string(),
                "2024-03-05T16:00".to_string(),
            ],
            temperature: vec![21.3, 20.8, 19.5],
        };

        let chart = to_chart_series(&series, &madrid()).unwrap();
        assert_eq!(chart.labels.len(), series.len());
        assert_eq!(chart.values, series.temperature);
        assert_eq!(chart.labels[1], "5/3 15:00");
        assert_eq!(chart.title, "Madrid, España");
    }

    #[test]
    fn test_transform_is_idempotent() {
        let series = HourlySeries {
            time: vec!["2024-03-05T14:00".to_string()],
            temperature: vec![21.3],
        };

        let first = to_chart_series(&series, &madrid()).unwrap();
        let second = to_chart_series(&series, &madrid()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_series_produces_empty_chart() {
        let series = HourlySeries {
            time: vec![],
            temperature: vec![],
        };

        let chart = to_chart_series(&series, &madrid()).unwrap();
        assert!(chart.labels.is_empty());
        assert!(chart.values.is_empty());
    }

    #[test]
    fn test_unparseable_timestamp_is_data_shape() {
        let series = HourlySeries {
            time: vec!["yesterday-ish".to_string()],
            temperature: vec![21.3],
        };

        let err = to_chart_series(&series, &madrid()).unwrap_err();
        assert!(matches!(err, ClimaplotError::DataShape { .. }));
    }
}

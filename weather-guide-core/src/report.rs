use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    error::WeatherError,
    forecast::{HourlyOffsets, select_offset},
    model::ForecastPayload,
    recommend::{MapLinks, Recommendation, map_links, recommend},
};

/// At or above this the guide shows a heat warning.
pub const HEAT_WARNING_C: f64 = 30.0;

/// Everything the renderer needs for one lookup, computed up front so that
/// nothing is drawn when any part of it fails.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub location_name: String,
    pub country: String,
    pub temp_c: f64,
    pub condition: String,
    pub icon_url: String,
    pub heat_warning: bool,
    pub humidity_pct: u8,
    pub wind_kph: f64,
    pub pm10: f64,
    pub pm2_5: f64,
    pub hourly: HourlyOffsets,
    pub recommendation: Recommendation,
    pub links: MapLinks,
}

impl Report {
    pub fn build(payload: &ForecastPayload, reference: NaiveDateTime) -> Result<Self, WeatherError> {
        let current = &payload.current;
        let hourly = select_offset(&payload.forecast.forecastday, reference)?;
        let recommendation = recommend(&current.condition.text, current.temp_c);
        let links = map_links(&payload.location.name, &recommendation);

        Ok(Self {
            location_name: payload.location.name.clone(),
            country: payload.location.country.clone(),
            temp_c: current.temp_c,
            condition: current.condition.text.clone(),
            icon_url: icon_url(&current.condition.icon),
            heat_warning: current.temp_c >= HEAT_WARNING_C,
            humidity_pct: current.humidity,
            wind_kph: current.wind_kph,
            pm10: current.air_quality.pm10,
            pm2_5: current.air_quality.pm2_5,
            hourly,
            recommendation,
            links,
        })
    }
}

fn icon_url(icon: &str) -> String {
    if icon.starts_with("//") { format!("https:{icon}") } else { icon.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AirQuality, Condition, Current, Forecast, ForecastDay, HourReading, Location,
    };
    use chrono::NaiveDate;

    fn payload(temp_c: f64, text: &str, days: usize) -> ForecastPayload {
        ForecastPayload {
            location: Location { name: "Asan".into(), country: "South Korea".into() },
            current: Current {
                temp_c,
                humidity: 70,
                wind_kph: 11.2,
                condition: Condition {
                    text: text.into(),
                    icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".into(),
                },
                air_quality: AirQuality { pm10: 40.25, pm2_5: 22.0 },
            },
            forecast: Forecast {
                forecastday: (0..days)
                    .map(|_| ForecastDay { hour: vec![HourReading { temp_c: 17.5 }; 24] })
                    .collect(),
            },
        }
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(hour, 30, 0).unwrap()
    }

    #[test]
    fn builds_full_report() {
        let report = Report::build(&payload(31.0, "맑음", 2), at(14)).unwrap();

        assert_eq!(report.location_name, "Asan");
        assert!(report.heat_warning);
        assert_eq!(report.icon_url, "https://cdn.weatherapi.com/weather/64x64/day/113.png");
        assert_eq!(report.recommendation.food, "냉면");
        assert_eq!(report.hourly.past_temp, 17.5);
        assert!(report.links.food.url.contains("Asan+"));
    }

    #[test]
    fn heat_warning_starts_at_thirty() {
        assert!(!Report::build(&payload(29.9, "맑음", 2), at(14)).unwrap().heat_warning);
        assert!(Report::build(&payload(30.0, "맑음", 2), at(14)).unwrap().heat_warning);
    }

    #[test]
    fn forecast_window_failure_aborts_the_whole_report() {
        let err = Report::build(&payload(15.0, "맑음", 1), at(22)).unwrap_err();
        assert!(matches!(err, WeatherError::ForecastWindow { .. }));
    }

    #[test]
    fn absolute_icon_urls_are_kept() {
        assert_eq!(icon_url("https://example.com/a.png"), "https://example.com/a.png");
    }
}

use serde::{Deserialize, Serialize};

/// Response of the WeatherAPI.com `forecast.json` endpoint, reduced to the
/// fields the guide reads. Every field is required; a payload missing one is
/// rejected rather than defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub location: Location,
    pub current: Current,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub humidity: u8,
    pub wind_kph: f64,
    pub condition: Condition,
    pub air_quality: AirQuality,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Protocol-relative, e.g. `//cdn.weatherapi.com/weather/64x64/day/113.png`.
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQuality {
    pub pm10: f64,
    pub pm2_5: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// One calendar day; `hour[h]` is the reading for hour-of-day `h`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub hour: Vec<HourReading>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HourReading {
    pub temp_c: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "location": { "name": "Seoul", "country": "South Korea", "tz_id": "Asia/Seoul" },
            "current": {
                "temp_c": 12.0,
                "humidity": 55,
                "wind_kph": 9.4,
                "condition": { "text": "맑음", "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png", "code": 1000 },
                "air_quality": { "pm10": 31.5, "pm2_5": 18.2, "co": 300.4 }
            },
            "forecast": {
                "forecastday": [
                    { "date": "2026-10-19", "hour": [ { "temp_c": 10.0, "time": "2026-10-19 00:00" } ] }
                ]
            }
        })
    }

    #[test]
    fn extra_provider_fields_are_ignored() {
        let payload: ForecastPayload = serde_json::from_value(sample()).unwrap();

        assert_eq!(payload.location.name, "Seoul");
        assert_eq!(payload.current.humidity, 55);
        assert_eq!(payload.current.air_quality.pm2_5, 18.2);
        assert_eq!(payload.forecast.forecastday[0].hour[0].temp_c, 10.0);
    }

    #[test]
    fn missing_air_quality_is_rejected() {
        let mut value = sample();
        value["current"].as_object_mut().unwrap().remove("air_quality");

        let err = serde_json::from_value::<ForecastPayload>(value).unwrap_err();
        assert!(err.to_string().contains("air_quality"));
    }

    #[test]
    fn missing_hourly_temperature_is_rejected() {
        let mut value = sample();
        value["forecast"]["forecastday"][0]["hour"][0] = json!({ "time": "2026-10-19 00:00" });

        assert!(serde_json::from_value::<ForecastPayload>(value).is_err());
    }
}

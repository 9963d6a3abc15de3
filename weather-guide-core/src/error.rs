use thiserror::Error;

/// Errors a single lookup can end with.
///
/// Every variant is terminal for the submission that produced it; nothing
/// here is retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(
        "No WeatherAPI key configured.\n\
         Hint: run `weather-guide configure` or set WEATHER_API_KEY."
    )]
    MissingApiKey,

    #[error("Failed to reach WeatherAPI.com: {0}")]
    Network(#[from] reqwest::Error),

    #[error("WeatherAPI request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected WeatherAPI payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Forecast window too short: need day {day} hour {hour}, payload has {available}")]
    ForecastWindow {
        day: usize,
        hour: u32,
        available: String,
    },
}

impl WeatherError {
    /// Short message suitable for showing next to the input prompt.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "API 키가 설정되지 않았습니다.",
            Self::Network(_) => "날씨 서버에 연결하지 못했습니다. 잠시 후 다시 시도해 주세요.",
            Self::Status { status: 400, .. } => "도시를 찾을 수 없습니다. 이름을 확인해 주세요.",
            Self::Status { status: 401 | 403, .. } => "API 키가 올바르지 않습니다.",
            Self::Status { .. } => "날씨 서버가 요청을 처리하지 못했습니다.",
            Self::Payload(_) => "날씨 데이터 형식이 올바르지 않습니다.",
            Self::ForecastWindow { .. } => "예보 데이터가 부족합니다.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_unknown_city_message() {
        let err = WeatherError::Status { status: 400, body: "No matching location".into() };
        assert!(err.user_message().contains("도시"));
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn auth_failures_point_at_the_key() {
        for status in [401, 403] {
            let err = WeatherError::Status { status, body: String::new() };
            assert!(err.user_message().contains("API 키"));
        }
    }

    #[test]
    fn missing_key_error_mentions_configure_hint() {
        let msg = WeatherError::MissingApiKey.to_string();
        assert!(msg.contains("weather-guide configure"));
        assert!(msg.contains("WEATHER_API_KEY"));
    }
}

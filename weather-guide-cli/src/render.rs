//! Text rendering of a finished report.

use std::fmt::Write;

use weather_guide_core::{Report, WeatherError};

const DIVIDER: &str = "────────────────────────────────────────";

pub fn render(report: &Report) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, r: &Report) -> std::fmt::Result {
    writeln!(out, "📍 {} ({})", r.location_name, r.country)?;
    writeln!(out, "  현재 온도: {}°C", r.temp_c)?;
    writeln!(out, "  상태: {}", r.condition)?;
    writeln!(out, "  아이콘: {}", r.icon_url)?;
    if r.heat_warning {
        writeln!(out, "  너무 더워요! 🥵")?;
    }
    writeln!(out)?;

    writeln!(out, "💧 상세 정보")?;
    writeln!(out, "  습도: {}%", r.humidity_pct)?;
    writeln!(out, "  바람 세기: {} km/h", r.wind_kph)?;
    writeln!(out)?;

    writeln!(out, "🌫️ 대기질 (AQI)")?;
    writeln!(out, "  미세먼지(PM10): {:.1}", r.pm10)?;
    writeln!(out, "  초미세먼지(PM2.5): {:.1}", r.pm2_5)?;
    writeln!(out, "{DIVIDER}")?;

    writeln!(out, "⏳ 시간대별 온도 변화 (6시간 전/후)")?;
    writeln!(out, "  🕒 6시간 전 ({}): {}°C", r.hourly.past_label(), r.hourly.past_temp)?;
    writeln!(out, "  🕒 6시간 후 ({}): {}°C", r.hourly.future_label(), r.hourly.future_temp)?;
    writeln!(out, "{DIVIDER}")?;

    writeln!(out, "🎁 날씨 맞춤 추천")?;
    writeln!(out, "  🍴 추천 메뉴: {}", r.recommendation.food)?;
    writeln!(out, "     {} → {}", r.links.food.caption, r.links.food.url)?;
    writeln!(out, "  🗺️ 추천 장소: {}", r.recommendation.place)?;
    write!(out, "     {} → {}", r.links.place.caption, r.links.place.url)?;

    Ok(())
}

pub fn render_error(err: &WeatherError) -> String {
    format!("⚠️ {}", err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weather_guide_core::model::{
        AirQuality, Condition, Current, Forecast, ForecastDay, ForecastPayload, HourReading,
        Location,
    };

    fn report(temp_c: f64) -> Report {
        let payload = ForecastPayload {
            location: Location { name: "Jeju".into(), country: "South Korea".into() },
            current: Current {
                temp_c,
                humidity: 64,
                wind_kph: 14.4,
                condition: Condition { text: "맑음".into(), icon: "//cdn/113.png".into() },
                air_quality: AirQuality { pm10: 23.456, pm2_5: 8.04 },
            },
            forecast: Forecast {
                forecastday: vec![ForecastDay { hour: vec![HourReading { temp_c: 19.5 }; 24] }; 2],
            },
        };
        let now = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(14, 5, 0).unwrap();
        Report::build(&payload, now).unwrap()
    }

    #[test]
    fn renders_every_section() {
        let text = render(&report(18.0));

        assert!(text.contains("📍 Jeju (South Korea)"));
        assert!(text.contains("현재 온도: 18°C"));
        assert!(text.contains("미세먼지(PM10): 23.5"));
        assert!(text.contains("초미세먼지(PM2.5): 8.0"));
        assert!(text.contains("6시간 전 (08:00): 19.5°C"));
        assert!(text.contains("6시간 후 (20:00): 19.5°C"));
        assert!(text.contains("추천 메뉴: 치킨과 맥주"));
        assert!(text.contains("https://www.google.com/maps/search/Jeju+"));
        assert!(!text.contains("너무 더워요"));
    }

    #[test]
    fn heat_warning_line_only_when_hot() {
        assert!(render(&report(33.0)).contains("너무 더워요"));
    }

    #[test]
    fn error_rendering_uses_the_short_message() {
        let err = WeatherError::Status { status: 503, body: "upstream down".into() };
        let text = render_error(&err);

        assert!(text.starts_with("⚠️"));
        assert!(!text.contains("upstream down"));
    }
}

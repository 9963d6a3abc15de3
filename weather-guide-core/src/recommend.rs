//! Food and outing suggestions derived from the current conditions.

use serde::Serialize;
use url::form_urlencoded;

/// Condition-text fragments (Korean provider output) that mean rain or showers.
const WET_MARKERS: &[&str] = &["비", "소나기"];

pub const HOT_THRESHOLD_C: f64 = 28.0;
pub const COLD_THRESHOLD_C: f64 = 5.0;

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub food: &'static str,
    pub place: &'static str,
}

/// First matching rule wins: wet weather, then heat, then cold, then the default.
pub fn recommend(condition_text: &str, temp_c: f64) -> Recommendation {
    let (food, place) = if WET_MARKERS.iter().any(|m| condition_text.contains(m)) {
        ("파전에 막걸리", "실내 미술관")
    } else if temp_c >= HOT_THRESHOLD_C {
        ("냉면", "워터파크")
    } else if temp_c <= COLD_THRESHOLD_C {
        ("따끈한 국밥", "실내 쇼핑몰")
    } else {
        ("치킨과 맥주", "근처 공원 산책")
    };

    Recommendation { food, place }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLink {
    pub caption: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLinks {
    pub food: MapLink,
    pub place: MapLink,
}

/// Map search links for the recommended food and place near `location_name`.
pub fn map_links(location_name: &str, rec: &Recommendation) -> MapLinks {
    MapLinks {
        food: MapLink {
            caption: format!("{location_name} {} 맛집", rec.food),
            url: search_url(&[location_name, rec.food, "맛집"]),
        },
        place: MapLink {
            caption: format!("{location_name} 주변 명소"),
            url: search_url(&[location_name, rec.place]),
        },
    }
}

fn search_url(terms: &[&str]) -> String {
    let query = terms
        .iter()
        .map(|t| form_urlencoded::byte_serialize(t.as_bytes()).collect::<String>())
        .collect::<Vec<_>>()
        .join("+");

    format!("{MAPS_SEARCH_BASE}{query}")
}

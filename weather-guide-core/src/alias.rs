//! Korean city and province names mapped to the location tokens WeatherAPI.com
//! understands.

/// Static alias table. Keys are unique.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("서울", "Seoul"),
    ("부산", "Busan"),
    ("대구", "Daegu"),
    ("인천", "Incheon"),
    ("광주", "Gwangju"),
    ("대전", "Daejeon"),
    ("울산", "Ulsan"),
    ("세종", "Sejong"),
    ("경기", "Gyeonggi-do"),
    ("수원", "Suwon"),
    ("고양", "Goyang"),
    ("용인", "Yongin"),
    ("성남", "Seongnam"),
    ("부천", "Bucheon"),
    ("화성", "Hwaseong"),
    ("안산", "Ansan"),
    ("안양", "Anyang"),
    ("평택", "Pyeongtaek"),
    ("시흥", "Siheung"),
    ("파주", "Paju"),
    ("의정부", "Uijeongbu"),
    ("김포", "Gimpo"),
    ("광명", "Gwangmyeong"),
    ("군포", "Gunpo"),
    ("강원", "Gangwon-do"),
    ("춘천", "Chuncheon"),
    ("원주", "Wonju"),
    ("강릉", "Gangneung"),
    ("충북", "Chungcheongbuk-do"),
    ("청주", "Cheongju"),
    ("충주", "Chungju"),
    ("충남", "Chungcheongnam-do"),
    ("천안", "Cheonan"),
    ("아산", "Asan"),
    ("서산", "Seosan"),
    ("당진", "Dangjin"),
    ("전북", "Jeollabuk-do"),
    ("전주", "Jeonju"),
    ("익산", "Iksan"),
    ("군산", "Gunsan"),
    ("전남", "Jeollanam-do"),
    ("여수", "Yeosu"),
    ("순천", "Suncheon"),
    ("목포", "Mokpo"),
    ("경북", "Gyeongsangbuk-do"),
    ("포항", "Pohang"),
    ("구미", "Gumi"),
    ("경주", "Gyeongju"),
    ("안동", "Andong"),
    ("경남", "Gyeongsangnam-do"),
    ("창원", "Changwon"),
    ("김해", "Gimhae"),
    ("양산", "Yangsan"),
    ("진주", "Jinju"),
    ("제주", "Jeju"),
];

/// Map user input to the provider query token.
///
/// Only an exact key match is translated; anything else (English names,
/// padded or differently-cased input) is passed through untouched.
pub fn resolve(input: &str) -> &str {
    CITY_ALIASES
        .iter()
        .find(|(korean, _)| *korean == input)
        .map(|(_, token)| *token)
        .unwrap_or(input)
}

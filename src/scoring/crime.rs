use crate::data::Suburb;

/// Applied when a suburb's LGA is missing from the reference table.
pub const DEFAULT_CRIME_RATE: f64 = 8500.00;

/// Victoria Police offence rates per 100,000 population, by local government
/// area. Review item: Merri-bek and its former name Moreland share a figure.
const CRIME_RATES: &[(&str, f64)] = &[
    ("Banyule", 8426.88),
    ("Brimbank", 9476.96),
    ("Darebin", 11790.89),
    ("Hobsons Bay", 8182.20),
    ("Hume", 8276.54),
    ("Maribyrnong", 12958.47),
    ("Melbourne", 23519.82),
    ("Melton", 7056.17),
    ("Merri-bek", 8523.31),
    ("Moonee Valley", 8050.79),
    ("Moreland", 8523.31),
    ("Nillumbik", 3245.67),
    ("Port Phillip", 14532.89),
    ("Stonnington", 10234.56),
    ("Whitehorse", 5678.90),
    ("Whittlesea", 6789.01),
    ("Wyndham", 7890.12),
    ("Yarra", 15678.90),
];

pub fn crime_rate_for_lga(lga: &str) -> f64 {
    CRIME_RATES
        .iter()
        .find(|(name, _)| *name == lga)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_CRIME_RATE)
}

pub fn crime_rate(suburb: &Suburb) -> f64 {
    crime_rate_for_lga(&suburb.lga)
}

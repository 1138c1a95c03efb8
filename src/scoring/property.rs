use super::factors::{access_scores, lifestyle_scores, location_scores};
use super::normalize::{normalize, round1};
use super::strategy::Strategy;
use super::{Factor, ScoreBreakdown};
use crate::data::{Property, Suburb, UserPreferences};
use serde::Serialize;

/// Melbourne CBD reference point for distance estimates.
const CBD_LATITUDE: f64 = -37.8136;
const CBD_LONGITUDE: f64 = 144.9631;

/// Kilometres per degree of latitude; longitude shrinks with cos(lat).
const KM_PER_DEGREE: f64 = 111.0;

/// Listing-field fallbacks for incomplete scraper output.
const DEFAULT_PRICE: f64 = 850_000.0;
const DEFAULT_LAND_SIZE: f64 = 650.0;
const DEFAULT_BEDROOMS: f64 = 3.0;
const DEFAULT_BATHROOMS: f64 = 2.0;
const DEFAULT_STREET_QUALITY: f64 = 3.0;

/// Five-tier property score against a matched suburb. The composite is
/// clamped to 100 because the feature tier is unbounded above (a very large
/// block can push it past its nominal band).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyScore {
    pub address: String,
    pub suburb: String,
    pub strategy: Strategy,
    pub composite: f64,
    pub investment: f64,
    pub location: f64,
    pub accessibility: f64,
    pub features: f64,
    pub lifestyle: f64,
    pub breakdown: ScoreBreakdown,
}

/// Listing price with the scraper-gap fallback applied.
pub(crate) fn effective_price(property: &Property) -> f64 {
    positive_or(property.price, DEFAULT_PRICE)
}

pub fn property_score(
    property: &Property,
    suburb: &Suburb,
    preferences: Option<&UserPreferences>,
) -> PropertyScore {
    let price = effective_price(property);
    let strategy = Strategy::from_property_price(price, preferences);
    let weights = strategy.property_tiers();

    // Investment: price leverage plus dwelling type. The affordability
    // component carries its 0.40 sub-weight, matching the published
    // breakdown convention.
    let affordability = normalize(1_000_000.0 / price, 0.5, 2.0, false) * 0.40;
    let type_score = property.property_type.feature_score();
    let investment = (affordability + type_score * 0.35) * weights.investment;

    let location = location_scores(suburb);
    let location_tier = location.weighted(strategy) * weights.location;

    let cbd_distance = cbd_distance_km(suburb);
    let cbd_access = normalize(cbd_distance, 0.0, 50.0, true);
    let access = access_scores(cbd_access, suburb);
    let accessibility = access.weighted() / 100.0 * weights.accessibility * 100.0;

    let land_size = positive_or(property.land_size, DEFAULT_LAND_SIZE);
    let bedrooms = positive_or(property.bedrooms, DEFAULT_BEDROOMS);
    let bathrooms = positive_or(property.bathrooms, DEFAULT_BATHROOMS);
    let street_quality = positive_or(property.street_quality, DEFAULT_STREET_QUALITY);
    let features = ((land_size / 10.0) * 0.35
        + bedrooms * 10.0 * 0.25
        + bathrooms * 12.0 * 0.25
        + street_quality * 15.0 * 0.15)
        * weights.features;

    let lifestyle = lifestyle_scores(suburb);
    let lifestyle_tier = lifestyle.weighted() / 100.0 * weights.lifestyle * 100.0;

    let composite =
        (investment + location_tier + accessibility + features + lifestyle_tier).min(100.0);

    let mut breakdown = ScoreBreakdown::new();
    breakdown.insert(Factor::Affordability, affordability);
    breakdown.insert(Factor::PropertyType, type_score);
    breakdown.insert(Factor::LandSize, land_size);
    breakdown.insert(Factor::Bedrooms, bedrooms);
    breakdown.insert(Factor::Bathrooms, bathrooms);
    breakdown.insert(Factor::StreetQuality, street_quality);
    breakdown.insert(Factor::Irsd, location.irsd);
    breakdown.insert(Factor::Ier, location.ier);
    breakdown.insert(Factor::Ieo, location.ieo);
    breakdown.insert(Factor::Crime, location.crime);
    breakdown.insert(Factor::CbdDistance, cbd_distance);
    breakdown.insert(Factor::Transit, access.transit);
    breakdown.insert(Factor::Walk, access.walk);
    breakdown.insert(Factor::Schools, lifestyle.schools);
    breakdown.insert(Factor::Parks, lifestyle.parks);
    breakdown.insert(Factor::Childcare, lifestyle.childcare);
    breakdown.insert(Factor::Shopping, lifestyle.shopping);
    breakdown.insert(Factor::Cafes, lifestyle.cafes);

    PropertyScore {
        address: property.address.clone(),
        suburb: suburb.name.clone(),
        strategy,
        composite: round1(composite),
        investment: round1(investment),
        location: round1(location_tier),
        accessibility: round1(accessibility),
        features: round1(features),
        lifestyle: round1(lifestyle_tier),
        breakdown,
    }
}

/// Flat-earth distance estimate from the suburb centroid to the CBD. Falls
/// back to a commute-time estimate (50 km per hour of commute) when either
/// coordinate is missing or zero.
fn cbd_distance_km(suburb: &Suburb) -> f64 {
    match (suburb.latitude, suburb.longitude) {
        (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => {
            let north_km = (lat - CBD_LATITUDE) * KM_PER_DEGREE;
            let east_km = (lng - CBD_LONGITUDE) * KM_PER_DEGREE * lat.to_radians().cos();
            (north_km.powi(2) + east_km.powi(2)).sqrt()
        }
        _ => suburb.commute_minutes / 60.0 * 50.0,
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(value) if value != 0.0 && value.is_finite() => value,
        _ => fallback,
    }
}

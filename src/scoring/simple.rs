//! Flat-weight calculators: a 7-factor suburb model and a 9-factor property
//! model on a 0..10 factor scale. These predate the tiered scores and are
//! kept for quick, coordinate-free estimates; `score = Σ factor · weight · 10`.

use super::normalize::round1;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 7-factor suburb ratings, each on 0..10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub location: f64,
    pub schools: f64,
    pub safety: f64,
    pub amenities: f64,
    pub transport: f64,
    pub lifestyle: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    pub location: f64,
    pub schools: f64,
    pub safety: f64,
    pub amenities: f64,
    pub transport: f64,
    pub lifestyle: f64,
    pub growth: f64,
}

/// The original weighting, heavy on location and schools.
pub const CLASSIC: FactorWeights = FactorWeights {
    location: 0.25,
    schools: 0.20,
    safety: 0.15,
    amenities: 0.15,
    transport: 0.15,
    lifestyle: 0.05,
    growth: 0.05,
};

/// Rebalanced weighting that lifts lifestyle and growth.
pub const REFINED: FactorWeights = FactorWeights {
    location: 0.20,
    schools: 0.18,
    safety: 0.15,
    amenities: 0.15,
    transport: 0.12,
    lifestyle: 0.12,
    growth: 0.08,
};

impl FactorScores {
    pub fn composite(&self, weights: &FactorWeights) -> f64 {
        let total = self.location * weights.location
            + self.schools * weights.schools
            + self.safety * weights.safety
            + self.amenities * weights.amenities
            + self.transport * weights.transport
            + self.lifestyle * weights.lifestyle
            + self.growth * weights.growth;
        round1(total * 10.0)
    }

    /// Ordered factor map for presentation (breakdown bars, insights).
    pub fn as_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("location".to_string(), self.location),
            ("schools".to_string(), self.schools),
            ("safety".to_string(), self.safety),
            ("amenities".to_string(), self.amenities),
            ("transport".to_string(), self.transport),
            ("lifestyle".to_string(), self.lifestyle),
            ("growth".to_string(), self.growth),
        ])
    }
}

/// Buyer archetype behind a quick property estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifestyleType {
    Family,
    Professional,
    Retiree,
    Investor,
    Starter,
    Investment,
    Luxury,
}

impl LifestyleType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "family" => Some(Self::Family),
            "professional" => Some(Self::Professional),
            "retiree" => Some(Self::Retiree),
            "investor" => Some(Self::Investor),
            "starter" => Some(Self::Starter),
            "investment" => Some(Self::Investment),
            "luxury" => Some(Self::Luxury),
            _ => None,
        }
    }
}

/// CBD distance ladder, in kilometres.
pub fn location_score(cbd_km: f64) -> f64 {
    if cbd_km <= 5.0 {
        10.0
    } else if cbd_km <= 10.0 {
        9.0
    } else if cbd_km <= 15.0 {
        7.5
    } else if cbd_km <= 25.0 {
        6.0
    } else {
        4.5
    }
}

/// Train-station distance ladder, in metres.
pub fn transport_score(train_m: f64) -> f64 {
    if train_m <= 400.0 {
        10.0
    } else if train_m <= 800.0 {
        9.0
    } else if train_m <= 1200.0 {
        7.5
    } else if train_m <= 2000.0 {
        6.0
    } else {
        4.5
    }
}

const MEDIAN_PRICE: f64 = 1_100_000.0;

/// Price ladder relative to the metropolitan median.
pub fn affordability_score(price: f64) -> f64 {
    let ratio = price / MEDIAN_PRICE;
    if ratio < 0.7 {
        10.0
    } else if ratio < 0.85 {
        9.0
    } else if ratio < 1.0 {
        8.0
    } else if ratio < 1.15 {
        6.5
    } else if ratio < 1.3 {
        5.0
    } else {
        3.5
    }
}

pub fn lifestyle_score(lifestyle: Option<LifestyleType>) -> f64 {
    match lifestyle {
        Some(LifestyleType::Family) => 8.8,
        Some(LifestyleType::Professional) => 8.5,
        Some(LifestyleType::Retiree) => 7.8,
        Some(LifestyleType::Investor) => 7.2,
        Some(LifestyleType::Starter) => 7.0,
        Some(LifestyleType::Investment) => 7.5,
        Some(LifestyleType::Luxury) => 9.5,
        None => 7.5,
    }
}

/// Inputs to the 9-factor quick property estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyProfile {
    pub price: f64,
    pub cbd_km: f64,
    pub train_m: f64,
    pub safety_rating: f64,
    pub lifestyle: Option<LifestyleType>,
}

impl PropertyProfile {
    /// Entry-level purchase: mid-ring, close to a station.
    pub const STARTER: PropertyProfile = PropertyProfile {
        price: 650_000.0,
        cbd_km: 12.0,
        train_m: 600.0,
        safety_rating: 7.5,
        lifestyle: Some(LifestyleType::Professional),
    };

    pub const FAMILY: PropertyProfile = PropertyProfile {
        price: 1_200_000.0,
        cbd_km: 8.0,
        train_m: 500.0,
        safety_rating: 8.5,
        lifestyle: Some(LifestyleType::Family),
    };

    pub const INVESTMENT: PropertyProfile = PropertyProfile {
        price: 850_000.0,
        cbd_km: 15.0,
        train_m: 800.0,
        safety_rating: 7.8,
        lifestyle: Some(LifestyleType::Investor),
    };

    pub const LUXURY: PropertyProfile = PropertyProfile {
        price: 2_500_000.0,
        cbd_km: 5.0,
        train_m: 300.0,
        safety_rating: 9.5,
        lifestyle: Some(LifestyleType::Retiree),
    };

    pub fn named(name: &str) -> Option<PropertyProfile> {
        match name.trim().to_ascii_lowercase().as_str() {
            "starter" => Some(Self::STARTER),
            "family" => Some(Self::FAMILY),
            "investment" => Some(Self::INVESTMENT),
            "luxury" => Some(Self::LUXURY),
            _ => None,
        }
    }

    /// Derived and fixed factors behind the composite. Amenities, schools,
    /// growth and investment carry fixed metropolitan baselines.
    pub fn factors(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("location".to_string(), location_score(self.cbd_km)),
            ("transportation".to_string(), transport_score(self.train_m)),
            ("safety".to_string(), self.safety_rating),
            ("affordability".to_string(), affordability_score(self.price)),
            ("amenities".to_string(), 8.2),
            ("schools".to_string(), 8.5),
            ("lifestyle".to_string(), lifestyle_score(self.lifestyle)),
            ("growth".to_string(), 7.8),
            ("investment".to_string(), 8.0),
        ])
    }

    pub fn composite(&self) -> f64 {
        let factors = self.factors();
        let total: f64 = factors
            .iter()
            .map(|(key, value)| value * property_weight(key) * 10.0)
            .sum();
        round1(total)
    }
}

fn property_weight(key: &str) -> f64 {
    match key {
        "location" => 0.20,
        "transportation" => 0.15,
        "safety" => 0.12,
        "affordability" => 0.10,
        "amenities" => 0.12,
        "schools" => 0.10,
        "lifestyle" => 0.08,
        "growth" => 0.08,
        "investment" => 0.05,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hawthorn() -> FactorScores {
        FactorScores {
            location: 9.5,
            schools: 9.8,
            safety: 9.2,
            amenities: 9.0,
            transport: 8.8,
            lifestyle: 9.3,
            growth: 7.5,
        }
    }

    #[test]
    fn composite_is_the_weighted_sum_times_ten() {
        // Classic: 9.5·.25 + 9.8·.20 + 9.2·.15 + 9.0·.15 + 8.8·.15 + 9.3·.05
        // + 7.5·.05, ×10 = 92.25 → 92.3; refined lands on 91.66 → 91.7
        assert_eq!(hawthorn().composite(&CLASSIC), 92.3);
        assert_eq!(hawthorn().composite(&REFINED), 91.7);
    }

    #[test]
    fn weight_presets_sum_to_one() {
        for weights in [CLASSIC, REFINED] {
            let total = weights.location
                + weights.schools
                + weights.safety
                + weights.amenities
                + weights.transport
                + weights.lifestyle
                + weights.growth;
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn ladders_hit_published_steps() {
        assert_eq!(location_score(12.0), 7.5);
        assert_eq!(location_score(5.0), 10.0);
        assert_eq!(location_score(26.0), 4.5);
        assert_eq!(transport_score(600.0), 9.0);
        assert_eq!(transport_score(400.0), 10.0);
        assert_eq!(affordability_score(650_000.0), 10.0);
        assert_eq!(affordability_score(1_100_000.0), 6.5);
        assert_eq!(affordability_score(2_500_000.0), 3.5);
    }

    #[test]
    fn unknown_lifestyle_gets_the_neutral_score() {
        assert_eq!(lifestyle_score(None), 7.5);
        assert_eq!(LifestyleType::parse("nomad"), None);
        assert_eq!(
            lifestyle_score(LifestyleType::parse("Luxury")),
            9.5
        );
    }

    #[test]
    fn starter_profile_composite() {
        let starter = PropertyProfile::STARTER;
        let factors = starter.factors();
        assert_eq!(factors["location"], 7.5);
        assert_eq!(factors["transportation"], 9.0);
        assert_eq!(factors["affordability"], 10.0);
        // 7.5·.20 + 9·.15 + 7.5·.12 + 10·.10 + 8.2·.12 + 8.5·.10 + 8.5·.08
        // + 7.8·.08 + 8·.05, ×10 = 82.88
        assert_eq!(starter.composite(), 82.9);
    }

    #[test]
    fn profiles_resolve_by_name() {
        assert_eq!(
            PropertyProfile::named("LUXURY"),
            Some(PropertyProfile::LUXURY)
        );
        assert_eq!(PropertyProfile::named("castle"), None);
    }
}

//! Tier components shared between the suburb and property scores. Both
//! scores read the same location, accessibility and lifestyle signals from
//! the matched suburb; only the investment and feature tiers differ.

use super::crime::crime_rate;
use super::normalize::normalize;
use super::strategy::Strategy;
use crate::data::Suburb;

/// SEIFA index scores plus the inverted crime-rate score, each on 0..100.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocationScores {
    pub irsd: f64,
    pub ier: f64,
    pub ieo: f64,
    pub crime: f64,
}

impl LocationScores {
    pub(crate) fn weighted(&self, strategy: Strategy) -> f64 {
        let weights = strategy.location_weights();
        self.irsd * weights.irsd
            + self.ier * weights.ier
            + self.ieo * weights.ieo
            + self.crime * weights.crime
    }
}

/// SEIFA indices rescale from their published band; the crime rate inverts
/// over the observed metropolitan range.
pub(crate) fn location_scores(suburb: &Suburb) -> LocationScores {
    LocationScores {
        irsd: normalize(suburb.irsd_score, 800.0, 1200.0, false),
        ier: normalize(suburb.ier_score, 800.0, 1200.0, false),
        ieo: normalize(suburb.ieo_score, 800.0, 1200.0, false),
        crime: normalize(crime_rate(suburb), 3000.0, 25_000.0, true),
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct AccessScores {
    pub cbd_access: f64,
    pub transit: f64,
    pub walk: f64,
}

impl AccessScores {
    pub(crate) fn weighted(&self) -> f64 {
        self.cbd_access * 0.30 + self.transit * 0.45 + self.walk * 0.25
    }
}

/// `cbd_access` is already a 0..100 score; how it is derived differs between
/// the suburb score (commute minutes) and the property score (distance).
pub(crate) fn access_scores(cbd_access: f64, suburb: &Suburb) -> AccessScores {
    AccessScores {
        cbd_access,
        transit: suburb.transit_score,
        walk: suburb.walk_score,
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LifestyleScores {
    pub schools: f64,
    pub parks: f64,
    pub childcare: f64,
    pub shopping: f64,
    pub cafes: f64,
}

impl LifestyleScores {
    pub(crate) fn weighted(&self) -> f64 {
        self.schools * 0.40
            + self.parks * 0.25
            + self.childcare * 0.20
            + self.shopping * 0.08
            + self.cafes * 0.07
    }
}

pub(crate) fn lifestyle_scores(suburb: &Suburb) -> LifestyleScores {
    LifestyleScores {
        schools: suburb.school_rating,
        parks: normalize(suburb.parks_density, 0.0, 10.0, false),
        childcare: normalize(suburb.childcare_centers, 0.0, 20.0, false),
        shopping: normalize(suburb.shopping_centers, 0.0, 10.0, false),
        cafes: normalize(suburb.cafes_restaurants, 0.0, 100.0, false),
    }
}
